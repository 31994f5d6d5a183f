//! Priority queue backing the ticket system
//!
//! A hand-rolled array-backed binary min-heap keyed on ticket priority. The
//! standard library's `BinaryHeap` is deliberately not used: tickets are
//! addressed by ID for search, priority updates, and removal, and those
//! operations need direct access to the backing array and the sift routines.
//!
//! Layout: the heap is a complete binary tree stored in a `Vec`, node `i`
//! has parent `(i - 1) / 2` and children `2i + 1` / `2i + 2`. Invariant: for
//! every live index `i > 0`, `priority(parent(i)) <= priority(i)`. Ties are
//! broken arbitrarily; there is no secondary ordering key.
//!
//! Complexity:
//! - insert / extract_min: O(log n)
//! - peek: O(1)
//! - search / update_priority / remove: O(n) scan + O(log n) re-heapify

use crate::core::{Priority, Ticket, TicketId};
use tracing::debug;

/// Capacity used by [`TicketQueue::new`]
const DEFAULT_CAPACITY: usize = 100;

/// Min-heap of tickets ordered by priority.
///
/// The queue tracks a logical capacity alongside the live element count.
/// Capacity grows by doubling whenever an insert would exceed it and is
/// never reduced, not even by [`clear`](Self::clear).
#[derive(Debug)]
pub struct TicketQueue {
    heap: Vec<Ticket>,
    capacity: usize,
}

impl TicketQueue {
    /// Create a queue with the default capacity
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create a queue with a chosen initial capacity.
    ///
    /// A capacity of 0 is treated as 1, since a zero-capacity queue could
    /// never accept an insert.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            heap: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Insert a ticket, growing the queue if it is full. O(log n).
    pub fn insert(&mut self, ticket: Ticket) {
        if self.heap.len() == self.capacity {
            self.grow();
        }

        self.heap.push(ticket);
        self.sift_up(self.heap.len() - 1);
    }

    /// Remove and return the most urgent ticket, or `None` if the queue is
    /// empty. O(log n).
    pub fn extract_min(&mut self) -> Option<Ticket> {
        if self.heap.is_empty() {
            return None;
        }

        // Move the last element into the root, then restore the invariant
        // from the top. The vacated slot is dropped by the pop itself.
        let last = self.heap.len() - 1;
        self.heap.swap(0, last);
        let min = self.heap.pop();

        if !self.heap.is_empty() {
            self.sift_down(0);
        }
        min
    }

    /// The most urgent ticket without removing it. O(1).
    #[must_use]
    pub fn peek(&self) -> Option<&Ticket> {
        self.heap.first()
    }

    /// Find a ticket by ID. O(n).
    ///
    /// Returns the lowest-index match if IDs were ever duplicated, which the
    /// orchestration layer is responsible for preventing.
    #[must_use]
    pub fn search(&self, id: TicketId) -> Option<&Ticket> {
        self.heap.iter().find(|t| t.id == id)
    }

    /// Find a ticket by ID for mutation. O(n).
    ///
    /// Changing status or owner through this handle leaves heap order
    /// intact. Priority changes MUST go through
    /// [`update_priority`](Self::update_priority) instead, which restores
    /// the heap invariant.
    pub fn search_mut(&mut self, id: TicketId) -> Option<&mut Ticket> {
        self.heap.iter_mut().find(|t| t.id == id)
    }

    /// Change the priority of the ticket with the given ID and restore heap
    /// order. Returns `false` if no such ticket exists.
    ///
    /// O(n) for the scan plus O(log n) for the re-heapify.
    pub fn update_priority(&mut self, id: TicketId, priority: Priority) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };

        let old = self.heap[index].priority;
        self.heap[index].set_priority(priority);

        // Only one direction can be violated: more urgent than before can
        // only break the parent link, less urgent only the child links.
        if priority < old {
            self.sift_up(index);
        } else if priority > old {
            self.sift_down(index);
        }
        true
    }

    /// Remove the ticket with the given ID from anywhere in the queue.
    /// Returns `None` if no such ticket exists.
    ///
    /// O(n) for the scan plus O(log n) for the re-heapify.
    pub fn remove(&mut self, id: TicketId) -> Option<Ticket> {
        let index = self.position(id)?;

        let last = self.heap.len() - 1;
        self.heap.swap(index, last);
        let removed = self.heap.pop();

        // The element moved into the vacated slot can violate the invariant
        // in either direction; at most one of these actually moves it.
        if index < self.heap.len() {
            self.sift_up(index);
            self.sift_down(index);
        }
        removed
    }

    /// All live tickets in heap-array order (no particular order)
    #[must_use]
    pub fn tickets(&self) -> &[Ticket] {
        &self.heap
    }

    /// All live tickets sorted ascending by priority.
    ///
    /// No relative order is guaranteed among tickets of equal priority.
    #[must_use]
    pub fn sorted_tickets(&self) -> Vec<&Ticket> {
        let mut sorted: Vec<&Ticket> = self.heap.iter().collect();
        sorted.sort_by_key(|t| t.priority);
        sorted
    }

    /// Drop all tickets. Capacity is retained.
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Number of tickets in the queue
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the queue holds no tickets
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Current logical capacity
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Index of the ticket with the given ID, scanning live slots in order
    fn position(&self, id: TicketId) -> Option<usize> {
        self.heap.iter().position(|t| t.id == id)
    }

    /// Double the capacity and reserve the backing storage up front
    fn grow(&mut self) {
        let new_capacity = self.capacity * 2;
        debug!(
            from = self.capacity,
            to = new_capacity,
            "growing ticket queue"
        );
        self.heap.reserve_exact(new_capacity - self.heap.len());
        self.capacity = new_capacity;
    }

    /// Move the element at `index` toward the root until its parent is no
    /// more urgent than it
    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.heap[parent].priority <= self.heap[index].priority {
                break;
            }
            self.heap.swap(parent, index);
            index = parent;
        }
    }

    /// Move the element at `index` toward the leaves while either child is
    /// more urgent than it
    fn sift_down(&mut self, mut index: usize) {
        let len = self.heap.len();
        loop {
            let mut smallest = index;
            let left = 2 * index + 1;
            let right = 2 * index + 2;

            if left < len && self.heap[left].priority < self.heap[smallest].priority {
                smallest = left;
            }
            if right < len && self.heap[right].priority < self.heap[smallest].priority {
                smallest = right;
            }
            if smallest == index {
                break;
            }

            self.heap.swap(index, smallest);
            index = smallest;
        }
    }
}

impl Default for TicketQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_heap_invariant, drain_priorities, sample_ticket};

    #[test]
    fn test_new_queue_is_empty() {
        let queue = TicketQueue::new();
        assert!(queue.is_empty());
        assert_eq!(queue.len(), 0);
        assert!(queue.peek().is_none());
        assert_eq!(queue.capacity(), 100);
    }

    #[test]
    fn test_extraction_yields_priorities_in_order() {
        let mut queue = TicketQueue::new();
        for (id, level) in [3, 1, 4, 1, 2].into_iter().enumerate() {
            queue.insert(sample_ticket(1000 + id as u32, level));
        }

        assert_eq!(drain_priorities(&mut queue), vec![1, 1, 2, 3, 4]);
        assert!(queue.is_empty());
    }

    #[test]
    fn test_peek_does_not_mutate() {
        let mut queue = TicketQueue::new();
        queue.insert(sample_ticket(1000, 2));
        queue.insert(sample_ticket(1001, 1));

        assert_eq!(queue.peek().unwrap().id, TicketId::new(1001));
        assert_eq!(queue.peek().unwrap().id, TicketId::new(1001));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_capacity_growth_is_transparent() {
        let mut queue = TicketQueue::with_capacity(2);
        for id in 1000..1005 {
            queue.insert(sample_ticket(id, 3));
        }

        assert_eq!(queue.len(), 5);
        assert!(!queue.is_empty());
        // 2 -> 4 -> 8
        assert_eq!(queue.capacity(), 8);
        for id in 1000..1005 {
            assert!(queue.search(TicketId::new(id)).is_some());
        }
    }

    #[test]
    fn test_search_finds_by_id() {
        let mut queue = TicketQueue::new();
        queue.insert(sample_ticket(1000, 1));
        queue.insert(sample_ticket(1001, 2));

        let found = queue.search(TicketId::new(1001)).unwrap();
        assert_eq!(found.id, TicketId::new(1001));
        assert!(queue.search(TicketId::new(9999)).is_none());
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_update_priority_round_trip() {
        let mut queue = TicketQueue::new();
        queue.insert(sample_ticket(1000, 1));
        queue.insert(sample_ticket(1001, 3));
        queue.insert(sample_ticket(1002, 2));

        // Demote the most urgent ticket to the least urgent level
        assert!(queue.update_priority(TicketId::new(1000), Priority::Low));
        assert_heap_invariant(&queue);

        let first = queue.extract_min().unwrap();
        let second = queue.extract_min().unwrap();
        let last = queue.extract_min().unwrap();
        assert_eq!(first.id, TicketId::new(1002));
        assert_eq!(second.id, TicketId::new(1001));
        assert_eq!(last.id, TicketId::new(1000));
        assert_eq!(last.priority, Priority::Low);
    }

    #[test]
    fn test_update_priority_promotes_to_front() {
        let mut queue = TicketQueue::new();
        queue.insert(sample_ticket(1000, 2));
        queue.insert(sample_ticket(1001, 4));
        queue.insert(sample_ticket(1002, 3));

        assert!(queue.update_priority(TicketId::new(1001), Priority::Critical));
        assert_heap_invariant(&queue);
        assert_eq!(queue.peek().unwrap().id, TicketId::new(1001));
    }

    #[test]
    fn test_update_priority_unchanged_level() {
        let mut queue = TicketQueue::new();
        queue.insert(sample_ticket(1000, 2));
        queue.insert(sample_ticket(1001, 3));

        assert!(queue.update_priority(TicketId::new(1001), Priority::Medium));
        assert_heap_invariant(&queue);
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_remove_from_middle_preserves_order() {
        let mut queue = TicketQueue::new();
        let levels = [1, 2, 3, 4, 4];
        for (id, level) in levels.into_iter().enumerate() {
            queue.insert(sample_ticket(1000 + id as u32, level));
        }

        let removed = queue.remove(TicketId::new(1002)).unwrap();
        assert_eq!(removed.priority.level(), 3);
        assert_eq!(queue.len(), 4);
        assert_heap_invariant(&queue);
        assert_eq!(drain_priorities(&mut queue), vec![1, 2, 4, 4]);
    }

    #[test]
    fn test_remove_last_and_root() {
        let mut queue = TicketQueue::new();
        queue.insert(sample_ticket(1000, 1));
        queue.insert(sample_ticket(1001, 2));
        queue.insert(sample_ticket(1002, 3));

        // Root removal
        assert!(queue.remove(TicketId::new(1000)).is_some());
        assert_heap_invariant(&queue);

        // Removing the final slot exercises the index == len path
        assert!(queue.remove(TicketId::new(1002)).is_some());
        assert_heap_invariant(&queue);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_not_found_leaves_queue_untouched() {
        let mut queue = TicketQueue::new();
        queue.insert(sample_ticket(1000, 2));

        let missing = TicketId::new(4242);
        assert!(queue.search(missing).is_none());
        assert!(!queue.update_priority(missing, Priority::Critical));
        assert!(queue.remove(missing).is_none());
        assert_eq!(queue.len(), 1);
        assert_heap_invariant(&queue);
    }

    #[test]
    fn test_invariant_after_mixed_operations() {
        let mut queue = TicketQueue::with_capacity(4);
        for (id, level) in [4, 2, 3, 1, 2, 4, 1, 3].into_iter().enumerate() {
            queue.insert(sample_ticket(2000 + id as u32, level));
            assert_heap_invariant(&queue);
        }

        queue.extract_min();
        assert_heap_invariant(&queue);
        queue.update_priority(TicketId::new(2005), Priority::Critical);
        assert_heap_invariant(&queue);
        queue.remove(TicketId::new(2002));
        assert_heap_invariant(&queue);
        queue.extract_min();
        assert_heap_invariant(&queue);
    }

    #[test]
    fn test_sorted_tickets_ascending_by_priority() {
        let mut queue = TicketQueue::new();
        for (id, level) in [4, 1, 3, 2, 3].into_iter().enumerate() {
            queue.insert(sample_ticket(1000 + id as u32, level));
        }

        let levels: Vec<u8> = queue
            .sorted_tickets()
            .iter()
            .map(|t| t.priority.level())
            .collect();
        assert_eq!(levels, vec![1, 2, 3, 3, 4]);
        // Snapshot only: the queue itself is untouched
        assert_eq!(queue.len(), 5);
        assert_heap_invariant(&queue);
    }

    #[test]
    fn test_clear_resets_size_but_not_capacity() {
        let mut queue = TicketQueue::with_capacity(4);
        for id in 1000..1003 {
            queue.insert(sample_ticket(id, 2));
        }

        queue.clear();
        assert_eq!(queue.len(), 0);
        assert!(queue.is_empty());
        assert_eq!(queue.capacity(), 4);

        // Refilling to the old size must not trigger a resize
        for id in 1000..1003 {
            queue.insert(sample_ticket(id, 2));
        }
        assert_eq!(queue.capacity(), 4);
    }

    #[test]
    fn test_search_mut_allows_owner_updates() {
        let mut queue = TicketQueue::new();
        queue.insert(sample_ticket(1000, 2));

        queue
            .search_mut(TicketId::new(1000))
            .unwrap()
            .set_owner("n.adeyemi");
        assert_eq!(
            queue.search(TicketId::new(1000)).unwrap().owner.as_deref(),
            Some("n.adeyemi")
        );
        assert_heap_invariant(&queue);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let mut queue = TicketQueue::with_capacity(0);
        assert_eq!(queue.capacity(), 1);
        queue.insert(sample_ticket(1000, 1));
        queue.insert(sample_ticket(1001, 2));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.capacity(), 2);
    }
}
