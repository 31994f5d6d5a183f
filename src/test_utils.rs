//! Test utilities for helpdesk
//!
//! Common fixtures and assertions shared by unit tests across the crate.

#![cfg(test)]

use crate::core::{Priority, Ticket, TicketBuilder, TicketId};
use crate::queue::TicketQueue;

/// Create a ticket with the given ID and numeric priority level
pub fn sample_ticket(id: u32, level: u8) -> Ticket {
    let priority = Priority::from_level(level).expect("test level must be 1-4");
    TicketBuilder::new()
        .id(TicketId::new(id))
        .creator(format!("user{id}"))
        .request_type(priority.label())
        .description(format!("Sample request from user{id}"))
        .priority(priority)
        .build()
        .expect("sample ticket must be valid")
}

/// Extract every ticket and return the priority levels in extraction order
pub fn drain_priorities(queue: &mut TicketQueue) -> Vec<u8> {
    let mut levels = Vec::with_capacity(queue.len());
    while let Some(ticket) = queue.extract_min() {
        levels.push(ticket.priority.level());
    }
    levels
}

/// Assert the min-heap invariant over the live slots: every node's priority
/// is no less urgent than its parent's
pub fn assert_heap_invariant(queue: &TicketQueue) {
    let slots = queue.tickets();
    for index in 1..slots.len() {
        let parent = (index - 1) / 2;
        assert!(
            slots[parent].priority <= slots[index].priority,
            "heap invariant broken at index {index}: parent #{} has {:?}, child #{} has {:?}",
            slots[parent].id,
            slots[parent].priority,
            slots[index].id,
            slots[index].priority,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_ticket_levels() {
        let ticket = sample_ticket(1000, 1);
        assert_eq!(ticket.id, TicketId::new(1000));
        assert_eq!(ticket.priority, Priority::Critical);
    }

    #[test]
    #[should_panic(expected = "test level must be 1-4")]
    fn test_sample_ticket_rejects_bad_level() {
        sample_ticket(1000, 9);
    }
}
