//! Monotonic ticket ID generation

use super::TicketId;
use std::sync::atomic::{AtomicU32, Ordering};

/// First ID handed out by a fresh generator
const FIRST_ID: u32 = 1000;

/// Generates unique, monotonically increasing ticket IDs.
///
/// The generator is a plain value owned by whoever orchestrates the queue;
/// there is no process-wide instance. The counter is atomic so a generator
/// shared behind an `Arc` still hands out unique IDs, though the rest of the
/// system is single-threaded by design.
#[derive(Debug)]
pub struct IdGenerator {
    next: AtomicU32,
}

impl IdGenerator {
    /// Create a generator starting at 1000
    #[must_use]
    pub const fn new() -> Self {
        Self::starting_at(FIRST_ID)
    }

    /// Create a generator starting at an arbitrary value
    #[must_use]
    pub const fn starting_at(first: u32) -> Self {
        Self {
            next: AtomicU32::new(first),
        }
    }

    /// Hand out the next unique ID
    pub fn next(&self) -> TicketId {
        TicketId::new(self.next.fetch_add(1, Ordering::Relaxed))
    }

    /// The ID the next call to [`next`](Self::next) will return
    pub fn current(&self) -> u32 {
        self.next.load(Ordering::Relaxed)
    }

    /// Reset the counter to its initial value.
    ///
    /// IDs handed out earlier stay in circulation, so this is only safe on a
    /// system whose tickets have been cleared as well.
    pub fn reset(&self) {
        self.next.store(FIRST_ID, Ordering::Relaxed);
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
