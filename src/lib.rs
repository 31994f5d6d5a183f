//! helpdesk - Priority-driven IT support ticket triage for the terminal
//!
//! This crate tracks IT support requests ("tickets") and always surfaces the
//! highest-priority unresolved ticket for processing. At its center sits a
//! hand-rolled array-backed binary min-heap keyed on priority, extended with
//! the by-ID operations a real triage desk needs:
//! - Linear search by ticket ID
//! - In-place priority updates with re-heapification
//! - Removal of arbitrary tickets, not just the root
//!
//! The queue lives entirely in memory and is exclusively owned by a single
//! [`service::TicketService`], which assigns IDs, maps request types to
//! priorities, and keeps session statistics. The CLI wraps that service in an
//! interactive menu session.
//!
//! # Example
//!
//! ```rust
//! use helpdesk::core::{IdGenerator, Priority, Ticket};
//! use helpdesk::queue::TicketQueue;
//!
//! let ids = IdGenerator::new();
//! let mut queue = TicketQueue::new();
//!
//! let ticket = Ticket::new(
//!     ids.next(),
//!     "m.ferro",
//!     "Network Issue",
//!     "VPN drops every few minutes",
//!     Priority::High,
//! )?;
//! queue.insert(ticket);
//!
//! // The most urgent ticket is always at the front
//! assert!(queue.peek().is_some());
//! # Ok::<(), helpdesk::HelpdeskError>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod interactive;
pub mod queue;
pub mod service;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types
pub use error::{HelpdeskError, Result};
