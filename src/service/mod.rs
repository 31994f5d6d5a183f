//! Business logic for the helpdesk system
//!
//! [`TicketService`] sits between the user interface and the priority queue.
//! It owns the queue and the ID generator, applies the request-type catalog
//! when tickets are filed, keeps the status bookkeeping consistent, and
//! tracks session statistics.

mod request_type;

pub use request_type::RequestType;

use crate::core::{IdGenerator, Priority, Status, Ticket, TicketId};
use crate::error::{HelpdeskError, Result};
use crate::queue::TicketQueue;
use serde::Serialize;
use tracing::{debug, info};

/// Counters reported by [`TicketService::stats`]
#[derive(Debug, Clone, Serialize)]
pub struct SystemStats {
    /// Tickets created during this session
    pub created: u64,
    /// Tickets taken off the queue for processing
    pub processed: u64,
    /// Tickets currently waiting in the queue
    pub queued: usize,
    /// Queued tickets per priority level, index 0 holding level 1
    pub by_priority: [usize; 4],
}

/// Orchestrates ticket operations over the priority queue
#[derive(Debug)]
pub struct TicketService {
    queue: TicketQueue,
    ids: IdGenerator,
    created: u64,
    processed: u64,
}

impl TicketService {
    /// Create a service with default queue capacity and ID range
    #[must_use]
    pub fn new() -> Self {
        Self::with_settings(None, None)
    }

    /// Create a service with a chosen queue capacity and/or first ticket ID
    #[must_use]
    pub fn with_settings(capacity: Option<usize>, first_id: Option<u32>) -> Self {
        let queue = capacity.map_or_else(TicketQueue::new, TicketQueue::with_capacity);
        let ids = first_id.map_or_else(IdGenerator::new, IdGenerator::starting_at);
        Self {
            queue,
            ids,
            created: 0,
            processed: 0,
        }
    }

    /// File a new ticket.
    ///
    /// Maps the request code onto its label and priority, assigns the next
    /// ID, and inserts the ticket into the queue.
    ///
    /// # Errors
    ///
    /// Returns [`HelpdeskError::InvalidRequestType`] for codes outside 1..=4
    /// and [`HelpdeskError::EmptyField`] when creator or description is
    /// blank. Nothing is mutated on failure.
    pub fn create_ticket(
        &mut self,
        creator: &str,
        request_code: u8,
        description: &str,
    ) -> Result<TicketId> {
        let request_type = RequestType::from_code(request_code)?;
        if creator.trim().is_empty() {
            return Err(HelpdeskError::EmptyField { field: "creator" });
        }
        if description.trim().is_empty() {
            return Err(HelpdeskError::EmptyField {
                field: "description",
            });
        }

        let id = self.ids.next();
        let ticket = Ticket::new(
            id,
            creator,
            request_type.label(),
            description,
            request_type.priority(),
        )?;

        self.queue.insert(ticket);
        self.created += 1;
        info!(%id, %request_type, "ticket created");
        Ok(id)
    }

    /// Take the most urgent ticket off the queue and mark it in progress.
    /// Returns `None` when the queue is empty.
    pub fn process_next(&mut self) -> Option<Ticket> {
        let mut ticket = self.queue.extract_min()?;
        ticket.set_status(Status::InProgress);
        self.processed += 1;
        info!(id = %ticket.id, priority = ticket.priority.level(), "processing ticket");
        Some(ticket)
    }

    /// The most urgent ticket without removing it
    #[must_use]
    pub fn peek_next(&self) -> Option<&Ticket> {
        self.queue.peek()
    }

    /// Look up a ticket by ID
    #[must_use]
    pub fn search(&self, id: TicketId) -> Option<&Ticket> {
        debug!(%id, "searching for ticket");
        self.queue.search(id)
    }

    /// Change the priority of a queued ticket.
    ///
    /// Returns `Ok(false)` when no ticket carries the given ID; the queue is
    /// untouched in that case.
    ///
    /// # Errors
    ///
    /// Returns [`HelpdeskError::InvalidPriority`] for levels outside 1..=4.
    pub fn update_priority(&mut self, id: TicketId, level: u8) -> Result<bool> {
        let priority = Priority::from_level(level)?;
        let updated = self.queue.update_priority(id, priority);
        if updated {
            info!(%id, level, "priority updated");
        }
        Ok(updated)
    }

    /// Remove a ticket from the queue without processing it.
    ///
    /// The removed ticket is marked `Closed`. Returns `None` when no ticket
    /// carries the given ID.
    pub fn remove_ticket(&mut self, id: TicketId) -> Option<Ticket> {
        let mut removed = self.queue.remove(id)?;
        removed.set_status(Status::Closed);
        info!(%id, "ticket removed");
        Some(removed)
    }

    /// Assign a technician to a queued ticket and mark it in progress.
    ///
    /// Returns `false` when no ticket carries the given ID.
    pub fn assign_owner(&mut self, id: TicketId, owner: &str) -> bool {
        match self.queue.search_mut(id) {
            Some(ticket) => {
                ticket.set_owner(owner);
                ticket.set_status(Status::InProgress);
                info!(%id, owner, "owner assigned");
                true
            },
            None => false,
        }
    }

    /// All queued tickets in no particular order
    #[must_use]
    pub fn tickets(&self) -> &[Ticket] {
        self.queue.tickets()
    }

    /// All queued tickets sorted ascending by priority
    #[must_use]
    pub fn sorted_tickets(&self) -> Vec<&Ticket> {
        self.queue.sorted_tickets()
    }

    /// Number of tickets currently queued
    #[must_use]
    pub fn ticket_count(&self) -> usize {
        self.queue.len()
    }

    /// Session statistics
    #[must_use]
    pub fn stats(&self) -> SystemStats {
        let mut by_priority = [0usize; 4];
        for ticket in self.queue.tickets() {
            by_priority[(ticket.priority.level() - 1) as usize] += 1;
        }
        SystemStats {
            created: self.created,
            processed: self.processed,
            queued: self.queue.len(),
            by_priority,
        }
    }

    /// Drop every queued ticket. Session counters are kept.
    pub fn clear_all(&mut self) {
        self.queue.clear();
        info!("all tickets cleared");
    }
}

impl Default for TicketService {
    fn default() -> Self {
        Self::new()
    }
}
