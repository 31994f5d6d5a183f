use super::{Priority, Status, Ticket, TicketId};
use crate::error::Result;

/// Builder for creating Ticket instances
#[derive(Default)]
pub struct TicketBuilder {
    id: Option<TicketId>,
    creator: Option<String>,
    request_type: Option<String>,
    description: Option<String>,
    owner: Option<String>,
    priority: Option<Priority>,
    status: Option<Status>,
}

impl TicketBuilder {
    /// Create a new ticket builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ticket ID
    #[must_use]
    pub const fn id(mut self, id: TicketId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the creator
    #[must_use]
    pub fn creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = Some(creator.into());
        self
    }

    /// Set the request type
    #[must_use]
    pub fn request_type(mut self, request_type: impl Into<String>) -> Self {
        self.request_type = Some(request_type.into());
        self
    }

    /// Set the description
    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Assign an owner
    #[must_use]
    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Set the priority
    #[must_use]
    pub const fn priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Set the status
    #[must_use]
    pub const fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    /// Build the ticket.
    ///
    /// Goes through [`Ticket::new`], so the same validation applies: a
    /// missing or blank creator is rejected.
    pub fn build(self) -> Result<Ticket> {
        let mut ticket = Ticket::new(
            self.id.unwrap_or(TicketId::new(0)),
            self.creator.unwrap_or_default(),
            self.request_type.unwrap_or_default(),
            self.description.unwrap_or_default(),
            self.priority.unwrap_or(Priority::Medium),
        )?;

        if let Some(owner) = self.owner {
            ticket.set_owner(owner);
        }
        if let Some(status) = self.status {
            ticket.set_status(status);
        }

        Ok(ticket)
    }
}
