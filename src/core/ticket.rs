//! The ticket record

use super::{Priority, Status};
use crate::error::{HelpdeskError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Timestamp format used in the detailed rendering
const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M:%S";

/// Unique identifier of a ticket.
///
/// IDs are small integers handed out by [`IdGenerator`](super::IdGenerator)
/// and stay unique for the lifetime of the process.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct TicketId(u32);

impl TicketId {
    /// Wrap a raw ID value
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// The raw numeric value
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TicketId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        s.trim().trim_start_matches('#').parse().map(Self)
    }
}

/// One IT support request.
///
/// Identity (`id`) and provenance (`creator`, `request_type`, `description`,
/// `created_at`) are fixed at construction. Priority, status, and owner are
/// mutable; every mutation refreshes `updated_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    /// Unique identifier, assigned by the ID generator
    pub id: TicketId,
    /// Person who reported the issue
    pub creator: String,
    /// Kind of request, e.g. "Network Issue"
    pub request_type: String,
    /// Free-form description of the issue
    pub description: String,
    /// Technician responsible for the ticket, if assigned
    pub owner: Option<String>,
    /// Current priority level
    pub priority: Priority,
    /// Lifecycle status
    pub status: Status,
    /// When the ticket was created
    pub created_at: DateTime<Utc>,
    /// When any field was last changed
    pub updated_at: DateTime<Utc>,
}

impl Ticket {
    /// Create a new ticket in the `Open` state.
    ///
    /// # Errors
    ///
    /// Returns [`HelpdeskError::EmptyField`] if `creator` is empty or blank.
    pub fn new(
        id: TicketId,
        creator: impl Into<String>,
        request_type: impl Into<String>,
        description: impl Into<String>,
        priority: Priority,
    ) -> Result<Self> {
        let creator = creator.into();
        if creator.trim().is_empty() {
            return Err(HelpdeskError::EmptyField { field: "creator" });
        }

        let now = Utc::now();
        Ok(Self {
            id,
            creator,
            request_type: request_type.into(),
            description: description.into(),
            owner: None,
            priority,
            status: Status::Open,
            created_at: now,
            updated_at: now,
        })
    }

    /// Change the priority level
    pub fn set_priority(&mut self, priority: Priority) {
        self.priority = priority;
        self.touch();
    }

    /// Change the lifecycle status
    pub fn set_status(&mut self, status: Status) {
        self.status = status;
        self.touch();
    }

    /// Assign a technician to the ticket
    pub fn set_owner(&mut self, owner: impl Into<String>) {
        self.owner = Some(owner.into());
        self.touch();
    }

    /// One-line summary used in list views
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Ticket #{} | Priority {} | {} | {} | Status: {}",
            self.id,
            self.priority.level(),
            self.request_type,
            self.creator,
            self.status,
        )
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl fmt::Display for Ticket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== Ticket #{} ===", self.id)?;
        writeln!(f, "Creator: {}", self.creator)?;
        writeln!(f, "Owner: {}", self.owner.as_deref().unwrap_or("Unassigned"))?;
        writeln!(f, "Type: {}", self.request_type)?;
        writeln!(f, "Priority: {}", self.priority)?;
        writeln!(f, "Status: {}", self.status)?;
        writeln!(f, "Description: {}", self.description)?;
        writeln!(f, "Created: {}", self.created_at.format(TIMESTAMP_FORMAT))?;
        write!(f, "Updated: {}", self.updated_at.format(TIMESTAMP_FORMAT))
    }
}
