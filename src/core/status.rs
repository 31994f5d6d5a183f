//! Ticket lifecycle status

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a ticket
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Newly created, waiting in the queue
    #[default]
    Open,
    /// Picked up by a technician
    InProgress,
    /// Issue fixed, awaiting confirmation
    Resolved,
    /// No further work will happen
    Closed,
}

impl Status {
    /// Whether a technician can still pick this ticket up
    #[must_use]
    pub const fn is_open(self) -> bool {
        matches!(self, Self::Open | Self::InProgress)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Open => "OPEN",
            Self::InProgress => "IN_PROGRESS",
            Self::Resolved => "RESOLVED",
            Self::Closed => "CLOSED",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_open() {
        assert_eq!(Status::default(), Status::Open);
        assert!(Status::default().is_open());
    }

    #[test]
    fn test_closed_states() {
        assert!(!Status::Resolved.is_open());
        assert!(!Status::Closed.is_open());
    }
}
