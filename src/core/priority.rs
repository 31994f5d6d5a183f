//! Ticket priority levels

use crate::error::{HelpdeskError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Priority of a ticket, from most to least urgent.
///
/// Levels map to the numeric codes used everywhere a priority is entered or
/// displayed: 1 is the most urgent, 4 the least. The `Ord` implementation
/// follows urgency, so `Critical < Low` and a min-heap over priorities
/// surfaces the most urgent ticket first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Level 1 - security incidents
    Critical,
    /// Level 2 - network outages
    High,
    /// Level 3 - software installation
    Medium,
    /// Level 4 - new hardware setup
    Low,
}

impl Priority {
    /// Numeric level of this priority (1 = most urgent)
    #[must_use]
    pub const fn level(self) -> u8 {
        match self {
            Self::Critical => 1,
            Self::High => 2,
            Self::Medium => 3,
            Self::Low => 4,
        }
    }

    /// Parse a numeric level into a priority.
    ///
    /// Values outside 1..=4 are rejected, never clamped.
    pub const fn from_level(level: u8) -> Result<Self> {
        match level {
            1 => Ok(Self::Critical),
            2 => Ok(Self::High),
            3 => Ok(Self::Medium),
            4 => Ok(Self::Low),
            value => Err(HelpdeskError::InvalidPriority { value }),
        }
    }

    /// Human-readable label for this level
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Critical => "Security Issue (Highest)",
            Self::High => "Network Issue",
            Self::Medium => "Software/app Installation",
            Self::Low => "New Computer configuration",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.level(), self.label())
    }
}

impl FromStr for Priority {
    type Err = HelpdeskError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "critical" | "security" => Ok(Self::Critical),
            "high" | "network" => Ok(Self::High),
            "medium" | "software" => Ok(Self::Medium),
            "low" | "hardware" => Ok(Self::Low),
            other => {
                let value = other.parse::<u8>().unwrap_or(0);
                Self::from_level(value)
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_round_trip() {
        for level in 1..=4 {
            let priority = Priority::from_level(level).unwrap();
            assert_eq!(priority.level(), level);
        }
    }

    #[test]
    fn test_out_of_range_levels_rejected() {
        assert!(matches!(
            Priority::from_level(0),
            Err(HelpdeskError::InvalidPriority { value: 0 })
        ));
        assert!(matches!(
            Priority::from_level(5),
            Err(HelpdeskError::InvalidPriority { value: 5 })
        ));
    }

    #[test]
    fn test_ordering_follows_urgency() {
        assert!(Priority::Critical < Priority::High);
        assert!(Priority::High < Priority::Medium);
        assert!(Priority::Medium < Priority::Low);
    }

    #[test]
    fn test_parse_names_and_levels() {
        assert_eq!("critical".parse::<Priority>().unwrap(), Priority::Critical);
        assert_eq!("2".parse::<Priority>().unwrap(), Priority::High);
        assert!("urgent-ish".parse::<Priority>().is_err());
    }
}
