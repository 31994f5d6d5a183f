//! Request type catalog
//!
//! The fixed mapping between the numeric request codes users enter and the
//! label plus priority a ticket is filed under. This is configuration, not
//! queue logic: the queue only ever sees the resulting [`Priority`].

use crate::core::Priority;
use crate::error::{HelpdeskError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The four kinds of IT request the desk accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestType {
    /// Code 1 - compromised accounts, phishing, malware
    Security,
    /// Code 2 - connectivity and outages
    Network,
    /// Code 3 - software or application installation
    SoftwareInstall,
    /// Code 4 - new machine setup
    NewComputer,
}

impl RequestType {
    /// Every request type, in code order
    pub const ALL: [Self; 4] = [
        Self::Security,
        Self::Network,
        Self::SoftwareInstall,
        Self::NewComputer,
    ];

    /// Parse the numeric code users enter (1..=4)
    pub const fn from_code(code: u8) -> Result<Self> {
        match code {
            1 => Ok(Self::Security),
            2 => Ok(Self::Network),
            3 => Ok(Self::SoftwareInstall),
            4 => Ok(Self::NewComputer),
            code => Err(HelpdeskError::InvalidRequestType { code }),
        }
    }

    /// The numeric code for this request type
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Security => 1,
            Self::Network => 2,
            Self::SoftwareInstall => 3,
            Self::NewComputer => 4,
        }
    }

    /// Label tickets of this type are filed under
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Security => "Security Issue",
            Self::Network => "Network Issue",
            Self::SoftwareInstall => "Software/app Installation",
            Self::NewComputer => "New Computer configuration",
        }
    }

    /// Priority tickets of this type are filed under
    #[must_use]
    pub const fn priority(self) -> Priority {
        match self {
            Self::Security => Priority::Critical,
            Self::Network => Priority::High,
            Self::SoftwareInstall => Priority::Medium,
            Self::NewComputer => Priority::Low,
        }
    }
}

impl TryFrom<u8> for RequestType {
    type Error = HelpdeskError;

    fn try_from(code: u8) -> Result<Self> {
        Self::from_code(code)
    }
}

impl fmt::Display for RequestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for request_type in RequestType::ALL {
            assert_eq!(
                RequestType::from_code(request_type.code()).unwrap(),
                request_type
            );
        }
    }

    #[test]
    fn test_code_and_priority_levels_agree() {
        // The catalog maps each code onto the priority with the same level
        for request_type in RequestType::ALL {
            assert_eq!(request_type.code(), request_type.priority().level());
        }
    }

    #[test]
    fn test_unknown_codes_rejected() {
        assert!(matches!(
            RequestType::from_code(0),
            Err(HelpdeskError::InvalidRequestType { code: 0 })
        ));
        assert!(RequestType::try_from(5).is_err());
    }
}
