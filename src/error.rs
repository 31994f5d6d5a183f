//! Error types for the helpdesk crate
//!
//! Validation failures are reported through [`HelpdeskError`] and surface
//! synchronously, before any state is mutated. "Not found" is deliberately
//! not an error: queue and service operations signal it through `Option` or
//! `bool` returns so callers are forced to branch on the expected outcome.

use thiserror::Error;

/// Result type alias used throughout the crate
pub type Result<T> = std::result::Result<T, HelpdeskError>;

/// All errors that can occur in the helpdesk system
#[derive(Error, Debug)]
pub enum HelpdeskError {
    /// Priority level outside the supported 1..=4 range
    #[error("priority level {value} is out of range (expected 1-4)")]
    InvalidPriority { value: u8 },

    /// Request type code outside the supported 1..=4 range
    #[error("request type {code} is not recognized (expected 1-4)")]
    InvalidRequestType { code: u8 },

    /// A required text field was empty or blank
    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },

    /// I/O error from the terminal session
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error raised by an interactive prompt
    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    /// Configuration could not be loaded or parsed
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// JSON serialization failure
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl HelpdeskError {
    /// User-facing message for this error
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::InvalidPriority { value } => {
                format!("Priority level {value} is not valid")
            },
            Self::InvalidRequestType { code } => {
                format!("Request type {code} is not valid")
            },
            Self::EmptyField { field } => format!("The {field} field cannot be empty"),
            Self::Config(e) => format!("Failed to load configuration: {e}"),
            other => other.to_string(),
        }
    }

    /// Actionable suggestions to accompany the error message
    #[must_use]
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidPriority { .. } => vec![
                "Use a level between 1 (most urgent) and 4 (least urgent)".to_string(),
            ],
            Self::InvalidRequestType { .. } => vec![
                "1: Security Issue".to_string(),
                "2: Network Issue".to_string(),
                "3: Software/app Installation".to_string(),
                "4: New Computer configuration".to_string(),
            ],
            Self::EmptyField { field } => {
                vec![format!("Provide a non-empty {field} and try again")]
            },
            Self::Config(_) => vec![
                "Check the config file path passed via --config".to_string(),
                "Remove the file to fall back to defaults".to_string(),
            ],
            _ => Vec::new(),
        }
    }

    /// Whether the session can continue after this error
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidPriority { .. }
                | Self::InvalidRequestType { .. }
                | Self::EmptyField { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_priority_message() {
        let err = HelpdeskError::InvalidPriority { value: 7 };
        assert!(err.user_message().contains('7'));
        assert!(!err.suggestions().is_empty());
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_request_type_suggestions_list_all_codes() {
        let err = HelpdeskError::InvalidRequestType { code: 9 };
        assert_eq!(err.suggestions().len(), 4);
    }

    #[test]
    fn test_io_error_is_not_recoverable() {
        let err = HelpdeskError::Io(std::io::Error::other("boom"));
        assert!(!err.is_recoverable());
    }
}
