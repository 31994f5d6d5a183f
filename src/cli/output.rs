//! Terminal output formatting
//!
//! Small wrapper over `colored` that keeps user-facing output consistent
//! and supports a machine-readable JSON mode for scripting.

use crate::error::Result;
use colored::Colorize;
use serde::Serialize;

/// Formats command output for the terminal
#[derive(Debug, Clone, Copy)]
pub struct OutputFormatter {
    json: bool,
}

impl OutputFormatter {
    /// Create a formatter.
    ///
    /// `no_color` disables ANSI colors globally, which also keeps output
    /// clean when piped.
    #[must_use]
    pub fn new(json: bool, no_color: bool) -> Self {
        if no_color {
            colored::control::set_override(false);
        }
        Self { json }
    }

    /// Whether JSON output mode is active
    #[must_use]
    pub const fn is_json(&self) -> bool {
        self.json
    }

    /// Print a success message
    pub fn success(&self, message: &str) {
        println!("{} {message}", "✓".green().bold());
    }

    /// Print an informational message
    pub fn info(&self, message: &str) {
        println!("{message}");
    }

    /// Print a warning
    pub fn warn(&self, message: &str) {
        println!("{} {message}", "!".yellow().bold());
    }

    /// Print an error to stderr
    pub fn error(&self, message: &str) {
        eprintln!("{} {message}", "✗".red().bold());
    }

    /// Print a value as pretty JSON
    pub fn json<T: Serialize>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_mode_flag() {
        assert!(OutputFormatter::new(true, false).is_json());
        assert!(!OutputFormatter::new(false, false).is_json());
    }

    #[test]
    fn test_json_serializes_values() {
        let formatter = OutputFormatter::new(true, true);
        assert!(formatter.json(&serde_json::json!({"ok": true})).is_ok());
    }
}
