//! Configuration loading
//!
//! Settings are read from an optional TOML file plus `HELPDESK_*`
//! environment variables. Everything has a sensible default, so running
//! without any configuration at all is the normal case.

use crate::error::Result;
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Queue tuning
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct QueueConfig {
    /// Initial capacity of the ticket queue; the queue doubles from here
    /// whenever it fills up
    pub initial_capacity: usize,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 100,
        }
    }
}

/// Ticket ID settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IdConfig {
    /// First ID handed out to a new ticket
    pub start: u32,
}

impl Default for IdConfig {
    fn default() -> Self {
        Self { start: 1000 }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HelpdeskConfig {
    pub queue: QueueConfig,
    pub ids: IdConfig,
}

impl HelpdeskConfig {
    /// Load configuration from the given file (if any) and the environment.
    ///
    /// Environment variables use the `HELPDESK` prefix with `__` as the
    /// section separator, e.g. `HELPDESK_QUEUE__INITIAL_CAPACITY=16`.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut builder = Config::builder();
        builder = match path {
            Some(path) => builder.add_source(File::from(path)),
            None => builder.add_source(File::with_name("helpdesk").required(false)),
        };
        builder = builder.add_source(Environment::with_prefix("HELPDESK").separator("__"));

        let settings = builder.build()?;
        Ok(settings.try_deserialize()?)
    }

    /// Load configuration, falling back to defaults if nothing is readable
    #[must_use]
    pub fn load_or_default() -> Self {
        Self::load(None).unwrap_or_default()
    }
}
