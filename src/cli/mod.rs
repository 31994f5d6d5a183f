//! Command-line interface
//!
//! Argument parsing lives here; the actual work happens in
//! [`handlers`]. The binary defaults to the interactive menu session when no
//! subcommand is given.

pub mod handlers;
pub mod output;

pub use output::OutputFormatter;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Priority-driven IT support ticket triage for the terminal
#[derive(Parser, Debug)]
#[command(name = "helpdesk", version, about, long_about = None)]
pub struct Cli {
    /// Output results as JSON where supported
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to a configuration file
    #[arg(long, global = true, env = "HELPDESK_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive triage session (the default)
    Menu,
    /// Run a scripted walkthrough of the ticket lifecycle
    Demo,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from(["helpdesk"]);
        assert!(cli.command.is_none());

        let cli = Cli::parse_from(["helpdesk", "demo", "--json"]);
        assert!(matches!(cli.command, Some(Commands::Demo)));
        assert!(cli.json);

        let cli = Cli::parse_from(["helpdesk", "menu", "--no-color", "-v"]);
        assert!(matches!(cli.command, Some(Commands::Menu)));
        assert!(cli.no_color);
        assert!(cli.verbose);
    }
}
