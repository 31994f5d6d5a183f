//! helpdesk - Priority-driven IT support ticket triage
//!
//! This is the main entry point for the helpdesk CLI. It parses arguments,
//! loads configuration, and dispatches either the interactive menu session
//! or the scripted demo walkthrough.

use clap::Parser;
use helpdesk::cli::{Cli, Commands, OutputFormatter, handlers};
use helpdesk::config::HelpdeskConfig;
use helpdesk::error::Result;
use helpdesk::interactive::MenuSession;
use std::process;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Configure output formatter based on flags
    let formatter = OutputFormatter::new(cli.json, cli.no_color);

    // Execute the command and handle errors
    if let Err(e) = run(cli, formatter) {
        handle_error(&e, &formatter);
        process::exit(1);
    }
}

/// Run the CLI application with the parsed arguments
fn run(cli: Cli, formatter: OutputFormatter) -> Result<()> {
    // Set up logging if verbose mode is enabled
    if cli.verbose {
        tracing_subscriber::fmt().with_env_filter("debug").init();
    }

    let config = match &cli.config {
        Some(path) => HelpdeskConfig::load(Some(path))?,
        None => HelpdeskConfig::load_or_default(),
    };

    match cli.command {
        Some(Commands::Demo) => handlers::handle_demo(&config, &formatter),
        Some(Commands::Menu) | None => MenuSession::new(&config, formatter).run(),
    }
}

/// Handle errors and display them to the user
///
/// Prints the main message, any suggestions for fixing it, and — in JSON
/// mode — a machine-readable error object.
fn handle_error(error: &helpdesk::HelpdeskError, formatter: &OutputFormatter) {
    formatter.error(&error.user_message());

    let suggestions = error.suggestions();
    if !suggestions.is_empty() {
        formatter.info("\nSuggestions:");
        for suggestion in &suggestions {
            formatter.info(&format!("  • {suggestion}"));
        }
    }

    if formatter.is_json() {
        let _ = formatter.json(&serde_json::json!({
            "status": "error",
            "error": error.to_string(),
            "suggestions": suggestions,
            "recoverable": error.is_recoverable(),
        }));
    }

    // In verbose mode, show the full error chain
    if tracing::enabled!(tracing::Level::DEBUG) {
        eprintln!("\nDebug information:");
        eprintln!("{error:?}");
    }
}
