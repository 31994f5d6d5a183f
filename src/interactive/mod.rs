//! Interactive menu session
//!
//! The terminal UI of the triage desk: a menu loop over one in-memory
//! [`TicketService`]. Each action dispatches to its handler and returns to
//! the menu; the session ends when the user exits, and the queue dies with
//! the process.

use crate::cli::{OutputFormatter, handlers};
use crate::config::HelpdeskConfig;
use crate::error::Result;
use crate::service::TicketService;
use dialoguer::{Select, theme::ColorfulTheme};

/// Menu entries, in display order
const MENU: &[&str] = &[
    "Create new ticket",
    "Process next ticket (highest priority)",
    "Search for ticket",
    "Update ticket priority",
    "Remove ticket",
    "Assign owner to ticket",
    "Display all tickets (summary)",
    "Display all tickets (detailed)",
    "Display statistics",
    "Peek next ticket",
    "Exit",
];

/// Interactive triage session over a single in-memory service
pub struct MenuSession {
    service: TicketService,
    formatter: OutputFormatter,
    theme: ColorfulTheme,
}

impl MenuSession {
    /// Create a session configured from the loaded settings
    #[must_use]
    pub fn new(config: &HelpdeskConfig, formatter: OutputFormatter) -> Self {
        Self {
            service: TicketService::with_settings(
                Some(config.queue.initial_capacity),
                Some(config.ids.start),
            ),
            formatter,
            theme: ColorfulTheme::default(),
        }
    }

    /// Run the menu loop until the user exits
    pub fn run(&mut self) -> Result<()> {
        self.formatter.info("=== IT Helpdesk: priority ticket triage ===");
        self.formatter
            .info("Tickets live in memory for the duration of this session\n");

        loop {
            let choice = Select::with_theme(&self.theme)
                .with_prompt("Main menu")
                .items(MENU)
                .default(0)
                .interact()?;

            match choice {
                0 => handlers::handle_new_ticket(&mut self.service, &self.formatter)?,
                1 => handlers::handle_process_next(&mut self.service, &self.formatter)?,
                2 => handlers::handle_search(&self.service, &self.formatter)?,
                3 => handlers::handle_update_priority(&mut self.service, &self.formatter)?,
                4 => handlers::handle_remove(&mut self.service, &self.formatter)?,
                5 => handlers::handle_assign_owner(&mut self.service, &self.formatter)?,
                6 => handlers::handle_list(&self.service, &self.formatter, false)?,
                7 => handlers::handle_list(&self.service, &self.formatter, true)?,
                8 => handlers::handle_stats(&self.service, &self.formatter)?,
                9 => handlers::handle_peek(&self.service, &self.formatter)?,
                _ => {
                    self.formatter.info("Goodbye!");
                    break;
                },
            }
            println!();
        }
        Ok(())
    }
}
