//! Owner assignment handler

use crate::cli::OutputFormatter;
use crate::error::Result;
use crate::service::TicketService;
use dialoguer::{Input, Select, theme::ColorfulTheme};

/// Pick a queued ticket and assign a technician to it
pub fn handle_assign_owner(
    service: &mut TicketService,
    formatter: &OutputFormatter,
) -> Result<()> {
    if service.ticket_count() == 0 {
        formatter.info("No tickets in the system");
        return Ok(());
    }

    let theme = ColorfulTheme::default();
    let choices: Vec<(crate::core::TicketId, String)> = service
        .sorted_tickets()
        .iter()
        .map(|t| (t.id, t.summary()))
        .collect();
    let items: Vec<&str> = choices.iter().map(|(_, summary)| summary.as_str()).collect();

    let selection = Select::with_theme(&theme)
        .with_prompt("Select a ticket")
        .items(&items)
        .interact()?;
    let id = choices[selection].0;

    let owner: String = Input::with_theme(&theme)
        .with_prompt("Technician name")
        .interact_text()?;

    if service.assign_owner(id, &owner) {
        formatter.success(&format!("Ticket #{id} assigned to {owner}"));
    } else {
        formatter.warn(&format!("Ticket #{id} not found"));
    }
    Ok(())
}
