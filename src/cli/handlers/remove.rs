//! Remove and clear handlers

use crate::cli::OutputFormatter;
use crate::core::TicketId;
use crate::error::Result;
use crate::service::TicketService;
use dialoguer::{Confirm, Input, theme::ColorfulTheme};

/// Prompt for an ID and remove that ticket from the queue
pub fn handle_remove(
    service: &mut TicketService,
    formatter: &OutputFormatter,
) -> Result<()> {
    let theme = ColorfulTheme::default();
    let id: u32 = Input::with_theme(&theme)
        .with_prompt("Ticket ID")
        .interact_text()?;

    if !Confirm::with_theme(&theme)
        .with_prompt(format!("Remove ticket #{id}?"))
        .default(false)
        .interact()?
    {
        formatter.info("Removal cancelled");
        return Ok(());
    }

    match service.remove_ticket(TicketId::new(id)) {
        Some(removed) => {
            formatter.success(&format!("Ticket #{id} removed"));
            formatter.info(&removed.summary());
        },
        None => formatter.warn(&format!("Ticket #{id} not found")),
    }
    Ok(())
}

/// Confirm and drop every queued ticket
pub fn handle_clear(
    service: &mut TicketService,
    formatter: &OutputFormatter,
) -> Result<()> {
    let count = service.ticket_count();
    if count == 0 {
        formatter.info("No tickets in the system");
        return Ok(());
    }

    let theme = ColorfulTheme::default();
    if Confirm::with_theme(&theme)
        .with_prompt(format!(
            "Clear all {count} tickets? This cannot be undone"
        ))
        .default(false)
        .interact()?
    {
        service.clear_all();
        formatter.success("All tickets cleared from the system");
    } else {
        formatter.info("Clear cancelled");
    }
    Ok(())
}
