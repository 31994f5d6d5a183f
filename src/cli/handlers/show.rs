//! Search and list handlers

use crate::cli::OutputFormatter;
use crate::core::TicketId;
use crate::error::Result;
use crate::service::TicketService;
use dialoguer::{Input, theme::ColorfulTheme};

/// Prompt for an ID and display the matching ticket
pub fn handle_search(service: &TicketService, formatter: &OutputFormatter) -> Result<()> {
    let theme = ColorfulTheme::default();
    let id: u32 = Input::with_theme(&theme)
        .with_prompt("Ticket ID")
        .interact_text()?;

    match service.search(TicketId::new(id)) {
        Some(ticket) => {
            formatter.success("Ticket found");
            formatter.info(&ticket.to_string());
        },
        None => formatter.warn(&format!("Ticket #{id} not found")),
    }
    Ok(())
}

/// Display all tickets sorted by priority.
///
/// `detailed` switches from one-line summaries to the full ticket cards.
pub fn handle_list(
    service: &TicketService,
    formatter: &OutputFormatter,
    detailed: bool,
) -> Result<()> {
    if service.ticket_count() == 0 {
        formatter.info("No tickets in the system");
        return Ok(());
    }

    let sorted = service.sorted_tickets();
    if formatter.is_json() {
        return formatter.json(&sorted);
    }

    formatter.info("=== All Tickets (sorted by priority) ===");
    formatter.info(&format!("Total tickets: {}", sorted.len()));
    for ticket in sorted {
        if detailed {
            formatter.info(&format!("{ticket}\n"));
        } else {
            formatter.info(&ticket.summary());
        }
    }
    Ok(())
}
