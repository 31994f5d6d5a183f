//! Process-next and peek handlers

use crate::cli::OutputFormatter;
use crate::error::Result;
use crate::service::TicketService;

/// Take the most urgent ticket off the queue and display it
pub fn handle_process_next(
    service: &mut TicketService,
    formatter: &OutputFormatter,
) -> Result<()> {
    match service.process_next() {
        Some(ticket) => {
            formatter.success(&format!("Processing ticket #{}", ticket.id));
            formatter.info(&ticket.to_string());
        },
        None => formatter.info("No tickets currently in the queue"),
    }
    Ok(())
}

/// Show the most urgent ticket without removing it
pub fn handle_peek(service: &TicketService, formatter: &OutputFormatter) -> Result<()> {
    match service.peek_next() {
        Some(ticket) => {
            formatter.info("Next ticket to be processed:");
            formatter.info(&ticket.summary());
        },
        None => formatter.info("No tickets currently in the queue"),
    }
    Ok(())
}
