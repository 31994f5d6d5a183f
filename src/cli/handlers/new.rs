//! Create-ticket handler

use crate::cli::OutputFormatter;
use crate::error::Result;
use crate::service::{RequestType, TicketService};
use dialoguer::{Input, Select, theme::ColorfulTheme};

/// Prompt for a new ticket and file it
pub fn handle_new_ticket(
    service: &mut TicketService,
    formatter: &OutputFormatter,
) -> Result<()> {
    let theme = ColorfulTheme::default();

    let creator: String = Input::with_theme(&theme)
        .with_prompt("Your name")
        .interact_text()?;

    let items: Vec<String> = RequestType::ALL
        .iter()
        .map(|r| format!("{} - {}", r.code(), r.label()))
        .collect();
    let selection = Select::with_theme(&theme)
        .with_prompt("Request type")
        .items(&items)
        .default(0)
        .interact()?;
    let code = RequestType::ALL[selection].code();

    let description: String = Input::with_theme(&theme)
        .with_prompt("Describe the issue")
        .interact_text()?;

    super::report_or_raise(
        file_ticket(service, formatter, &creator, code, &description),
        formatter,
    )
}

fn file_ticket(
    service: &mut TicketService,
    formatter: &OutputFormatter,
    creator: &str,
    code: u8,
    description: &str,
) -> Result<()> {
    let id = service.create_ticket(creator, code, description)?;
    formatter.success(&format!("Ticket created with ID {id}"));
    if let Some(ticket) = service.search(id) {
        formatter.info(&ticket.summary());
    }
    Ok(())
}
