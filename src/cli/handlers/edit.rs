//! Priority update handler

use crate::cli::OutputFormatter;
use crate::core::{Priority, TicketId};
use crate::error::Result;
use crate::service::TicketService;
use dialoguer::{Input, Select, theme::ColorfulTheme};

/// Prompt for a ticket ID and a new priority level, then re-prioritize
pub fn handle_update_priority(
    service: &mut TicketService,
    formatter: &OutputFormatter,
) -> Result<()> {
    let theme = ColorfulTheme::default();
    let id: u32 = Input::with_theme(&theme)
        .with_prompt("Ticket ID")
        .interact_text()?;

    let levels: Vec<String> = (1..=4)
        .map(|level| Priority::from_level(level).map(|p| p.to_string()))
        .collect::<Result<_>>()?;
    let selection = Select::with_theme(&theme)
        .with_prompt("New priority")
        .items(&levels)
        .default(0)
        .interact()?;
    let level = (selection + 1) as u8;

    super::report_or_raise(
        update(service, formatter, TicketId::new(id), level),
        formatter,
    )
}

fn update(
    service: &mut TicketService,
    formatter: &OutputFormatter,
    id: TicketId,
    level: u8,
) -> Result<()> {
    if service.update_priority(id, level)? {
        formatter.success(&format!("Priority of ticket #{id} set to {level}"));
    } else {
        formatter.warn(&format!("Ticket #{id} not found"));
    }
    Ok(())
}
