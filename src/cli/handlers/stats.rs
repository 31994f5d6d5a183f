//! Statistics handler

use crate::cli::OutputFormatter;
use crate::core::Priority;
use crate::error::Result;
use crate::service::TicketService;

/// Display session statistics
pub fn handle_stats(service: &TicketService, formatter: &OutputFormatter) -> Result<()> {
    let stats = service.stats();
    if formatter.is_json() {
        return formatter.json(&stats);
    }

    formatter.info("=== System Statistics ===");
    formatter.info(&format!("Total tickets created: {}", stats.created));
    formatter.info(&format!("Total tickets processed: {}", stats.processed));
    formatter.info(&format!("Current tickets in queue: {}", stats.queued));

    formatter.info("\nTickets by priority:");
    for (index, count) in stats.by_priority.iter().enumerate() {
        // by_priority holds levels 1..=4 at indices 0..=3
        let priority = Priority::from_level(index as u8 + 1)?;
        formatter.info(&format!("  {priority}: {count}"));
    }
    Ok(())
}
