//! Scripted demo walkthrough
//!
//! Runs the full ticket lifecycle without any interactive input: file a
//! handful of tickets, peek, re-prioritize, assign, remove, then drain the
//! queue in priority order. Used both as a quick showcase and as the
//! deterministic surface the integration tests drive.

use crate::cli::OutputFormatter;
use crate::config::HelpdeskConfig;
use crate::error::Result;
use crate::service::TicketService;

/// Run the scripted walkthrough
pub fn handle_demo(config: &HelpdeskConfig, formatter: &OutputFormatter) -> Result<()> {
    let mut service = TicketService::with_settings(
        Some(config.queue.initial_capacity),
        Some(config.ids.start),
    );

    formatter.info("=== Helpdesk demo: a day at the triage desk ===\n");

    let requests: [(&str, u8, &str); 5] = [
        ("r.alvarez", 3, "Install statistics package on lab machines"),
        ("t.nakamura", 1, "Suspicious login alerts from two accounts"),
        ("s.bakker", 4, "Laptop setup for new starter on Monday"),
        ("h.ibrahim", 1, "Phishing campaign hitting the finance team"),
        ("e.kowalski", 2, "No wifi coverage in the annex building"),
    ];

    let mut ids = Vec::with_capacity(requests.len());
    for (creator, code, description) in requests {
        let id = service.create_ticket(creator, code, description)?;
        formatter.success(&format!("Ticket created with ID {id}"));
        ids.push(id);
    }

    if let Some(next) = service.peek_next() {
        formatter.info(&format!("\nNext up: {}", next.summary()));
    }

    // The new-starter laptop turns out to be for the incident response
    // contractor, so it jumps the queue.
    if service.update_priority(ids[2], 1)? {
        formatter.info(&format!("\nTicket #{} escalated to priority 1", ids[2]));
    }

    if service.assign_owner(ids[4], "it.oncall") {
        formatter.info(&format!("Ticket #{} assigned to it.oncall", ids[4]));
    }

    // The two phishing reports are the same incident; drop the duplicate.
    if let Some(removed) = service.remove_ticket(ids[3]) {
        formatter.info(&format!("Duplicate ticket #{} removed\n", removed.id));
    }

    if formatter.is_json() {
        formatter.json(&service.sorted_tickets())?;
    } else {
        for ticket in service.sorted_tickets() {
            formatter.info(&ticket.summary());
        }
    }

    formatter.info("\nDraining the queue in priority order:");
    let mut drained = Vec::new();
    while let Some(ticket) = service.process_next() {
        formatter.info(&format!(
            "Processing ticket #{} (priority {})",
            ticket.id,
            ticket.priority.level()
        ));
        drained.push(ticket.priority.level().to_string());
    }
    formatter.info(&format!("Drain order: {}", drained.join(", ")));

    let stats = service.stats();
    if formatter.is_json() {
        formatter.json(&stats)?;
    } else {
        formatter.info(&format!(
            "\nSession: {} created, {} processed, {} still queued",
            stats.created, stats.processed, stats.queued
        ));
    }
    formatter.success("Demo complete");
    Ok(())
}
