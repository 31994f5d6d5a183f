//! Command handlers
//!
//! One handler per menu action. Handlers prompt for their own input, call
//! into the service, and report through the [`OutputFormatter`]. Validation
//! failures are reported and the session keeps running; "not found" is a
//! normal outcome, never an error.

mod assign;
mod demo;
mod edit;
mod new;
mod process;
mod remove;
mod show;
mod stats;

pub use assign::handle_assign_owner;
pub use demo::handle_demo;
pub use edit::handle_update_priority;
pub use new::handle_new_ticket;
pub use process::{handle_peek, handle_process_next};
pub use remove::{handle_clear, handle_remove};
pub use show::{handle_list, handle_search};
pub use stats::handle_stats;

use crate::cli::OutputFormatter;
use crate::error::Result;

/// Report a recoverable error and keep the session alive; bubble up
/// anything else.
pub(crate) fn report_or_raise(
    result: Result<()>,
    formatter: &OutputFormatter,
) -> Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(e) if e.is_recoverable() => {
            formatter.error(&e.user_message());
            for suggestion in e.suggestions() {
                formatter.info(&format!("  • {suggestion}"));
            }
            Ok(())
        },
        Err(e) => Err(e),
    }
}
