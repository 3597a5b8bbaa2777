use helpdesk_lib::{Persistence, Result, TicketStore};

use crate::format::{OutputContext, format_counts};

/// Execute the stats command.
///
/// # Errors
///
/// Returns an error if JSON output fails.
pub fn execute<P: Persistence>(store: &TicketStore<P>, ctx: &OutputContext) -> Result<()> {
    let counts = store.aggregate_counts();
    if ctx.is_json() {
        ctx.json(&counts)
    } else {
        println!("{}", format_counts(&counts));
        Ok(())
    }
}
