use helpdesk_lib::{Persistence, Result, TicketStore};

use super::list::{print_cards, print_json};
use crate::cli::SearchArgs;
use crate::format::OutputContext;

/// Execute the search command.
///
/// Searches the whole collection; no status filter is applied.
///
/// # Errors
///
/// Returns an error if JSON output fails.
pub fn execute<P: Persistence>(
    args: &SearchArgs,
    store: &TicketStore<P>,
    ctx: &OutputContext,
) -> Result<()> {
    let tickets = store.search(&args.query);
    tracing::debug!(query = %args.query, count = tickets.len(), "search finished");

    if ctx.is_json() {
        return print_json(&tickets, ctx);
    }

    print_cards(&tickets, ctx, "No tickets found matching your search");
    Ok(())
}
