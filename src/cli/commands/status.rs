use helpdesk_lib::{Persistence, Result, TicketStore};

use crate::cli::StatusArgs;
use crate::format::OutputContext;

/// Execute the status command.
///
/// # Errors
///
/// Returns `TicketNotFound` if the ID is absent, or an error if the snapshot
/// cannot be saved.
pub fn execute<P: Persistence>(
    args: &StatusArgs,
    store: &mut TicketStore<P>,
    ctx: &OutputContext,
) -> Result<()> {
    let ticket = store.update_status(&args.id, args.status)?;

    if ctx.is_json() {
        ctx.json(&ticket)?;
    }
    ctx.notify(&format!(
        "Ticket {} status updated to {}",
        ticket.id, ticket.status
    ));

    Ok(())
}
