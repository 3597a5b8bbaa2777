//! Show command implementation.

use helpdesk_lib::{Persistence, Result, TicketStore};

use crate::cli::ShowArgs;
use crate::format::{OutputContext, format_ticket_details};

/// Execute the show command.
///
/// # Errors
///
/// Returns `TicketNotFound` if the ID is absent.
pub fn execute<P: Persistence>(
    args: &ShowArgs,
    store: &TicketStore<P>,
    ctx: &OutputContext,
) -> Result<()> {
    let ticket = store.get_ticket(&args.id)?;

    if ctx.is_json() {
        ctx.json(ticket)
    } else {
        println!("{}", format_ticket_details(ticket));
        Ok(())
    }
}
