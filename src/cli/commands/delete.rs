use dialoguer::Confirm;
use helpdesk_lib::{Persistence, Result, TicketStore};

use crate::cli::DeleteArgs;
use crate::format::{Deleted, OutputContext};

/// Execute the delete command.
///
/// Asks for confirmation unless `--yes` is given. The ticket must exist
/// before the prompt is shown.
///
/// # Errors
///
/// Returns `TicketNotFound` if the ID is absent, `Io` if the prompt cannot
/// be shown, or an error if the snapshot cannot be saved.
pub fn execute<P: Persistence>(
    args: &DeleteArgs,
    store: &mut TicketStore<P>,
    ctx: &OutputContext,
) -> Result<()> {
    store.get_ticket(&args.id)?;

    if !args.yes {
        let confirmed = Confirm::new()
            .with_prompt("Are you sure you want to delete this ticket?")
            .default(false)
            .interact()
            .map_err(std::io::Error::other)?;
        if !confirmed {
            ctx.notify("Deletion cancelled");
            return Ok(());
        }
    }

    let removed = store.delete_ticket(&args.id)?;

    if ctx.is_json() {
        ctx.json(&Deleted {
            deleted: removed.id,
        })?;
    }
    ctx.notify("Ticket deleted successfully");

    Ok(())
}
