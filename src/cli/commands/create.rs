use helpdesk_lib::{NewTicket, Persistence, Result, TicketError, TicketStore};

use crate::cli::CreateArgs;
use crate::format::OutputContext;
use crate::validation::TicketFormValidator;

/// Execute the create command.
///
/// # Errors
///
/// Returns an error if a form field is missing or malformed, or the ticket
/// cannot be saved.
pub fn execute<P: Persistence>(
    args: CreateArgs,
    store: &mut TicketStore<P>,
    ctx: &OutputContext,
) -> Result<()> {
    // 1. Build the form
    let form = NewTicket {
        user_name: args.user_name,
        user_email: args.user_email,
        department: args.department,
        issue_type: args.issue_type,
        priority: args.priority,
        description: args.description,
    };

    // 2. Required fields, as the intake form enforces them
    TicketFormValidator::validate(&form).map_err(TicketError::from_validation_errors)?;

    // 3. Create
    let ticket = store.create_ticket(&form)?;

    // 4. Output
    if ctx.is_json() {
        ctx.json(&ticket)?;
    }
    ctx.notify(&format!("Ticket {} created successfully!", ticket.id));

    Ok(())
}
