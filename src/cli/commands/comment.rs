use helpdesk_lib::{Persistence, Result, TicketError, TicketStore};

use crate::cli::CommentArgs;
use crate::format::{CommentAdded, OutputContext};

/// Shown when the comment text is blank.
pub const EMPTY_COMMENT_PROMPT: &str = "Please enter a comment";

/// Execute the comment command.
///
/// # Errors
///
/// Returns a `comment` validation error for blank text, `TicketNotFound` if
/// the ID is absent, or an error if the snapshot cannot be saved.
pub fn execute<P: Persistence>(
    args: &CommentArgs,
    store: &mut TicketStore<P>,
    ctx: &OutputContext,
) -> Result<()> {
    let text = args.text.join(" ");
    let comment = store.add_comment(&args.id, &text).map_err(|e| {
        if e.is_rejected() {
            TicketError::validation("comment", EMPTY_COMMENT_PROMPT)
        } else {
            e
        }
    })?;

    if ctx.is_json() {
        ctx.json(&CommentAdded {
            ticket_id: args.id.clone(),
            comment,
        })?;
    }
    ctx.notify("Comment added successfully");

    Ok(())
}
