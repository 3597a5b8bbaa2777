//! List command implementation.
//!
//! Shows every ticket, or one status bucket, newest first.

use helpdesk_lib::{Persistence, Result, Ticket, TicketStore};

use crate::cli::ListArgs;
use crate::format::{OutputContext, TicketWithCounts, format_counts, format_ticket_card};

/// Execute the list command.
///
/// # Errors
///
/// Returns an error if JSON output fails.
pub fn execute<P: Persistence>(
    args: &ListArgs,
    store: &TicketStore<P>,
    ctx: &OutputContext,
) -> Result<()> {
    let tickets = store.filter_by_status(args.status);
    tracing::debug!(filter = %args.status, count = tickets.len(), "listing tickets");

    if ctx.is_json() {
        return print_json(&tickets, ctx);
    }

    println!("{}\n", format_counts(&store.aggregate_counts()));
    print_cards(&tickets, ctx, "No tickets found");
    Ok(())
}

pub(crate) fn print_json(tickets: &[&Ticket], ctx: &OutputContext) -> Result<()> {
    let items: Vec<TicketWithCounts> = tickets.iter().copied().map(TicketWithCounts::from).collect();
    ctx.json(&items)
}

pub(crate) fn print_cards(tickets: &[&Ticket], ctx: &OutputContext, empty_message: &str) {
    if tickets.is_empty() {
        println!("{empty_message}");
        return;
    }
    for ticket in tickets {
        println!("{}\n", format_ticket_card(ticket, ctx.preview_width()));
    }
    println!("{} ticket(s)", tickets.len());
}
