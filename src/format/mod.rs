//! Output formatting for `helpdesk`.
//!
//! Supports both human-readable text output and machine-parseable JSON.
//! Dates and description previews are only shaped here; the store keeps
//! raw timestamps and full text.

mod output;
mod text;

pub use output::{CommentAdded, Deleted, OutputContext, TicketWithCounts};
pub use text::{
    ELLIPSIS, format_comments, format_counts, format_date, format_date_in, format_status_icon,
    format_ticket_card, format_ticket_details, status_slug, truncate_text,
};
