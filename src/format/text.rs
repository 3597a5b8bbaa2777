//! Text formatting functions for `helpdesk`.
//!
//! Provides plain text (non-ANSI) formatting for terminal output:
//! - Status icons (○ ◐ ✓ ✗) and badge slugs
//! - Description previews
//! - Ticket cards, detail views and comment threads

use chrono::{DateTime, Local, TimeZone, Utc};
use helpdesk_lib::{Comment, Status, StatusCounts, Ticket};

/// Status icon characters.
pub mod icons {
    /// Open ticket - waiting for the operator (hollow circle).
    pub const OPEN: &str = "○";
    /// In progress - being worked on (half-filled).
    pub const IN_PROGRESS: &str = "◐";
    /// Resolved - fix delivered (checkmark).
    pub const RESOLVED: &str = "✓";
    /// Closed - nothing further to do (X mark).
    pub const CLOSED: &str = "✗";
}

/// Marker appended to truncated previews.
pub const ELLIPSIS: &str = "...";

/// Return the icon character for a status.
#[must_use]
pub const fn format_status_icon(status: &Status) -> &'static str {
    match status {
        Status::Open => icons::OPEN,
        Status::InProgress => icons::IN_PROGRESS,
        Status::Resolved => icons::RESOLVED,
        Status::Closed => icons::CLOSED,
    }
}

/// Lowercase, dash-joined status name ("in-progress").
#[must_use]
pub fn status_slug(status: &Status) -> String {
    status.as_str().to_lowercase().replace(' ', "-")
}

/// Cut `text` to at most `max_chars` characters, adding `...` if anything
/// was dropped.
#[must_use]
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}{ELLIPSIS}", &text[..cut]),
        None => text.to_string(),
    }
}

/// Render a timestamp as "Jan 5, 2026, 02:07 PM" in the given zone.
#[must_use]
pub fn format_date_in<Tz>(date: &DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    date.with_timezone(tz)
        .format("%b %-d, %Y, %I:%M %p")
        .to_string()
}

/// Render a timestamp in the machine's local zone.
#[must_use]
pub fn format_date(date: &DateTime<Utc>) -> String {
    format_date_in(date, &Local)
}

/// Format a list card for one ticket.
///
/// ```text
/// ○ TKT-100001 [open] Open
///   User: Sarah Johnson | Department: Finance | Issue Type: Software | Priority: High
///   Unable to access QuickBooks...
///   Created: Jan 5, 2026, 02:07 PM
/// ```
#[must_use]
pub fn format_ticket_card(ticket: &Ticket, preview_width: usize) -> String {
    format!(
        "{} {} [{}] {}\n  User: {} | Department: {} | Issue Type: {} | Priority: {}\n  {}\n  Created: {}",
        format_status_icon(&ticket.status),
        ticket.id,
        status_slug(&ticket.status),
        ticket.status,
        ticket.user_name,
        ticket.department,
        ticket.issue_type,
        ticket.priority,
        truncate_text(&ticket.description, preview_width),
        format_date(&ticket.created_date),
    )
}

/// Format the full detail view, comments included.
#[must_use]
pub fn format_ticket_details(ticket: &Ticket) -> String {
    let rows = [
        ("Ticket ID", ticket.id.clone()),
        (
            "Status",
            format!("{} {}", format_status_icon(&ticket.status), ticket.status),
        ),
        ("User Name", ticket.user_name.clone()),
        ("Email", ticket.user_email.clone()),
        ("Department", ticket.department.clone()),
        ("Issue Type", ticket.issue_type.clone()),
        ("Priority", ticket.priority.to_string()),
        ("Created", format_date(&ticket.created_date)),
        ("Last Updated", format_date(&ticket.updated_date)),
    ];

    let mut out = String::new();
    for (label, value) in rows {
        out.push_str(&format!("{:<13} {value}\n", format!("{label}:")));
    }
    out.push_str("\nDescription:\n");
    out.push_str(&ticket.description);
    out.push_str("\n\nComments:\n");
    out.push_str(&format_comments(&ticket.comments));
    out
}

/// Format a comment thread, oldest first.
#[must_use]
pub fn format_comments(comments: &[Comment]) -> String {
    if comments.is_empty() {
        return "  No comments yet".to_string();
    }
    comments
        .iter()
        .map(|c| format!("  {} - {}\n    {}", c.author, format_date(&c.date), c.text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format the four summary counters on one line.
#[must_use]
pub fn format_counts(counts: &StatusCounts) -> String {
    format!(
        "Open: {}  In Progress: {}  Resolved: {}  Total: {}",
        counts.open, counts.in_progress, counts.resolved_or_closed, counts.total
    )
}
