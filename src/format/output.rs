use helpdesk_lib::{Comment, Result, Ticket};
use serde::{Deserialize, Serialize};

/// How command results are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputContext {
    json: bool,
    quiet: bool,
    preview_width: usize,
}

impl OutputContext {
    #[must_use]
    pub const fn new(json: bool, quiet: bool, preview_width: usize) -> Self {
        Self {
            json,
            quiet,
            preview_width,
        }
    }

    #[must_use]
    pub const fn is_json(&self) -> bool {
        self.json
    }

    #[must_use]
    pub const fn preview_width(&self) -> usize {
        self.preview_width
    }

    /// Print `value` as pretty JSON on stdout.
    ///
    /// # Errors
    ///
    /// Returns `Json` if serialization fails.
    #[allow(clippy::unused_self)]
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    /// Print a success notification unless quiet or in JSON mode.
    pub fn notify(&self, message: &str) {
        if !self.quiet && !self.json {
            println!("{message}");
        }
    }
}

/// Ticket with its comment count, for list/search views.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketWithCounts {
    #[serde(flatten)]
    pub ticket: Ticket,
    pub comment_count: usize,
}

impl From<&Ticket> for TicketWithCounts {
    fn from(ticket: &Ticket) -> Self {
        Self {
            ticket: ticket.clone(),
            comment_count: ticket.comments.len(),
        }
    }
}

/// Result of a comment being added.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentAdded {
    pub ticket_id: String,
    #[serde(flatten)]
    pub comment: Comment,
}

/// Result of a deletion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deleted {
    pub deleted: String,
}
