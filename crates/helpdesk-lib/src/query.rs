//! Input and result types for store operations.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TicketError;
use crate::model::{Priority, Status, Ticket};

/// Fields supplied when opening a ticket.
///
/// The store accepts these as given; blank values are the presentation
/// layer's problem.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTicket {
    pub user_name: String,
    pub user_email: String,
    pub department: String,
    pub issue_type: String,
    pub priority: Priority,
    pub description: String,
}

/// Status view selector. `"all"` is the sentinel for no filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(Status),
}

impl StatusFilter {
    #[must_use]
    pub fn matches(&self, ticket: &Ticket) -> bool {
        match self {
            Self::All => true,
            Self::Only(status) => ticket.status == *status,
        }
    }
}

impl From<Status> for StatusFilter {
    fn from(status: Status) -> Self {
        Self::Only(status)
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("all"),
            Self::Only(status) => write!(f, "{status}"),
        }
    }
}

impl FromStr for StatusFilter {
    type Err = TicketError;

    /// Exact match only: `"all"` or a status display name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Self::All);
        }
        Status::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .map(Self::Only)
            .ok_or_else(|| TicketError::InvalidStatus {
                status: s.to_string(),
            })
    }
}

/// Summary counters shown above the ticket list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusCounts {
    pub open: usize,
    pub in_progress: usize,
    pub resolved_or_closed: usize,
    pub total: usize,
}

impl StatusCounts {
    /// Tally a sequence of tickets from scratch.
    #[must_use]
    pub fn tally<'a>(tickets: impl IntoIterator<Item = &'a Ticket>) -> Self {
        let mut counts = Self::default();
        for ticket in tickets {
            match ticket.status {
                Status::Open => counts.open += 1,
                Status::InProgress => counts.in_progress += 1,
                Status::Resolved | Status::Closed => counts.resolved_or_closed += 1,
            }
            counts.total += 1;
        }
        counts
    }
}
