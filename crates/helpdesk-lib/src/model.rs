//! Core data types for helpdesk-lib.
//!
//! Field names serialize in camelCase so a snapshot reads the same as the
//! blob the browser version kept in local storage.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::TicketError;

/// Ticket lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Status {
    #[default]
    Open,
    #[serde(rename = "In Progress")]
    InProgress,
    Resolved,
    Closed,
}

impl Status {
    /// Every status, in lifecycle order.
    pub const ALL: [Self; 4] = [Self::Open, Self::InProgress, Self::Resolved, Self::Closed];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
            Self::Closed => "Closed",
        }
    }

    /// Resolved and Closed share one counter bucket.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Resolved | Self::Closed)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = TicketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "open" => Ok(Self::Open),
            "in progress" | "in-progress" | "in_progress" | "inprogress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            "closed" => Ok(Self::Closed),
            _ => Err(TicketError::InvalidStatus {
                status: s.to_string(),
            }),
        }
    }
}

/// Ticket urgency as chosen on the intake form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Priority {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = TicketError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            _ => Err(TicketError::InvalidPriority {
                priority: s.to_string(),
            }),
        }
    }
}

/// A single reported issue.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Unique ID (e.g., "TKT-48213907").
    pub id: String,

    /// Name of the person reporting the issue.
    pub user_name: String,

    /// Contact address of the reporter.
    pub user_email: String,

    pub department: String,

    /// Category chosen on the form (Hardware, Software, ...).
    pub issue_type: String,

    pub priority: Priority,

    pub description: String,

    /// Workflow status.
    pub status: Status,

    /// Creation timestamp. Never changes.
    pub created_date: DateTime<Utc>,

    /// Last mutation timestamp.
    pub updated_date: DateTime<Utc>,

    /// Operator notes, oldest first.
    #[serde(default)]
    pub comments: Vec<Comment>,
}

/// An operator annotation on a ticket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub text: String,
    pub date: DateTime<Utc>,
    pub author: String,
}

impl Comment {
    /// Author recorded on every comment; there is one operator role.
    pub const OPERATOR: &'static str = "IT Support";

    #[must_use]
    pub fn by_operator(text: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            text: text.into(),
            date,
            author: Self::OPERATOR.to_string(),
        }
    }
}
