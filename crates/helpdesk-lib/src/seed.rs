//! Example tickets shown on first launch, before any snapshot exists.

use chrono::{DateTime, Duration, Utc};

use crate::model::{Comment, Priority, Status, Ticket};

/// Build the three sample tickets relative to `now`.
///
/// Newest first, covering the Open, In Progress and Resolved states.
#[must_use]
pub fn sample_tickets(now: DateTime<Utc>) -> Vec<Ticket> {
    let hours_ago = |h: i64| now - Duration::hours(h);

    vec![
        Ticket {
            id: "TKT-100001".to_string(),
            user_name: "Sarah Johnson".to_string(),
            user_email: "sarah.j@company.com".to_string(),
            department: "Finance".to_string(),
            issue_type: "Software".to_string(),
            priority: Priority::High,
            description: "Unable to access QuickBooks. Error message: \"Connection timeout\". \
                          Urgent - need to process payroll today."
                .to_string(),
            status: Status::Open,
            created_date: hours_ago(2),
            updated_date: hours_ago(2),
            comments: Vec::new(),
        },
        Ticket {
            id: "TKT-100002".to_string(),
            user_name: "Michael Chen".to_string(),
            user_email: "michael.c@company.com".to_string(),
            department: "Sales".to_string(),
            issue_type: "Hardware".to_string(),
            priority: Priority::Critical,
            description: "Laptop won't turn on. Tried holding power button but no response. \
                          Have important client presentation in 2 hours."
                .to_string(),
            status: Status::InProgress,
            created_date: hours_ago(5),
            updated_date: hours_ago(1),
            comments: vec![Comment::by_operator(
                "Received your ticket. Checking power adapter and battery.",
                hours_ago(4),
            )],
        },
        Ticket {
            id: "TKT-100003".to_string(),
            user_name: "Emily Rodriguez".to_string(),
            user_email: "emily.r@company.com".to_string(),
            department: "HR".to_string(),
            issue_type: "Password".to_string(),
            priority: Priority::Medium,
            description: "Need password reset for HR management system. \
                          Account locked after multiple failed login attempts."
                .to_string(),
            status: Status::Resolved,
            created_date: hours_ago(24),
            updated_date: hours_ago(23),
            comments: vec![Comment::by_operator(
                "Password has been reset. Temporary password sent to your email.",
                hours_ago(23),
            )],
        },
    ]
}
