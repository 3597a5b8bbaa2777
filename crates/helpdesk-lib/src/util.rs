//! ID generation and timestamp helpers.

use chrono::{DateTime, Duration, Utc};
use rand::Rng;

use crate::error::{Result, TicketError};

/// Prefix shared by every ticket ID.
pub const ID_PREFIX: &str = "TKT";

/// Number of distinct random suffixes (two decimal digits).
const SUFFIX_SPACE: u8 = 100;

// ============================================================================
// ID Generation
// ============================================================================

/// Format a ticket ID from its two components.
///
/// Layout: `TKT-` + last six digits of the epoch-millisecond timestamp +
/// two-digit zero-padded suffix.
#[must_use]
pub fn format_id(timestamp_millis: i64, suffix: u8) -> String {
    format!(
        "{ID_PREFIX}-{:06}{:02}",
        timestamp_millis.rem_euclid(1_000_000),
        suffix % SUFFIX_SPACE
    )
}

/// Generate a ticket ID for `now`.
///
/// Starts at a random suffix and walks the remaining suffixes for the same
/// millisecond slot until `exists` reports a free one.
///
/// # Errors
///
/// Returns `IdCollision` when all 100 suffixes for this slot are taken.
pub fn generate_id<F>(now: DateTime<Utc>, exists: F) -> Result<String>
where
    F: Fn(&str) -> bool,
{
    let start = rand::rng().random_range(0..SUFFIX_SPACE);
    probe_id(now.timestamp_millis(), start, exists)
}

fn probe_id<F>(timestamp_millis: i64, start: u8, exists: F) -> Result<String>
where
    F: Fn(&str) -> bool,
{
    for offset in 0..SUFFIX_SPACE {
        let candidate = format_id(timestamp_millis, (start + offset) % SUFFIX_SPACE);
        if !exists(&candidate) {
            return Ok(candidate);
        }
        tracing::debug!(candidate = %candidate, "ticket id taken, probing next suffix");
    }
    Err(TicketError::IdCollision {
        id: format_id(timestamp_millis, start),
    })
}

// ============================================================================
// Timestamps
// ============================================================================

/// Timestamp for a mutation that follows `previous`.
///
/// Always strictly after `previous`, even when the wall clock has not moved
/// or has stepped backwards.
#[must_use]
pub fn next_timestamp(previous: DateTime<Utc>) -> DateTime<Utc> {
    let now = Utc::now();
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}
