//! Snapshot persistence for the ticket collection.
//!
//! The whole collection is written as one JSON array. There is no schema
//! version: a change to the record shape breaks existing snapshots.

use std::fs;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use tempfile::NamedTempFile;

use crate::error::{Result, TicketError};
use crate::model::Ticket;
use crate::seed;

/// Load/save contract the store relies on.
pub trait Persistence {
    /// Read the stored snapshot, or `None` if nothing was ever saved.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot exists but cannot be read or decoded.
    fn read(&self) -> Result<Option<Vec<Ticket>>>;

    /// Replace the stored snapshot with `tickets`.
    ///
    /// # Errors
    ///
    /// Returns an error if the snapshot cannot be written.
    fn write(&mut self, tickets: &[Ticket]) -> Result<()>;

    /// Read the stored snapshot, falling back to the sample tickets.
    ///
    /// # Errors
    ///
    /// Propagates any error from [`Persistence::read`].
    fn load(&self) -> Result<Vec<Ticket>> {
        match self.read()? {
            Some(tickets) => Ok(tickets),
            None => {
                tracing::info!("no snapshot found, seeding sample tickets");
                Ok(seed::sample_tickets(Utc::now()))
            }
        }
    }
}

fn decode(blob: &str, source: &str) -> Result<Option<Vec<Ticket>>> {
    if blob.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(blob)
        .map(Some)
        .map_err(|e| TicketError::SnapshotParse {
            path: source.to_string(),
            reason: e.to_string(),
        })
}

// ============================================================================
// File snapshot
// ============================================================================

/// Snapshot kept in a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileSnapshot {
    path: PathBuf,
}

impl JsonFileSnapshot {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Persistence for JsonFileSnapshot {
    fn read(&self) -> Result<Option<Vec<Ticket>>> {
        let blob = match fs::read_to_string(&self.path) {
            Ok(blob) => blob,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(TicketError::Io(e)),
        };
        let tickets = decode(&blob, &self.path.display().to_string())?;
        if let Some(ref loaded) = tickets {
            tracing::debug!(path = %self.path.display(), count = loaded.len(), "snapshot loaded");
        }
        Ok(tickets)
    }

    /// Writes to a temp file in the same directory, then renames it over
    /// the target. The temp file is removed if any step fails.
    fn write(&mut self, tickets: &[Ticket]) -> Result<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let tmp = NamedTempFile::new_in(dir)?;
        let mut writer = BufWriter::new(tmp);
        serde_json::to_writer_pretty(&mut writer, tickets)?;
        writer.write_all(b"\n")?;
        let tmp = writer.into_inner().map_err(|e| TicketError::Io(e.into_error()))?;

        tmp.persist(&self.path).map_err(|e| TicketError::Io(e.error))?;
        tracing::debug!(path = %self.path.display(), count = tickets.len(), "snapshot saved");

        Ok(())
    }
}

// ============================================================================
// In-memory snapshot
// ============================================================================

/// Snapshot held as serialized JSON text in memory.
///
/// Behaves like a key-value slot: the store never shares its tickets with
/// it, only the encoded blob.
#[derive(Debug, Clone, Default)]
pub struct MemorySnapshot {
    blob: Option<String>,
    fail_writes: bool,
    writes: usize,
}

impl MemorySnapshot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing encoded blob.
    #[must_use]
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Some(blob.into()),
            ..Self::default()
        }
    }

    /// Make every following write fail with a storage error.
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Number of successful writes so far.
    #[must_use]
    pub const fn writes(&self) -> usize {
        self.writes
    }
}

impl Persistence for MemorySnapshot {
    fn read(&self) -> Result<Option<Vec<Ticket>>> {
        self.blob
            .as_deref()
            .map_or(Ok(None), |blob| decode(blob, "<memory>"))
    }

    fn write(&mut self, tickets: &[Ticket]) -> Result<()> {
        if self.fail_writes {
            return Err(TicketError::Storage("snapshot slot is not writable".to_string()));
        }
        self.blob = Some(serde_json::to_string(tickets)?);
        self.writes += 1;
        Ok(())
    }
}
