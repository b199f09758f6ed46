//! Recovery Loader — rebuild ledger state from a prior history file
//!
//! Runs once at startup, before any traffic is accepted. Opening or reading
//! the file is fatal (a requested recovery must never silently start
//! empty); individual malformed lines are skipped with a warning so a
//! truncated tail does not cost the well-formed prefix.

use crate::format::parse_line;
use crate::writer::HistoryError;
use std::fs;
use std::path::Path;
use tracing::{info, warn};
use types::record::BidRecord;

/// Outcome of loading a history file.
#[derive(Debug, Clone)]
pub struct RecoveryReport {
    /// Recovered records, in file order.
    pub records: Vec<BidRecord>,
    /// Number of lines that became records.
    pub replayed: usize,
    /// Number of malformed lines skipped.
    pub skipped: usize,
}

/// Load a prior session's history file into an ordered record sequence.
pub fn load(path: &Path) -> Result<RecoveryReport, HistoryError> {
    let data = fs::read_to_string(path)?;

    let mut records = Vec::new();
    let mut skipped = 0usize;
    for (idx, line) in data.lines().enumerate() {
        // The terminator convention leaves one empty trailing line.
        if line.is_empty() {
            continue;
        }
        match parse_line(line) {
            Ok(record) => records.push(record),
            Err(err) => {
                warn!(line = idx + 1, %err, "skipping malformed history line");
                skipped += 1;
            }
        }
    }

    let replayed = records.len();
    info!(path = %path.display(), replayed, skipped, "history file loaded");
    Ok(RecoveryReport {
        records,
        replayed,
        skipped,
    })
}
