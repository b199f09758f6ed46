//! History Writer — append-only durable log of accepted messages
//!
//! Each append writes one line and flushes. A failed append is surfaced to
//! the caller as fatal: the process must not keep serving once the log can
//! no longer be trusted to be complete.

use crate::format::{encode_line, LINE_TERMINATOR};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use types::record::BidRecord;

#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Durable, append-only writer over one session's history file.
pub struct HistoryWriter {
    writer: BufWriter<File>,
    path: PathBuf,
}

impl HistoryWriter {
    /// Create (truncating) the history file for this session.
    ///
    /// The name embeds the process start time and listening port so
    /// concurrent server instances never collide on the same file.
    pub fn create(dir: impl AsRef<Path>, start_ms: i64, port: u16) -> Result<Self, HistoryError> {
        let path = dir.as_ref().join(file_name(start_ms, port));
        let file = File::create(&path)?;
        Ok(Self {
            writer: BufWriter::new(file),
            path,
        })
    }

    /// Path of the underlying log file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one accepted record and flush it to the OS.
    pub fn append(&mut self, record: &BidRecord) -> Result<(), HistoryError> {
        self.writer.write_all(encode_line(record).as_bytes())?;
        self.writer.write_all(LINE_TERMINATOR.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}

/// History file name for a given session start time and port.
pub fn file_name(start_ms: i64, port: u16) -> String {
    format!("auction-history-{start_ms}-{port}.txt")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn sample_record(text: &str) -> BidRecord {
        BidRecord {
            timestamp_ms: 1_508_092_469_415,
            origin: "10.0.0.7:49152".to_string(),
            username: "alice".to_string(),
            text: text.to_string(),
            is_announcement: false,
        }
    }

    #[test]
    fn test_file_name_embeds_start_and_port() {
        assert_eq!(
            file_name(1_508_092_469_415, 8080),
            "auction-history-1508092469415-8080.txt"
        );
    }

    #[test]
    fn test_writers_on_different_ports_never_collide() {
        let tmp = TempDir::new().unwrap();
        let a = HistoryWriter::create(tmp.path(), 1_000, 8080).unwrap();
        let b = HistoryWriter::create(tmp.path(), 1_000, 8081).unwrap();
        assert_ne!(a.path(), b.path());
    }

    #[test]
    fn test_append_writes_terminated_lines() {
        let tmp = TempDir::new().unwrap();
        let mut writer = HistoryWriter::create(tmp.path(), 1_000, 8080).unwrap();
        writer.append(&sample_record("50")).unwrap();
        writer.append(&sample_record("75")).unwrap();

        let data = fs::read_to_string(writer.path()).unwrap();
        assert!(data.ends_with(LINE_TERMINATOR));
        assert_eq!(data.matches(LINE_TERMINATOR).count(), 2);
    }

    #[test]
    fn test_create_truncates_existing_file() {
        let tmp = TempDir::new().unwrap();
        {
            let mut writer = HistoryWriter::create(tmp.path(), 1_000, 8080).unwrap();
            writer.append(&sample_record("50")).unwrap();
        }
        let writer = HistoryWriter::create(tmp.path(), 1_000, 8080).unwrap();
        let data = fs::read_to_string(writer.path()).unwrap();
        assert!(data.is_empty());
    }

    #[test]
    fn test_create_fails_in_missing_directory() {
        let tmp = TempDir::new().unwrap();
        let missing = tmp.path().join("no-such-dir");
        assert!(HistoryWriter::create(&missing, 1_000, 8080).is_err());
    }
}
