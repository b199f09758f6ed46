//! History Log Service
//!
//! Provides the append-only durable log of accepted auction messages and
//! the startup recovery path that replays a prior log into ledger state.
//!
//! One text line per accepted record, fields joined by a delimiter excluded
//! from every field domain. The same file doubles as an operator-readable
//! audit log and as the recovery source for an interrupted session.

pub mod format;
pub mod recovery;
pub mod writer;

pub use format::{FIELD_DELIMITER, LINE_TERMINATOR};
pub use recovery::{load, RecoveryReport};
pub use writer::{HistoryError, HistoryWriter};
