//! History line format — one accepted record per line
//!
//! # Text Format (per line)
//! ```text
//! timestamp§origin§username§text§flag\r\n
//! ```
//! The section sign delimiter cannot collide with currency or punctuation
//! characters that appear in bids, and the encoder strips any stray
//! occurrence from field content. The trailing `flag` field (`0`/`1`) marks
//! announcements; older logs carry only the first four fields.

use thiserror::Error;
use types::record::BidRecord;

/// Field separator, excluded from every field domain.
pub const FIELD_DELIMITER: char = '§';

/// Line terminator, consistent throughout a file.
pub const LINE_TERMINATOR: &str = "\r\n";

/// Minimum fields a line must carry to be recoverable.
const MIN_FIELDS: usize = 4;

/// A history line that cannot become a record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error("expected at least {MIN_FIELDS} fields, found {0}")]
    TooFewFields(usize),

    #[error("invalid timestamp field: {0:?}")]
    InvalidTimestamp(String),

    #[error("invalid announcement flag: {0:?}")]
    InvalidFlag(String),
}

/// Encode a record as one log line, without the terminator.
pub fn encode_line(record: &BidRecord) -> String {
    let field = |s: &str| s.replace(FIELD_DELIMITER, "");
    format!(
        "{ts}{d}{origin}{d}{username}{d}{text}{d}{flag}",
        ts = record.timestamp_ms,
        origin = field(&record.origin),
        username = field(&record.username),
        text = field(&record.text),
        flag = u8::from(record.is_announcement),
        d = FIELD_DELIMITER,
    )
}

/// Parse one log line into a record.
///
/// Four-field lines come from the older format that predates the
/// announcement flag; the flag is not recoverable there and defaults to
/// false.
pub fn parse_line(line: &str) -> Result<BidRecord, LineError> {
    let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
    if fields.len() < MIN_FIELDS {
        return Err(LineError::TooFewFields(fields.len()));
    }

    let timestamp_ms: i64 = fields[0]
        .parse()
        .map_err(|_| LineError::InvalidTimestamp(fields[0].to_string()))?;

    let is_announcement = match fields.get(4) {
        None => false,
        Some(&"0") => false,
        Some(&"1") => true,
        Some(other) => return Err(LineError::InvalidFlag(other.to_string())),
    };

    Ok(BidRecord {
        timestamp_ms,
        origin: fields[1].to_string(),
        username: fields[2].to_string(),
        text: fields[3].to_string(),
        is_announcement,
    })
}
