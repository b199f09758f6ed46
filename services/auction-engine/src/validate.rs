//! Submission classification
//!
//! The single decision point for incoming raw submissions. Pure function of
//! the raw text and the current ledger state; the caller routes the outcome.

use crate::ledger::BidLedger;
use crate::sanitize::ANNOUNCEMENT_MARKER;

/// Outcome of classifying one raw submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// The submission is accepted: a new high bid, or an operator
    /// announcement exempt from numeric validation.
    Accept { announcement: bool },
    /// The submission is not a well-formed number.
    RejectNotNumeric,
    /// The bid does not strictly exceed the current maximum.
    RejectNotHighEnough,
}

/// Classify a raw submission against the ledger.
///
/// Rules, in order:
/// 1. Marker-prefixed text is an announcement and is always accepted.
/// 2. Any character outside digits, `.` and `,` rejects as not numeric.
/// 3. Unparseable or non-finite values reject as not numeric.
/// 4. A value not strictly above the current maximum rejects as too low.
pub fn classify(raw: &str, ledger: &BidLedger) -> Decision {
    if raw.starts_with(ANNOUNCEMENT_MARKER) {
        return Decision::Accept { announcement: true };
    }
    if !raw.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',') {
        return Decision::RejectNotNumeric;
    }
    match numeric_value(raw) {
        Some(value) if value > ledger.current_max() => Decision::Accept {
            announcement: false,
        },
        Some(_) => Decision::RejectNotHighEnough,
        None => Decision::RejectNotNumeric,
    }
}

/// Parse a payload as a bid amount, treating the first comma as a decimal
/// point. Returns `None` for anything unparseable or non-finite, so a NaN
/// or infinity can never leak into a comparison.
pub fn numeric_value(text: &str) -> Option<f64> {
    let normalized = text.replacen(',', ".", 1);
    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}
