//! The immutable bid record
//!
//! A `BidRecord` is created once when a submission is accepted and never
//! mutated afterwards. The ledger owns the records; the history writer and
//! the broadcast fan-out only read them.

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// One accepted submission: a numeric bid or an operator announcement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BidRecord {
    /// Wall-clock milliseconds since the Unix epoch. Monotonic per process,
    /// not required to be unique.
    pub timestamp_ms: i64,
    /// Opaque origin of the submitting connection (e.g. peer socket address).
    pub origin: String,
    /// Display name of the submitter, already sanitized.
    pub username: String,
    /// Sanitized payload: the bid amount, or the announcement text.
    pub text: String,
    /// True for operator announcements, which bypass numeric validation.
    pub is_announcement: bool,
}

/// Current wall-clock time in milliseconds since the Unix epoch.
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_serialization_roundtrip() {
        let record = BidRecord {
            timestamp_ms: 1_508_092_469_415,
            origin: "192.168.1.20:50412".to_string(),
            username: "alice".to_string(),
            text: "50".to_string(),
            is_announcement: false,
        };
        let json = serde_json::to_string(&record).unwrap();
        let decoded: BidRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, decoded);
    }

    #[test]
    fn test_now_ms_is_positive_epoch_time() {
        // Any sane clock is well past 2017.
        assert!(now_ms() > 1_500_000_000_000);
    }
}
