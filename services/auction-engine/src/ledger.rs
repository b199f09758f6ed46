//! In-memory bid ledger
//!
//! Append-only history of accepted records plus the derived running maximum.
//! Single-writer: all mutation is serialized by the owning hub, so a plain
//! struct with no interior locking is enough.

use crate::validate::numeric_value;
use types::record::BidRecord;

/// Ordered history of accepted submissions and the maximum bid so far.
///
/// The 0.0 sentinel is an always-beatable floor: any accepted numeric bid
/// is strictly greater than it.
#[derive(Debug, Clone, Default)]
pub struct BidLedger {
    history: Vec<BidRecord>,
    current_max: f64,
}

impl BidLedger {
    /// Empty ledger with the sentinel maximum.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a ledger by folding records in order, exactly as if each had
    /// been accepted live. Used by startup recovery.
    pub fn replay(records: impl IntoIterator<Item = BidRecord>) -> Self {
        let mut ledger = Self::new();
        for record in records {
            ledger.append(record);
        }
        ledger
    }

    /// Append an accepted record, folding its value into the running
    /// maximum when it is a numeric bid. Infallible, O(1) amortized.
    pub fn append(&mut self, record: BidRecord) {
        if !record.is_announcement {
            if let Some(value) = numeric_value(&record.text) {
                if value > self.current_max {
                    self.current_max = value;
                }
            }
        }
        self.history.push(record);
    }

    /// Chronological view of the full history, for late-join replay.
    pub fn snapshot(&self) -> &[BidRecord] {
        &self.history
    }

    /// Highest accepted numeric bid, or 0.0 when none.
    pub fn current_max(&self) -> f64 {
        self.current_max
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validate::{classify, Decision};
    use proptest::prelude::*;

    fn record(text: &str, is_announcement: bool) -> BidRecord {
        BidRecord {
            timestamp_ms: 0,
            origin: "test".to_string(),
            username: "tester".to_string(),
            text: text.to_string(),
            is_announcement,
        }
    }

    #[test]
    fn test_new_ledger_has_sentinel_max() {
        let ledger = BidLedger::new();
        assert_eq!(ledger.current_max(), 0.0);
        assert!(ledger.is_empty());
    }

    #[test]
    fn test_append_folds_numeric_bids() {
        let mut ledger = BidLedger::new();
        ledger.append(record("50", false));
        ledger.append(record("75.5", false));
        assert_eq!(ledger.current_max(), 75.5);
        assert_eq!(ledger.len(), 2);
    }

    #[test]
    fn test_announcements_never_move_the_max() {
        let mut ledger = BidLedger::new();
        ledger.append(record("50", false));
        ledger.append(record("999", true));
        assert_eq!(ledger.current_max(), 50.0);
    }

    #[test]
    fn test_snapshot_preserves_insertion_order() {
        let mut ledger = BidLedger::new();
        ledger.append(record("10", false));
        ledger.append(record("going once", true));
        ledger.append(record("20", false));
        let texts: Vec<&str> = ledger.snapshot().iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["10", "going once", "20"]);
    }

    #[test]
    fn test_replay_equals_live_folding() {
        let records = vec![
            record("10", false),
            record("5 minutes left!", true),
            record("25.5", false),
            record("12", false),
        ];
        let replayed = BidLedger::replay(records.clone());

        let mut live = BidLedger::new();
        for r in records {
            live.append(r);
        }
        assert_eq!(replayed.current_max(), live.current_max());
        assert_eq!(replayed.len(), live.len());
        assert_eq!(replayed.current_max(), 25.5);
    }

    proptest! {
        /// After every acceptance the maximum equals that bid and never
        /// decreases across the whole sequence.
        #[test]
        fn prop_max_never_decreases(bids in proptest::collection::vec(0.0f64..1_000_000.0, 1..40)) {
            let mut ledger = BidLedger::new();
            let mut previous_max = ledger.current_max();
            for bid in bids {
                let raw = format!("{bid}");
                match classify(&raw, &ledger) {
                    Decision::Accept { announcement: false } => {
                        ledger.append(record(&raw, false));
                        prop_assert_eq!(ledger.current_max(), bid);
                        prop_assert!(ledger.current_max() > previous_max);
                        previous_max = ledger.current_max();
                    }
                    Decision::RejectNotHighEnough => {
                        prop_assert!(bid <= previous_max);
                        prop_assert_eq!(ledger.current_max(), previous_max);
                    }
                    other => prop_assert!(false, "unexpected decision {:?}", other),
                }
            }
        }
    }
}
