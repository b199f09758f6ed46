//! Auction Engine
//!
//! Pure decision core for the auction broadcast service: classifies raw
//! submissions against the ledger, tracks the accepted-bid history and the
//! running maximum, and normalizes text for display and logging.
//!
//! **Key Invariants:**
//! - The running maximum equals the max of all accepted numeric payloads
//! - A bid must strictly exceed the current maximum to be accepted
//! - Announcements bypass numeric validation and never move the maximum
//! - No I/O and no async: every entry point is a plain synchronous call

pub mod ledger;
pub mod sanitize;
pub mod validate;

pub use ledger::BidLedger;
pub use validate::{classify, Decision};
