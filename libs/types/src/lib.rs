//! Types library for the auction broadcast service
//!
//! This library provides the core type definitions shared across the auction
//! system: the immutable bid record, session identifiers, and the wire events
//! exchanged over the real-time channel.
//!
//! # Modules
//! - `ids`: Unique identifiers (SessionId)
//! - `record`: The immutable `BidRecord` history entry
//! - `events`: Inbound/outbound wire event enums

// Public modules
pub mod events;
pub mod ids;
pub mod record;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::events::*;
    pub use crate::ids::*;
    pub use crate::record::*;
}
