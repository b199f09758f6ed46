//! Wire events for the real-time channel
//!
//! Both directions use internally tagged JSON so the payload shape is fixed
//! and validated at the boundary instead of being probed field by field.

use crate::record::BidRecord;
use serde::{Deserialize, Serialize};

/// Events sent by a client to the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientEvent {
    /// First-time join attempt announcing the participant's display name.
    Join { username: String },
    /// A bid or operator message.
    Submit { text: String },
}

/// Events sent by the server to one or more clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerEvent {
    /// Full ledger snapshot, sent once to a new connection.
    History { records: Vec<BidRecord> },
    /// An accepted submission, broadcast to every participant.
    Message {
        username: String,
        text: String,
        is_announcement: bool,
    },
    /// A participant completed the join transition (sent to all others).
    ParticipantJoined { username: String, count: u32 },
    /// A joined participant disconnected (sent to everyone remaining).
    ParticipantLeft { username: String, count: u32 },
    /// The submission was not in an acceptable numeric format (sender only).
    RejectedNotNumeric,
    /// The bid did not beat the current maximum (sender only).
    RejectedTooLow,
}
