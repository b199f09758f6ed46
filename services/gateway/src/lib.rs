//! Auction Gateway service
//!
//! WebSocket front end for the auction broadcast service: accepts
//! connections, replays history to late joiners, runs submissions through
//! the engine, fans accepted messages out to every participant, and keeps
//! the durable history log ahead of the broadcast guarantee.

pub mod config;
pub mod handlers;
pub mod hub;
pub mod router;
pub mod session;
pub mod state;
