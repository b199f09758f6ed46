//! Auction hub — single serialization point for all live state
//!
//! Owns the ledger, the session registry, the participant counter, and the
//! history writer. Every mutation goes through one `&mut self` entry point
//! behind the shared lock, so the total order of accepted bids matches the
//! order validation decisions were made in.
//!
//! The hub is also the broadcast router. Three fan-out patterns:
//! - accepted submissions go to every session, originator included
//! - rejections go back to the originator only
//! - the history snapshot goes to a new connection only, once, on connect

use crate::session::Session;
use auction_engine::sanitize::{clean_message, clean_username};
use auction_engine::{BidLedger, Decision, classify};
use history::{HistoryError, HistoryWriter};
use std::collections::BTreeMap;
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info};
use types::events::ServerEvent;
use types::ids::SessionId;
use types::record::{BidRecord, now_ms};

pub struct AuctionHub {
    ledger: BidLedger,
    writer: HistoryWriter,
    // BTreeMap keyed by time-sortable ids: fan-out order is deterministic.
    sessions: BTreeMap<SessionId, Session>,
    participant_count: u32,
}

impl AuctionHub {
    pub fn new(ledger: BidLedger, writer: HistoryWriter) -> Self {
        Self {
            ledger,
            writer,
            sessions: BTreeMap::new(),
            participant_count: 0,
        }
    }

    /// Register a new connection and replay the full history to it, so a
    /// late joiner reconstructs the same view as everyone else.
    pub fn connect(&mut self, origin: String, outbound: UnboundedSender<ServerEvent>) -> SessionId {
        let id = SessionId::new();
        let session = Session::new(origin, outbound);
        session.send(ServerEvent::History {
            records: self.ledger.snapshot().to_vec(),
        });
        self.sessions.insert(id, session);
        debug!(%id, "connection established");
        id
    }

    /// Identity submission: pending → joined, exactly once. Everyone except
    /// the joiner learns the new name and participant count.
    pub fn join(&mut self, id: SessionId, username: &str) {
        let username = clean_username(username);
        let Some(session) = self.sessions.get_mut(&id) else {
            return;
        };
        if !session.join(username.clone()) {
            debug!(%id, "duplicate identity submission ignored");
            return;
        }
        self.participant_count += 1;
        let count = self.participant_count;
        info!(%username, count, "participant joined");
        self.broadcast_except(id, ServerEvent::ParticipantJoined { username, count });
    }

    /// Run one raw submission through the validator and route the outcome.
    ///
    /// An accepted record is appended to the durable log before the
    /// broadcast; a failed append is returned to the caller as fatal.
    pub fn submit(&mut self, id: SessionId, raw: &str) -> Result<(), HistoryError> {
        let Some(session) = self.sessions.get(&id) else {
            return Ok(());
        };
        match classify(raw, &self.ledger) {
            Decision::Accept { announcement } => {
                let record = BidRecord {
                    timestamp_ms: now_ms(),
                    origin: session.origin().to_string(),
                    username: session.username().unwrap_or_default().to_string(),
                    text: clean_message(raw),
                    is_announcement: announcement,
                };
                self.writer.append(&record)?;
                debug!(username = %record.username, text = %record.text, announcement, "submission accepted");
                self.broadcast_all(ServerEvent::Message {
                    username: record.username.clone(),
                    text: record.text.clone(),
                    is_announcement: announcement,
                });
                self.ledger.append(record);
            }
            Decision::RejectNotNumeric => session.send(ServerEvent::RejectedNotNumeric),
            Decision::RejectNotHighEnough => session.send(ServerEvent::RejectedTooLow),
        }
        Ok(())
    }

    /// Remove a connection. Only a joined session decrements the counter
    /// and announces its departure; a pending one leaves silently.
    pub fn disconnect(&mut self, id: SessionId) {
        let Some(session) = self.sessions.remove(&id) else {
            return;
        };
        if let Some(username) = session.username() {
            self.participant_count = self.participant_count.saturating_sub(1);
            let count = self.participant_count;
            info!(%username, count, "participant left");
            self.broadcast_all(ServerEvent::ParticipantLeft {
                username: username.to_string(),
                count,
            });
        } else {
            debug!(%id, "pending connection closed");
        }
    }

    pub fn participant_count(&self) -> u32 {
        self.participant_count
    }

    pub fn ledger(&self) -> &BidLedger {
        &self.ledger
    }

    fn broadcast_all(&self, event: ServerEvent) {
        for session in self.sessions.values() {
            session.send(event.clone());
        }
    }

    fn broadcast_except(&self, skip: SessionId, event: ServerEvent) {
        for (id, session) in &self.sessions {
            if *id != skip {
                session.send(event.clone());
            }
        }
    }
}
