//! Per-connection session state
//!
//! State machine per connection: pending on establishment, joined after the
//! first identity submission, closed on disconnect. Only the joined
//! transition touches the participant counter (owned by the hub).

use tokio::sync::mpsc::UnboundedSender;
use types::events::ServerEvent;

/// One connected participant.
#[derive(Debug)]
pub struct Session {
    origin: String,
    username: Option<String>,
    outbound: UnboundedSender<ServerEvent>,
}

impl Session {
    /// New pending session for a freshly established connection.
    pub fn new(origin: String, outbound: UnboundedSender<ServerEvent>) -> Self {
        Self {
            origin,
            username: None,
            outbound,
        }
    }

    /// Opaque origin of the connection (peer socket address).
    pub fn origin(&self) -> &str {
        &self.origin
    }

    /// Display name, present once the session has joined.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn is_joined(&self) -> bool {
        self.username.is_some()
    }

    /// Attempt the pending → joined transition.
    ///
    /// Returns false without side effects when already joined: repeat
    /// identity submissions are idempotent no-ops.
    pub fn join(&mut self, username: String) -> bool {
        if self.is_joined() {
            return false;
        }
        self.username = Some(username);
        true
    }

    /// Queue an event for this connection's writer task. A peer already
    /// tearing down just drops the event; its disconnect path reaps the
    /// session.
    pub fn send(&self, event: ServerEvent) {
        let _ = self.outbound.send(event);
    }
}
