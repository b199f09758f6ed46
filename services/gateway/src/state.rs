use crate::hub::AuctionHub;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Shared application state: the hub behind its single serialization lock.
#[derive(Clone)]
pub struct AppState {
    pub hub: Arc<Mutex<AuctionHub>>,
}

impl AppState {
    pub fn new(hub: AuctionHub) -> Self {
        Self {
            hub: Arc::new(Mutex::new(hub)),
        }
    }
}
