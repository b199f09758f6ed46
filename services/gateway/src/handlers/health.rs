use crate::state::AppState;
use axum::{Json, extract::State};
use serde_json::json;

/// Liveness probe with basic auction telemetry.
pub async fn healthz(State(state): State<AppState>) -> Json<serde_json::Value> {
    let hub = state.hub.lock().await;
    Json(json!({
        "status": "ok",
        "participants": hub.participant_count(),
        "records": hub.ledger().len(),
        "current_max": hub.ledger().current_max(),
    }))
}
