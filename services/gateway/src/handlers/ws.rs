//! WebSocket connection handler
//!
//! One task per connection reads inbound frames and dispatches them into
//! the hub; a companion writer task drains that connection's outbound queue
//! into the socket, so fan-out inside the hub lock never waits on a slow
//! peer.

use crate::state::AppState;
use axum::{
    extract::{
        ConnectInfo, State,
        ws::{Message, Utf8Bytes, WebSocket, WebSocketUpgrade},
    },
    response::Response,
};
use futures::{SinkExt, StreamExt};
use std::net::SocketAddr;
use tokio::sync::mpsc;
use types::events::{ClientEvent, ServerEvent};
use types::ids::SessionId;

pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<AppState>,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state, addr))
}

async fn handle_socket(socket: WebSocket, state: AppState, addr: SocketAddr) {
    let (mut sink, mut stream) = socket.split();
    let (outbound, mut outbound_rx) = mpsc::unbounded_channel::<ServerEvent>();

    // Registration also queues the history snapshot for this connection.
    let session_id = state.hub.lock().await.connect(addr.to_string(), outbound);

    let writer_task = tokio::spawn(async move {
        while let Some(event) = outbound_rx.recv().await {
            let frame = match serde_json::to_string(&event) {
                Ok(frame) => frame,
                Err(err) => {
                    tracing::error!(%err, "failed to encode outbound event");
                    continue;
                }
            };
            if sink.send(Message::Text(Utf8Bytes::from(frame))).await.is_err() {
                break;
            }
        }
    });

    while let Some(Ok(frame)) = stream.next().await {
        match frame {
            Message::Text(text) => dispatch(&state, session_id, text.as_str()).await,
            Message::Close(_) => break,
            // Binary and ping/pong frames carry no auction semantics.
            _ => {}
        }
    }

    state.hub.lock().await.disconnect(session_id);
    writer_task.abort();
}

async fn dispatch(state: &AppState, session_id: SessionId, frame: &str) {
    let event = match serde_json::from_str::<ClientEvent>(frame) {
        Ok(event) => event,
        Err(err) => {
            tracing::debug!(%session_id, %err, "dropping unparseable frame");
            return;
        }
    };
    match event {
        ClientEvent::Join { username } => {
            state.hub.lock().await.join(session_id, &username);
        }
        ClientEvent::Submit { text } => {
            if let Err(err) = state.hub.lock().await.submit(session_id, &text) {
                // An incomplete log would break the recovery guarantee for
                // everything written after the failure.
                tracing::error!(%err, "history append failed, shutting down");
                std::process::exit(1);
            }
        }
    }
}
