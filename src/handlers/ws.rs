//! WebSocket event fan-out
//!
//! Clients connect to `/ws` and receive every [`Event`] published on the bus
//! as a JSON text frame. The current contest status is sent immediately on
//! connect so a late joiner never has to poll for it.

use axum::{
    Router,
    extract::{
        State, WebSocketUpgrade,
        ws::{Message, WebSocket},
    },
    response::IntoResponse,
    routing::get,
};
use futures::{SinkExt, StreamExt};
use tokio::sync::broadcast::error::RecvError;
use tracing::debug;

use crate::{events::Event, state::AppState};

/// WebSocket routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/ws", get(ws_handler))
}

async fn ws_handler(State(state): State<AppState>, ws: WebSocketUpgrade) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let (mut sender, mut receiver) = socket.split();
    let mut events = state.events().subscribe();

    // Late joiners get the current status without waiting for a change.
    let status_event = Event::ContestStatus(state.contest().status());
    if let Ok(json) = serde_json::to_string(&status_event)
        && sender.send(Message::Text(json.into())).await.is_err()
    {
        return;
    }

    loop {
        tokio::select! {
            event = events.recv() => {
                let event = match event {
                    Ok(event) => event,
                    // A slow client skips missed events rather than
                    // terminating the connection.
                    Err(RecvError::Lagged(skipped)) => {
                        debug!(skipped, "WebSocket client lagged behind event bus");
                        continue;
                    }
                    Err(RecvError::Closed) => break,
                };

                let json = match serde_json::to_string(&event) {
                    Ok(json) => json,
                    Err(e) => {
                        debug!(error = ?e, "Failed to serialize event");
                        continue;
                    }
                };

                if sender.send(Message::Text(json.into())).await.is_err() {
                    break;
                }
            }
            msg = receiver.next() => {
                match msg {
                    Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                    // Inbound frames are ignored; the socket is broadcast only.
                    Some(Ok(_)) => {}
                }
            }
        }
    }

    debug!("WebSocket client disconnected");
}
