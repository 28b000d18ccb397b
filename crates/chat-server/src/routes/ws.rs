//! WebSocket endpoint.

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::Response;
use futures::{SinkExt, StreamExt};
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, warn};

use crate::frames::ClientFrame;
use crate::state::AppState;

/// Upgrade to a WebSocket connection.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    let (mut sink, mut stream) = socket.split();
    let mut frames = state.hub.subscribe();
    info!("Client connected ({} total)", state.hub.client_count());

    let mut send_task = tokio::spawn(async move {
        loop {
            let frame = match frames.recv().await {
                Ok(frame) => frame,
                Err(RecvError::Lagged(skipped)) => {
                    warn!("Client lagged, skipped {} frames", skipped);
                    continue;
                }
                Err(RecvError::Closed) => break,
            };

            let text = match serde_json::to_string(&frame) {
                Ok(text) => text,
                Err(e) => {
                    warn!("Failed to encode frame: {}", e);
                    continue;
                }
            };

            if sink.send(Message::Text(text)).await.is_err() {
                break;
            }
        }
    });

    let recv_state = state.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(message)) = stream.next().await {
            match message {
                Message::Text(text) => handle_text(&recv_state, &text),
                Message::Close(_) => break,
                _ => {}
            }
        }
    });

    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }

    info!("Client disconnected");
}

/// Parse a client frame; chat messages run on their own task so the
/// connection keeps reading while the turn waits in the admission queue.
fn handle_text(state: &AppState, text: &str) {
    match serde_json::from_str::<ClientFrame>(text) {
        Ok(ClientFrame::ChatMessage { text }) => {
            debug!("Queueing chat message");
            let state = state.clone();
            tokio::spawn(async move {
                state.process_chat_message(text).await;
            });
        }
        Err(e) => warn!("Ignoring malformed frame: {}", e),
    }
}
