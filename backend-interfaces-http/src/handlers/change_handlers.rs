use std::sync::Arc;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::Response;
use futures_util::{SinkExt, StreamExt};
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, warn};

use backend_application::{AppState, ChangeHub};
use backend_domain::{ChangeNotice, ChangeTopic};

use crate::error::HttpError;
use crate::middleware::authorize;

/// Upgrades to a websocket that receives every change notice as a JSON text frame.
pub async fn change_stream(
    State(state): State<AppState>,
    headers: HeaderMap,
    ws: WebSocketUpgrade,
) -> Result<Response, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let hub = state.change_hub.clone();
    Ok(ws.on_upgrade(move |socket| forward_changes(socket, hub)))
}

async fn forward_changes(socket: WebSocket, hub: Arc<ChangeHub>) {
    let (mut sink, mut incoming) = socket.split();
    let mut events = hub.subscribe(ChangeTopic::Events);
    let mut tickets = hub.subscribe(ChangeTopic::Tickets);
    let mut identity = hub.subscribe(ChangeTopic::Identity);
    debug!("change stream opened");

    loop {
        let received = tokio::select! {
            received = events.recv() => received,
            received = tickets.recv() => received,
            received = identity.recv() => received,
            frame = incoming.next() => match frame {
                Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                Some(Ok(_)) => continue,
            },
        };
        let Some(payload) = encode_notice(received) else {
            continue;
        };
        if sink.send(Message::Text(payload)).await.is_err() {
            break;
        }
    }
    debug!("change stream closed");
}

fn encode_notice(received: Result<ChangeNotice, RecvError>) -> Option<String> {
    match received {
        Ok(notice) => match serde_json::to_string(&notice) {
            Ok(payload) => Some(payload),
            Err(err) => {
                warn!(error = %err, "change notice not serializable");
                None
            }
        },
        Err(RecvError::Lagged(skipped)) => {
            warn!(skipped, "change stream subscriber lagged");
            None
        }
        Err(RecvError::Closed) => None,
    }
}
