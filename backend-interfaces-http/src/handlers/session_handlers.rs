use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;

use backend_application::commands::session_commands;
use backend_application::queries::session_queries;
use backend_application::AppState;
use backend_domain::{SessionIdentity, WalletConnection};

use crate::error::HttpError;
use crate::middleware::authorize;

#[derive(Debug, Deserialize)]
pub struct MockConnectRequest {
    pub address: String,
}

#[derive(Debug, Deserialize)]
pub struct WalletReport {
    pub address: String,
}

pub async fn get_session(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<SessionIdentity>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    Ok(Json(session_queries::get_identity(&state).await))
}

pub async fn connect_mock(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<MockConnectRequest>,
) -> Result<Json<SessionIdentity>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    Ok(Json(session_commands::connect_mock(&state, &payload.address).await?))
}

pub async fn disconnect_mock(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<SessionIdentity>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    Ok(Json(session_commands::disconnect_mock(&state).await?))
}

/// The host shell reports the genuine wallet connection here.
pub async fn report_wallet(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<WalletReport>,
) -> Result<Json<SessionIdentity>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let identity = session_commands::report_wallet_connection(
        &state,
        WalletConnection::connected(payload.address),
    )
    .await?;
    Ok(Json(identity))
}

pub async fn disconnect_wallet(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<SessionIdentity>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let identity =
        session_commands::report_wallet_connection(&state, WalletConnection::disconnected())
            .await?;
    Ok(Json(identity))
}
