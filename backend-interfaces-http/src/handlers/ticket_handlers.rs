use axum::extract::{Path, Query, State};
use axum::http::HeaderMap;
use axum::Json;
use serde::Deserialize;

use backend_application::commands::ticket_commands;
use backend_application::queries::{session_queries, ticket_queries};
use backend_application::AppState;
use backend_domain::{Ticket, TicketListQuery, WriteQuery};

use crate::error::HttpError;
use crate::handlers::WriteResponse;
use crate::middleware::authorize;

#[derive(Debug, Deserialize)]
pub struct TransferRequest {
    pub recipient: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    pub qr_data: String,
}

pub async fn list_tickets(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<TicketListQuery>,
) -> Result<Json<Vec<Ticket>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    Ok(Json(ticket_queries::list_tickets(&state, query).await))
}

pub async fn get_ticket(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<Ticket>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    ticket_queries::get_ticket(&state, &id)
        .await
        .map(Json)
        .ok_or_else(|| HttpError::NotFound(format!("ticket {}", id)))
}

/// The current identity must own the ticket.
pub async fn transfer_ticket(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Query(query): Query<WriteQuery>,
    Json(payload): Json<TransferRequest>,
) -> Result<Json<WriteResponse<Ticket>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let identity = session_queries::get_identity(&state).await;
    let owner = identity.connected_address().ok_or(HttpError::Unauthorized)?;
    let outcome = ticket_commands::transfer_ticket(&state, &id, owner, &payload.recipient).await?;
    Ok(Json(WriteResponse::from_outcome(outcome, &query).await))
}

pub async fn verify_ticket(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<WriteQuery>,
    Json(payload): Json<VerifyRequest>,
) -> Result<Json<WriteResponse<Ticket>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let outcome = ticket_commands::verify_ticket(&state, &payload.qr_data).await?;
    Ok(Json(WriteResponse::from_outcome(outcome, &query).await))
}
