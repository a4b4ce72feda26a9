use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::Json;

use backend_application::commands::{event_commands, ticket_commands};
use backend_application::queries::{event_queries, session_queries};
use backend_application::AppState;
use backend_domain::{Event, EventDraft, EventListQuery, Ticket, WriteQuery};

use crate::error::HttpError;
use crate::handlers::WriteResponse;
use crate::middleware::authorize;

pub async fn list_events(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<EventListQuery>,
) -> Result<Json<Vec<Event>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    Ok(Json(event_queries::list_events(&state, query).await))
}

pub async fn get_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<Json<Event>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    event_queries::get_event(&state, &id)
        .await
        .map(Json)
        .ok_or_else(|| HttpError::NotFound(format!("event {}", id)))
}

pub async fn create_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<WriteQuery>,
    Json(draft): Json<EventDraft>,
) -> Result<(StatusCode, Json<WriteResponse<Event>>), HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let outcome = event_commands::create_event(&state, draft).await?;
    let body = WriteResponse::from_outcome(outcome, &query).await;
    Ok((StatusCode::CREATED, Json(body)))
}

pub async fn update_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Query(query): Query<WriteQuery>,
    Json(event): Json<Event>,
) -> Result<Json<WriteResponse<Event>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let outcome = event_commands::update_event(&state, &id, event).await?;
    Ok(Json(WriteResponse::from_outcome(outcome, &query).await))
}

/// Mints one ticket for the current identity.
pub async fn mint_ticket(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Query(query): Query<WriteQuery>,
) -> Result<(StatusCode, Json<WriteResponse<Ticket>>), HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let identity = session_queries::get_identity(&state).await;
    let owner = identity.connected_address().ok_or(HttpError::Unauthorized)?;
    let outcome = ticket_commands::mint_ticket(&state, &id, owner).await?;
    let body = WriteResponse::from_outcome(outcome, &query).await;
    Ok((StatusCode::CREATED, Json(body)))
}

/// Events organized by the current identity.
pub async fn list_my_events(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Vec<Event>>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    let identity = session_queries::get_identity(&state).await;
    let organizer = identity.connected_address().ok_or(HttpError::Unauthorized)?;
    Ok(Json(event_queries::list_organizer_events(&state, organizer).await))
}
