use tracing::info;
use uuid::Uuid;

use crate::{AppError, AppState, WriteOutcome};
use backend_domain::{Event, EventDraft};

pub async fn create_event(
    state: &AppState,
    draft: EventDraft,
) -> Result<WriteOutcome<Event>, AppError> {
    let identity = state.session.get_identity().await;
    let organizer_address = identity
        .connected_address()
        .map(ToString::to_string)
        .ok_or(AppError::Unauthorized)?;
    let draft = normalize_draft(draft)?;

    let id = Uuid::new_v4().to_string();
    let event = draft.into_event(id, organizer_address);
    info!(event_id = %event.id, organizer = %event.organizer_address, "event created");
    Ok(state.store.save_event(event).await)
}

/// Organizer edit. The path id wins over the body id and the organizer
/// address of an existing event cannot be reassigned.
pub async fn update_event(
    state: &AppState,
    id: &str,
    mut event: Event,
) -> Result<WriteOutcome<Event>, AppError> {
    let identity = state.session.get_identity().await;
    let caller = identity
        .connected_address()
        .map(ToString::to_string)
        .ok_or(AppError::Unauthorized)?;
    let id = id.trim();
    if id.is_empty() {
        return Err(AppError::BadRequest("event id must not be empty".to_string()));
    }
    event.id = id.to_string();

    if let Some(existing) = state.store.get_event(id).await {
        if !existing.organizer_address.trim().is_empty() && !existing.is_organized_by(&caller) {
            return Err(AppError::Unauthorized);
        }
        if !existing.organizer_address.trim().is_empty() {
            event.organizer_address = existing.organizer_address;
        }
    }
    if event.organizer_address.trim().is_empty() {
        event.organizer_address = caller;
    }
    validate_price(&event.price)?;
    Ok(state.store.update_event(event).await)
}

fn normalize_draft(mut draft: EventDraft) -> Result<EventDraft, AppError> {
    draft.name = draft.name.trim().to_string();
    draft.date = draft.date.trim().to_string();
    draft.location = draft.location.trim().to_string();
    draft.organizer = draft.organizer.trim().to_string();
    draft.price = draft.price.trim().to_string();
    if draft.name.is_empty() {
        return Err(AppError::BadRequest("name must not be empty".to_string()));
    }
    if draft.date.is_empty() {
        return Err(AppError::BadRequest("date must not be empty".to_string()));
    }
    if draft.location.is_empty() {
        return Err(AppError::BadRequest("location must not be empty".to_string()));
    }
    validate_price(&draft.price)?;
    Ok(draft)
}

fn validate_price(price: &str) -> Result<(), AppError> {
    match price.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Ok(()),
        _ => Err(AppError::BadRequest(format!(
            "price '{}' is not a non-negative decimal",
            price
        ))),
    }
}
