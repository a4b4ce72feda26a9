use chrono::Utc;
use tracing::{info, warn};

use crate::{AppError, AppState, LocalWrite, WriteOutcome};
use backend_domain::{QrPayload, QrPayloadError, Ticket, WalletAddress};

/// Simulated mint: issues a ticket for `owner` and bumps the event's minted count.
pub async fn mint_ticket(
    state: &AppState,
    event_id: &str,
    owner: &str,
) -> Result<WriteOutcome<Ticket>, AppError> {
    let owner = WalletAddress::parse(owner)
        .ok_or_else(|| AppError::BadRequest("owner address must not be empty".to_string()))?;
    let event = state
        .store
        .get_event(event_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("event {}", event_id.trim())))?;
    // Read-then-increment without a lock across the two saves: concurrent mints
    // of one event can read the same `minted`, the later event save wins and
    // the count (and this sold-out check) may lag by the lost increments.
    if event.is_sold_out() {
        return Err(AppError::BadRequest(format!("event {} is sold out", event.id)));
    }

    let id = next_ticket_id(state).await;
    let qr_data = QrPayload::new(&state.config.qr_secret, &id, &event.id)
        .map_err(|err| AppError::Internal(err.into()))?
        .encode();
    let ticket = Ticket::issue(&event, id, owner.0, qr_data);
    let mut outcome = state.store.save_ticket(ticket).await;

    let mut event = event;
    event.minted = event.minted.saturating_add(1);
    info!(
        ticket_id = %outcome.record.id,
        event_id = %event.id,
        minted = event.minted,
        supply = event.supply,
        "ticket minted"
    );
    let counted = state.store.save_event(event).await;
    if let LocalWrite::Unavailable(reason) = &counted.local {
        warn!(
            ticket_id = %outcome.record.id,
            event_id = %counted.record.id,
            reason = %reason,
            "minted count not saved locally"
        );
        if outcome.local.is_applied() {
            outcome.local = LocalWrite::Unavailable(format!("minted count not saved: {reason}"));
        }
    }
    Ok(outcome)
}

/// Hands the ticket over to `recipient`; the previous owner loses it entirely.
pub async fn transfer_ticket(
    state: &AppState,
    ticket_id: &str,
    current_owner: &str,
    recipient: &str,
) -> Result<WriteOutcome<Ticket>, AppError> {
    let current_owner = WalletAddress::parse(current_owner).ok_or(AppError::Unauthorized)?;
    let recipient = WalletAddress::parse(recipient)
        .filter(WalletAddress::is_well_formed)
        .ok_or_else(|| {
            AppError::BadRequest("recipient must be 0x followed by 40 hex digits".to_string())
        })?;
    if recipient.matches(current_owner.as_str()) {
        return Err(AppError::BadRequest(
            "recipient already owns this ticket".to_string(),
        ));
    }

    let mut ticket = state
        .store
        .get_ticket(ticket_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("ticket {}", ticket_id.trim())))?;
    if !ticket.is_owned_by(current_owner.as_str()) {
        return Err(AppError::Unauthorized);
    }
    if ticket.is_used {
        return Err(AppError::BadRequest(
            "used tickets cannot be transferred".to_string(),
        ));
    }

    info!(ticket_id = %ticket.id, from = %current_owner, to = %recipient, "ticket transferred");
    ticket.owner_address = recipient.0;
    Ok(state.store.update_ticket(ticket).await)
}

/// Scans a QR payload and marks the ticket used.
pub async fn verify_ticket(
    state: &AppState,
    qr_data: &str,
) -> Result<WriteOutcome<Ticket>, AppError> {
    let payload = QrPayload::decode(qr_data, &state.config.qr_secret).map_err(|err| match err {
        QrPayloadError::Secret => AppError::Internal(err.into()),
        _ => AppError::BadRequest(err.to_string()),
    })?;
    let mut ticket = state
        .store
        .get_ticket(&payload.ticket_id)
        .await
        .ok_or_else(|| AppError::NotFound(format!("ticket {}", payload.ticket_id)))?;
    if ticket.event_id != payload.event_id {
        return Err(AppError::BadRequest(
            "qr payload does not belong to this ticket".to_string(),
        ));
    }
    if ticket.is_used {
        return Err(AppError::BadRequest("ticket already used".to_string()));
    }
    ticket.is_used = true;
    info!(ticket_id = %ticket.id, event_id = %ticket.event_id, "ticket verified");
    Ok(state.store.update_ticket(ticket).await)
}

async fn next_ticket_id(state: &AppState) -> String {
    let taken = state.store.local_ticket_ids().await;
    let mut candidate = Utc::now().timestamp_millis();
    while taken.contains(&candidate.to_string()) {
        candidate += 1;
    }
    candidate.to_string()
}
