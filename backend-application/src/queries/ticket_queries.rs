use crate::AppState;
use backend_domain::{Ticket, TicketListQuery};

/// An explicit owner wins; otherwise the current identity is used. No identity lists nothing.
pub async fn list_tickets(state: &AppState, query: TicketListQuery) -> Vec<Ticket> {
    let owner = match query.owner.filter(|owner| !owner.trim().is_empty()) {
        Some(owner) => owner,
        None => match state.session.get_identity().await.connected_address() {
            Some(address) => address.to_string(),
            None => return Vec::new(),
        },
    };
    state.store.list_tickets(&owner).await
}

pub async fn get_ticket(state: &AppState, id: &str) -> Option<Ticket> {
    state.store.get_ticket(id).await
}
