use crate::AppState;
use backend_domain::{Event, EventCategory, EventListQuery};

pub async fn list_events(state: &AppState, query: EventListQuery) -> Vec<Event> {
    let category = query
        .category
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(EventCategory::from);
    let city = normalize_filter(query.city);
    let search = normalize_filter(query.search);
    let available_only = query.available_only.unwrap_or(false);

    state
        .store
        .list_events()
        .await
        .into_iter()
        .filter(|event| category.map(|c| event.category == c).unwrap_or(true))
        .filter(|event| {
            city.as_ref()
                .map(|c| event.city.to_lowercase() == *c)
                .unwrap_or(true)
        })
        .filter(|event| {
            search
                .as_ref()
                .map(|text| {
                    event.name.to_lowercase().contains(text)
                        || event.description.to_lowercase().contains(text)
                        || event.organizer.to_lowercase().contains(text)
                        || event.location.to_lowercase().contains(text)
                })
                .unwrap_or(true)
        })
        .filter(|event| !available_only || !event.is_sold_out())
        .collect()
}

pub async fn get_event(state: &AppState, id: &str) -> Option<Event> {
    state.store.get_event(id).await
}

/// Events whose organizer address matches `organizer`.
pub async fn list_organizer_events(state: &AppState, organizer: &str) -> Vec<Event> {
    state
        .store
        .list_events()
        .await
        .into_iter()
        .filter(|event| event.is_organized_by(organizer))
        .collect()
}

fn normalize_filter(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_lowercase())
        .filter(|raw| !raw.is_empty())
}
