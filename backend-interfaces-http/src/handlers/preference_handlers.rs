use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;

use backend_application::commands::preference_commands;
use backend_application::queries::preference_queries;
use backend_application::AppState;
use backend_domain::UserPreferences;

use crate::error::HttpError;
use crate::middleware::authorize;

pub async fn get_preferences(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<UserPreferences>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    Ok(Json(preference_queries::get_preferences(&state).await))
}

pub async fn save_preferences(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<UserPreferences>,
) -> Result<Json<UserPreferences>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    Ok(Json(preference_commands::save_preferences(&state, payload).await?))
}

pub async fn complete_onboarding(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<UserPreferences>, HttpError> {
    if !authorize(&state.config, &headers) {
        return Err(HttpError::Unauthorized);
    }
    Ok(Json(preference_commands::complete_onboarding(&state).await?))
}
