use crate::{AppError, AppState};
use backend_domain::UserPreferences;

pub async fn save_preferences(
    state: &AppState,
    preferences: UserPreferences,
) -> Result<UserPreferences, AppError> {
    state.preferences.save(preferences).await
}

pub async fn complete_onboarding(state: &AppState) -> Result<UserPreferences, AppError> {
    let mut preferences = state.preferences.load().await;
    preferences.onboarding_complete = true;
    state.preferences.save(preferences).await
}
