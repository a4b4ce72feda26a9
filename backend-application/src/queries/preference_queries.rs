use crate::AppState;
use backend_domain::UserPreferences;

pub async fn get_preferences(state: &AppState) -> UserPreferences {
    state.preferences.load().await
}
