use std::sync::Arc;

use serde::de::DeserializeOwned;
use tracing::warn;

use backend_domain::{LocalStorage, UserLocation, UserPreferences};

use crate::AppError;

pub const INTERESTS_KEY: &str = "mintpass.interests";
pub const LOCATION_KEY: &str = "mintpass.location";
pub const ONBOARDING_KEY: &str = "mintpass.onboarding";

pub struct PreferenceStore {
    storage: Arc<dyn LocalStorage>,
}

impl PreferenceStore {
    pub fn new(storage: Arc<dyn LocalStorage>) -> Self {
        Self { storage }
    }

    pub async fn load(&self) -> UserPreferences {
        let interests: Vec<String> = self.read_json(INTERESTS_KEY).await.unwrap_or_default();
        let location: Option<UserLocation> = self.read_json(LOCATION_KEY).await;
        let onboarding_complete = self.read_json(ONBOARDING_KEY).await.unwrap_or(false);
        UserPreferences {
            interests,
            location,
            onboarding_complete,
        }
    }

    pub async fn save(&self, preferences: UserPreferences) -> Result<UserPreferences, AppError> {
        let preferences = preferences.normalized();
        self.write_json(INTERESTS_KEY, &preferences.interests).await?;
        match &preferences.location {
            Some(location) => self.write_json(LOCATION_KEY, location).await?,
            None => self
                .storage
                .remove_item(LOCATION_KEY)
                .await
                .map_err(AppError::Internal)?,
        }
        self.write_json(ONBOARDING_KEY, &preferences.onboarding_complete)
            .await?;
        Ok(preferences)
    }

    async fn read_json<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.storage.get_item(key).await {
            Ok(raw) => raw?,
            Err(err) => {
                warn!(key, error = %err, "preference storage unavailable, using defaults");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                warn!(key, error = %err, "unreadable preference entry ignored");
                None
            }
        }
    }

    async fn write_json<T: serde::Serialize>(&self, key: &str, value: &T) -> Result<(), AppError> {
        let encoded = serde_json::to_string(value).map_err(|err| AppError::Internal(err.into()))?;
        self.storage
            .set_item(key, &encoded)
            .await
            .map_err(AppError::Internal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::harness;

    #[tokio::test]
    async fn defaults_when_nothing_stored() {
        let h = harness();
        assert_eq!(h.state.preferences.load().await, UserPreferences::default());
    }

    #[tokio::test]
    async fn save_normalizes_and_persists() {
        let h = harness();
        let saved = h
            .state
            .preferences
            .save(UserPreferences {
                interests: vec![" Music".to_string(), "music".to_string(), "".to_string()],
                location: Some(UserLocation {
                    city: " Berlin ".to_string(),
                    country: "Germany".to_string(),
                }),
                onboarding_complete: true,
            })
            .await
            .expect("save");
        assert_eq!(saved.interests, vec!["music".to_string()]);
        assert_eq!(h.state.preferences.load().await, saved);
        assert_eq!(h.storage.raw(ONBOARDING_KEY).await.as_deref(), Some("true"));
    }

    #[tokio::test]
    async fn broken_storage_reads_as_defaults() {
        let h = harness();
        h.storage.set_broken(true);
        assert_eq!(h.state.preferences.load().await, UserPreferences::default());
    }
}
