// User preference entity

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserLocation {
    pub city: String,
    pub country: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreferences {
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub location: Option<UserLocation>,
    #[serde(default)]
    pub onboarding_complete: bool,
}

impl UserPreferences {
    pub fn normalized(mut self) -> Self {
        let mut interests: Vec<String> = self
            .interests
            .into_iter()
            .map(|item| item.trim().to_lowercase())
            .filter(|item| !item.is_empty())
            .collect();
        interests.sort();
        interests.dedup();
        self.interests = interests;
        self.location = self.location.and_then(|location| {
            let city = location.city.trim().to_string();
            let country = location.country.trim().to_string();
            if city.is_empty() && country.is_empty() {
                None
            } else {
                Some(UserLocation { city, country })
            }
        });
        self
    }
}
