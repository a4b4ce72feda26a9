// Event category value object

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum EventCategory {
    Music,
    Sports,
    Arts,
    Technology,
    Food,
    Gaming,
    Business,
    #[default]
    Other,
}

impl EventCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventCategory::Music => "music",
            EventCategory::Sports => "sports",
            EventCategory::Arts => "arts",
            EventCategory::Technology => "technology",
            EventCategory::Food => "food",
            EventCategory::Gaming => "gaming",
            EventCategory::Business => "business",
            EventCategory::Other => "other",
        }
    }
}

impl From<&str> for EventCategory {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "music" | "concert" => EventCategory::Music,
            "sports" | "sport" => EventCategory::Sports,
            "arts" | "art" | "theater" | "theatre" => EventCategory::Arts,
            "technology" | "tech" => EventCategory::Technology,
            "food" | "food & drink" => EventCategory::Food,
            "gaming" | "esports" => EventCategory::Gaming,
            "business" | "conference" => EventCategory::Business,
            _ => EventCategory::Other,
        }
    }
}

impl From<String> for EventCategory {
    fn from(s: String) -> Self {
        EventCategory::from(s.as_str())
    }
}
