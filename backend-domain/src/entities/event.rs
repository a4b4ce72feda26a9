// Event entity
// An event listed on the marketplace, either seeded or created by an organizer

use serde::{Deserialize, Serialize};

use crate::value_objects::{EventCategory, EventImage};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub date: String,
    #[serde(default)]
    pub time: String,
    pub location: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    pub price: String,
    pub supply: u32,
    #[serde(default)]
    pub minted: u32,
    pub organizer: String,
    #[serde(default)]
    pub organizer_address: String,
    pub image: EventImage,
    #[serde(default)]
    pub category: EventCategory,
}

impl Event {
    /// Tickets still available, zero when the event is oversold.
    pub fn remaining(&self) -> u32 {
        self.supply.saturating_sub(self.minted)
    }

    pub fn is_sold_out(&self) -> bool {
        self.minted >= self.supply
    }

    pub fn is_organized_by(&self, address: &str) -> bool {
        !address.trim().is_empty()
            && self
                .organizer_address
                .trim()
                .eq_ignore_ascii_case(address.trim())
    }
}

/// Organizer input for a new event; id, minted count and organizer address
/// are assigned by the create flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDraft {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub date: String,
    #[serde(default)]
    pub time: String,
    pub location: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    pub price: String,
    pub supply: u32,
    pub organizer: String,
    pub image: EventImage,
    #[serde(default)]
    pub category: EventCategory,
}

impl EventDraft {
    pub fn into_event(self, id: String, organizer_address: String) -> Event {
        Event {
            id,
            name: self.name,
            description: self.description,
            date: self.date,
            time: self.time,
            location: self.location,
            city: self.city,
            country: self.country,
            price: self.price,
            supply: self.supply,
            minted: 0,
            organizer: self.organizer,
            organizer_address,
            image: self.image,
            category: self.category,
        }
    }
}
