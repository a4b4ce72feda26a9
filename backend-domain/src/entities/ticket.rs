// Ticket entity
// Carries a snapshot of the event taken when the ticket was issued

use serde::{Deserialize, Serialize};

use crate::entities::Event;
use crate::value_objects::{same_wallet, EventImage};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    pub id: String,
    pub event_id: String,
    pub event_name: String,
    pub event_date: String,
    pub event_location: String,
    pub event_image: EventImage,
    pub qr_data: String,
    pub owner_address: String,
    #[serde(default)]
    pub is_used: bool,
}

impl Ticket {
    pub fn issue(event: &Event, id: String, owner_address: String, qr_data: String) -> Self {
        Self {
            id,
            event_id: event.id.clone(),
            event_name: event.name.clone(),
            event_date: event.date.clone(),
            event_location: event.location.clone(),
            event_image: event.image.clone(),
            qr_data,
            owner_address,
            is_used: false,
        }
    }

    pub fn is_owned_by(&self, address: &str) -> bool {
        same_wallet(&self.owner_address, address)
    }

    /// Applies `incoming` over this record. The used flag never goes back to false.
    pub fn superseded_by(&self, mut incoming: Ticket) -> Ticket {
        if self.is_used {
            incoming.is_used = true;
        }
        incoming
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(owner: &str, used: bool) -> Ticket {
        Ticket {
            id: "1733000000000".to_string(),
            event_id: "1".to_string(),
            event_name: "Neon Nights".to_string(),
            event_date: "Dec 12, 2025".to_string(),
            event_location: "Warehouse 4".to_string(),
            event_image: EventImage::from("from-purple-600 to-pink-500"),
            qr_data: "{}".to_string(),
            owner_address: owner.to_string(),
            is_used: used,
        }
    }

    #[test]
    fn ownership_ignores_case_and_padding() {
        let t = ticket("0xAbCd", false);
        assert!(t.is_owned_by(" 0xabcd "));
        assert!(!t.is_owned_by("0xabce"));
        assert!(!t.is_owned_by(""));
    }

    #[test]
    fn used_flag_is_sticky() {
        let used = ticket("0xa", true);
        let stale = ticket("0xb", false);
        let merged = used.superseded_by(stale);
        assert!(merged.is_used);
        assert_eq!(merged.owner_address, "0xb");
    }
}
