// Event image value object
// Either a color-gradient token or a reference to an image

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EventImage {
    Gradient(String),
    Reference(String),
}

const REFERENCE_PREFIXES: [&str; 5] = ["http://", "https://", "data:", "ipfs://", "/"];

impl EventImage {
    pub fn as_str(&self) -> &str {
        match self {
            EventImage::Gradient(value) | EventImage::Reference(value) => value,
        }
    }

    pub fn is_gradient(&self) -> bool {
        matches!(self, EventImage::Gradient(_))
    }
}

impl From<&str> for EventImage {
    fn from(s: &str) -> Self {
        let trimmed = s.trim();
        if REFERENCE_PREFIXES
            .iter()
            .any(|prefix| trimmed.starts_with(prefix))
        {
            EventImage::Reference(trimmed.to_string())
        } else {
            EventImage::Gradient(trimmed.to_string())
        }
    }
}

impl From<String> for EventImage {
    fn from(s: String) -> Self {
        EventImage::from(s.as_str())
    }
}

impl From<EventImage> for String {
    fn from(image: EventImage) -> Self {
        match image {
            EventImage::Gradient(value) | EventImage::Reference(value) => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_references_and_gradients() {
        assert!(EventImage::from("from-indigo-500 to-purple-600").is_gradient());
        assert!(!EventImage::from("https://cdn.example/poster.jpg").is_gradient());
        assert!(!EventImage::from("data:image/png;base64,AAAA").is_gradient());
        assert!(!EventImage::from("ipfs://bafy/1.png").is_gradient());
    }
}
