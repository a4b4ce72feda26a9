// Identifier value objects

use serde::{Deserialize, Serialize};

/// A wallet identity string as supplied by a connector or typed by a user.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalletAddress(pub String);

impl WalletAddress {
    /// Trims the input; blank input has no address.
    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `0x` followed by 40 hex digits.
    pub fn is_well_formed(&self) -> bool {
        let Some(hex) = self.0.strip_prefix("0x").or_else(|| self.0.strip_prefix("0X")) else {
            return false;
        };
        hex.len() == 40 && hex.chars().all(|ch| ch.is_ascii_hexdigit())
    }

    pub fn matches(&self, other: &str) -> bool {
        same_wallet(&self.0, other)
    }
}

impl std::fmt::Display for WalletAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Case-insensitive comparison; a blank side never matches.
pub fn same_wallet(left: &str, right: &str) -> bool {
    let left = left.trim();
    let right = right.trim();
    !left.is_empty() && left.eq_ignore_ascii_case(right)
}
