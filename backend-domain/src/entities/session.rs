// Session identity entities

use serde::{Deserialize, Serialize};

/// Connection state reported by the external wallet connector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletConnection {
    pub address: Option<String>,
    pub is_connected: bool,
}

impl WalletConnection {
    pub fn connected(address: impl Into<String>) -> Self {
        Self {
            address: Some(address.into()),
            is_connected: true,
        }
    }

    pub fn disconnected() -> Self {
        Self::default()
    }

    fn live_address(&self) -> Option<&str> {
        if !self.is_connected {
            return None;
        }
        self.address
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionIdentity {
    pub address: Option<String>,
    pub is_connected: bool,
    pub is_mock_connected: bool,
}

impl SessionIdentity {
    /// The genuine connection wins whenever it carries an address.
    pub fn resolve(real: &WalletConnection, mock_address: Option<&str>) -> Self {
        let mock_address = mock_address.map(str::trim).filter(|value| !value.is_empty());
        if let Some(address) = real.live_address() {
            return Self {
                address: Some(address.to_string()),
                is_connected: true,
                is_mock_connected: false,
            };
        }
        match mock_address {
            Some(address) => Self {
                address: Some(address.to_string()),
                is_connected: true,
                is_mock_connected: true,
            },
            None => Self {
                address: None,
                is_connected: real.is_connected,
                is_mock_connected: false,
            },
        }
    }

    pub fn connected_address(&self) -> Option<&str> {
        if self.is_connected {
            self.address.as_deref()
        } else {
            None
        }
    }
}
