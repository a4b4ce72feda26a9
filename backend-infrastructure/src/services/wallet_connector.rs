use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::info;

use backend_domain::{WalletBridge, WalletConnection, WalletConnector};

/// Holds the genuine wallet connection as last reported by the host.
/// A preset address starts the process already connected.
pub struct ManagedWalletConnector {
    connection: RwLock<WalletConnection>,
}

impl ManagedWalletConnector {
    pub fn new(preset: Option<String>) -> Self {
        let connection = match preset {
            Some(address) if !address.trim().is_empty() => {
                WalletConnection::connected(address.trim())
            }
            _ => WalletConnection::disconnected(),
        };
        Self {
            connection: RwLock::new(connection),
        }
    }
}

#[async_trait]
impl WalletConnector for ManagedWalletConnector {
    async fn current_connection(&self) -> WalletConnection {
        self.connection.read().await.clone()
    }
}

#[async_trait]
impl WalletBridge for ManagedWalletConnector {
    async fn report_connection(&self, connection: WalletConnection) {
        info!(
            address = connection.address.as_deref().unwrap_or("-"),
            connected = connection.is_connected,
            "wallet connection reported"
        );
        *self.connection.write().await = connection;
    }
}
