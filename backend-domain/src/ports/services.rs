use async_trait::async_trait;

use crate::entities::WalletConnection;

/// Read-only view of the genuine wallet connection.
#[async_trait]
pub trait WalletConnector: Send + Sync {
    async fn current_connection(&self) -> WalletConnection;
}

#[async_trait]
pub trait HealthCheckService: Send + Sync {
    async fn check_remote_store(&self) -> anyhow::Result<bool>;
    async fn check_local_storage(&self) -> anyhow::Result<bool>;
}

/// Host-facing side of the wallet connector: the embedding shell reports
/// connection changes here, the core only reads them.
#[async_trait]
pub trait WalletBridge: WalletConnector {
    async fn report_connection(&self, connection: WalletConnection);
}
