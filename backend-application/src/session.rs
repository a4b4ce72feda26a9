// Session/identity resolver
// One logical identity from the real wallet connection and the persisted mock address.

use std::sync::Arc;

use tracing::{info, warn};

use backend_domain::{
    ChangeTopic, LocalStorage, SessionIdentity, WalletAddress, WalletConnector,
};

use crate::{AppError, ChangeHub};

pub const MOCK_WALLET_KEY: &str = "mintpass.mockWallet";

pub struct SessionResolver {
    connector: Arc<dyn WalletConnector>,
    storage: Arc<dyn LocalStorage>,
    hub: Arc<ChangeHub>,
}

impl SessionResolver {
    pub fn new(
        connector: Arc<dyn WalletConnector>,
        storage: Arc<dyn LocalStorage>,
        hub: Arc<ChangeHub>,
    ) -> Self {
        Self {
            connector,
            storage,
            hub,
        }
    }

    pub async fn get_identity(&self) -> SessionIdentity {
        let real = self.connector.current_connection().await;
        let mock = self.mock_address().await;
        SessionIdentity::resolve(&real, mock.as_deref())
    }

    /// Unreadable storage counts as no mock identity.
    pub async fn mock_address(&self) -> Option<String> {
        match self.storage.get_item(MOCK_WALLET_KEY).await {
            Ok(value) => value.and_then(|raw| WalletAddress::parse(&raw).map(|a| a.0)),
            Err(err) => {
                warn!(error = %err, "mock wallet storage unavailable");
                None
            }
        }
    }

    pub async fn connect_mock(&self, address: &str) -> Result<SessionIdentity, AppError> {
        let address = WalletAddress::parse(address)
            .ok_or_else(|| AppError::BadRequest("address must not be empty".to_string()))?;
        self.storage
            .set_item(MOCK_WALLET_KEY, address.as_str())
            .await
            .map_err(|err| AppError::Internal(err.context("persist mock wallet")))?;
        info!(address = %address, "mock wallet connected");
        self.hub
            .publish(ChangeTopic::Identity, Some(address.0.clone()));
        Ok(self.get_identity().await)
    }

    /// Leaves a genuine wallet connection untouched.
    pub async fn disconnect_mock(&self) -> Result<SessionIdentity, AppError> {
        self.storage
            .remove_item(MOCK_WALLET_KEY)
            .await
            .map_err(|err| AppError::Internal(err.context("clear mock wallet")))?;
        info!("mock wallet disconnected");
        self.hub.publish(ChangeTopic::Identity, None);
        Ok(self.get_identity().await)
    }

    /// Called after the host reports a change of the real connection.
    pub fn announce_connection_change(&self, address: Option<String>) {
        self.hub.publish(ChangeTopic::Identity, address);
    }
}
