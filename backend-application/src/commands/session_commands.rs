use tracing::info;

use crate::{AppError, AppState};
use backend_domain::{SessionIdentity, WalletConnection};

pub async fn connect_mock(state: &AppState, address: &str) -> Result<SessionIdentity, AppError> {
    state.session.connect_mock(address).await
}

pub async fn disconnect_mock(state: &AppState) -> Result<SessionIdentity, AppError> {
    state.session.disconnect_mock().await
}

/// Records the genuine wallet state reported by the host shell.
pub async fn report_wallet_connection(
    state: &AppState,
    connection: WalletConnection,
) -> Result<SessionIdentity, AppError> {
    let connection = normalize_connection(connection);
    if connection.is_connected && connection.address.is_none() {
        return Err(AppError::BadRequest(
            "connected wallet must report an address".to_string(),
        ));
    }
    info!(
        connected = connection.is_connected,
        address = connection.address.as_deref().unwrap_or("-"),
        "wallet connection reported"
    );
    let address = connection.address.clone();
    state.wallet.report_connection(connection).await;
    state.session.announce_connection_change(address);
    Ok(state.session.get_identity().await)
}

fn normalize_connection(connection: WalletConnection) -> WalletConnection {
    let address = connection
        .address
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty());
    WalletConnection {
        is_connected: connection.is_connected,
        address,
    }
}
