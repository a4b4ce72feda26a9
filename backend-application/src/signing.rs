// QR signing key resolution

use anyhow::{Context, Result};
use tracing::info;
use uuid::Uuid;

use backend_domain::LocalStorage;

pub const QR_SECRET_KEY: &str = "mintpass.qrSecret";

/// A configured key wins. Otherwise the key kept in local storage is reused,
/// and one is generated and stored on first start so issued codes survive restarts.
pub async fn resolve_qr_secret(storage: &dyn LocalStorage, configured: Option<&str>) -> Result<String> {
    if let Some(secret) = configured {
        return Ok(secret.to_string());
    }
    let stored = storage
        .get_item(QR_SECRET_KEY)
        .await
        .context("read qr signing key")?;
    if let Some(secret) = stored.filter(|raw| !raw.trim().is_empty()) {
        return Ok(secret);
    }
    let secret = format!("{}{}", Uuid::new_v4().simple(), Uuid::new_v4().simple());
    storage
        .set_item(QR_SECRET_KEY, &secret)
        .await
        .context("persist qr signing key")?;
    info!("generated qr signing key");
    Ok(secret)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FakeStorage;

    #[tokio::test]
    async fn configured_secret_is_used_as_is() {
        let storage = FakeStorage::default();
        let secret = resolve_qr_secret(&storage, Some("configured-signing-key"))
            .await
            .expect("secret");
        assert_eq!(secret, "configured-signing-key");
        assert_eq!(storage.raw(QR_SECRET_KEY).await, None);
    }

    #[tokio::test]
    async fn generated_secret_is_persisted_and_reused() {
        let storage = FakeStorage::default();
        let first = resolve_qr_secret(&storage, None).await.expect("generate");
        assert_eq!(first.len(), 64);
        assert_eq!(storage.raw(QR_SECRET_KEY).await.as_deref(), Some(first.as_str()));
        let second = resolve_qr_secret(&storage, None).await.expect("reuse");
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn unreadable_storage_is_an_error() {
        let storage = FakeStorage::default();
        storage.set_broken(true);
        assert!(resolve_qr_secret(&storage, None).await.is_err());
    }
}
