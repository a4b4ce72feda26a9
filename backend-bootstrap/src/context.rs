use std::sync::Arc;

use anyhow::Result;
use tracing::info;

use backend_application::{
    resolve_qr_secret, AppState, ChangeHub, DataStore, Metrics, PreferenceStore,
    SessionResolver,
};
use backend_domain::{DocumentStore, LocalStorage, RemoteStoreConfig};
use backend_infrastructure::{
    is_memory_url, load_seed_events, AppConfig, DefaultHealthService, FileLocalStorage,
    HttpDocumentStore, ManagedWalletConnector, MemoryDocumentStore,
};

/// Composition root: every shared service is built once here and handed
/// to the layers through `AppState`.
pub struct AppContext {
    pub config: AppConfig,
    pub state: AppState,
}

impl AppContext {
    pub async fn from_config(config: AppConfig) -> Result<Self> {
        let local: Arc<dyn LocalStorage> = Arc::new(FileLocalStorage::new(&config.data_dir));
        let qr_secret = resolve_qr_secret(local.as_ref(), config.qr_secret.as_deref()).await?;
        let runtime_config = config.to_runtime_config(qr_secret);

        let remote = build_remote_store(&config.to_remote_store_config())?;
        let seed = load_seed_events(runtime_config.seed_events_path.as_deref()).await?;
        let wallet = Arc::new(ManagedWalletConnector::new(
            runtime_config.wallet_address.clone(),
        ));
        let change_hub = Arc::new(ChangeHub::default());
        let metrics = Arc::new(Metrics::default());

        let store = Arc::new(DataStore::new(
            seed,
            local.clone(),
            remote.clone(),
            change_hub.clone(),
            metrics.clone(),
        ));
        let session = Arc::new(SessionResolver::new(
            wallet.clone(),
            local.clone(),
            change_hub.clone(),
        ));
        let preferences = Arc::new(PreferenceStore::new(local.clone()));
        let health = Arc::new(DefaultHealthService::new(remote, local));

        info!(
            data_dir = %runtime_config.data_dir,
            remote = store.has_remote(),
            "application context ready"
        );

        let state = AppState {
            config: runtime_config,
            store,
            session,
            preferences,
            wallet,
            health,
            change_hub,
            metrics,
        };
        Ok(Self { config, state })
    }
}

fn build_remote_store(config: &RemoteStoreConfig) -> Result<Option<Arc<dyn DocumentStore>>> {
    let Some(url) = config.url.as_deref() else {
        info!("no remote store configured, running local-only");
        return Ok(None);
    };
    if is_memory_url(url) {
        info!("using in-process remote store");
        return Ok(Some(Arc::new(MemoryDocumentStore::new())));
    }
    info!(url, "using remote document store");
    Ok(Some(Arc::new(HttpDocumentStore::new(config)?)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use backend_domain::HealthCheckService;

    fn scratch_config(remote_store_url: Option<&str>) -> AppConfig {
        AppConfig {
            data_dir: std::env::temp_dir()
                .join("mintpass-context-test")
                .to_string_lossy()
                .to_string(),
            remote_store_url: remote_store_url.map(ToString::to_string),
            ..AppConfig::default()
        }
    }

    #[tokio::test]
    async fn local_only_without_remote_url() {
        let context = AppContext::from_config(scratch_config(None))
            .await
            .expect("context");
        assert!(!context.state.store.has_remote());
        assert_eq!(context.state.store.list_events().await.len(), 6);
    }

    #[tokio::test]
    async fn memory_url_selects_in_process_store() {
        let context = AppContext::from_config(scratch_config(Some("memory://")))
            .await
            .expect("context");
        assert!(context.state.store.has_remote());
        assert!(context.state.health.check_remote_store().await.expect("ping"));
    }

    #[tokio::test]
    async fn configured_qr_secret_reaches_runtime_config() {
        let config = AppConfig {
            qr_secret: Some("gate-signing-key-0001".to_string()),
            ..scratch_config(None)
        };
        let context = AppContext::from_config(config).await.expect("context");
        assert_eq!(context.state.config.qr_secret, "gate-signing-key-0001");
    }
}
