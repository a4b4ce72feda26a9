// In-process application state for router tests.

use std::sync::Arc;

use backend_application::{
    AppState, ChangeHub, DataStore, Metrics, PreferenceStore, SessionResolver,
};
use backend_domain::{seed_events, DocumentStore, RuntimeConfig};
use backend_infrastructure::{
    DefaultHealthService, ManagedWalletConnector, MemoryDocumentStore, MemoryLocalStorage,
};

pub const TOKEN: &str = "test-token";

pub struct TestApp {
    pub state: AppState,
    pub remote: Arc<MemoryDocumentStore>,
}

pub fn test_app(api_token: Option<&str>) -> TestApp {
    let storage = Arc::new(MemoryLocalStorage::new());
    let remote = Arc::new(MemoryDocumentStore::new());
    let remote_port = Some(remote.clone() as Arc<dyn DocumentStore>);
    let wallet = Arc::new(ManagedWalletConnector::new(None));
    let hub = Arc::new(ChangeHub::default());
    let metrics = Arc::new(Metrics::default());

    let store = Arc::new(DataStore::new(
        seed_events(),
        storage.clone(),
        remote_port.clone(),
        hub.clone(),
        metrics.clone(),
    ));
    let state = AppState {
        config: RuntimeConfig {
            bind_addr: "127.0.0.1:0".to_string(),
            api_token: api_token.map(ToString::to_string),
            data_dir: "./data".to_string(),
            seed_events_path: None,
            wallet_address: None,
            max_body_bytes: 64 * 1024,
            request_timeout_seconds: 2,
            qr_secret: "test-qr-secret".to_string(),
        },
        store,
        session: Arc::new(SessionResolver::new(
            wallet.clone(),
            storage.clone(),
            hub.clone(),
        )),
        preferences: Arc::new(PreferenceStore::new(storage.clone())),
        wallet,
        health: Arc::new(DefaultHealthService::new(remote_port, storage)),
        change_hub: hub,
        metrics,
    };
    TestApp { state, remote }
}
