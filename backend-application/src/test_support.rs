// In-process fakes for the domain ports, shared by the unit tests of this crate.

use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use anyhow::anyhow;
use async_trait::async_trait;
use tokio::sync::{Notify, RwLock};

use backend_domain::{
    Document, DocumentStore, HealthCheckService, LocalStorage, StoredDocument, WalletBridge,
    WalletConnection, WalletConnector,
};

use crate::{AppState, ChangeHub, DataStore, Metrics, PreferenceStore, SessionResolver};

#[derive(Default)]
pub struct FakeStorage {
    items: RwLock<HashMap<String, String>>,
    broken: AtomicBool,
    read_only: RwLock<HashSet<String>>,
}

impl FakeStorage {
    pub fn set_broken(&self, broken: bool) {
        self.broken.store(broken, Ordering::SeqCst);
    }

    /// Makes writes to `key` fail while reads keep working.
    pub async fn set_read_only(&self, key: &str) {
        self.read_only.write().await.insert(key.to_string());
    }

    pub async fn raw(&self, key: &str) -> Option<String> {
        self.items.read().await.get(key).cloned()
    }

    fn check(&self) -> anyhow::Result<()> {
        if self.broken.load(Ordering::SeqCst) {
            Err(anyhow!("storage disabled"))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl LocalStorage for FakeStorage {
    async fn get_item(&self, key: &str) -> anyhow::Result<Option<String>> {
        self.check()?;
        Ok(self.items.read().await.get(key).cloned())
    }

    async fn set_item(&self, key: &str, value: &str) -> anyhow::Result<()> {
        self.check()?;
        if self.read_only.read().await.contains(key) {
            return Err(anyhow!("{} is read-only", key));
        }
        self.items
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn remove_item(&self, key: &str) -> anyhow::Result<()> {
        self.check()?;
        self.items.write().await.remove(key);
        Ok(())
    }
}

/// Remote store fake. `offline` fails every call; `gate` holds writes until released.
#[derive(Default)]
pub struct FakeRemote {
    collections: RwLock<HashMap<String, Vec<StoredDocument>>>,
    offline: AtomicBool,
    gated: AtomicBool,
    gate: Notify,
    next_key: AtomicU64,
}

impl FakeRemote {
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn hold_writes(&self) {
        self.gated.store(true, Ordering::SeqCst);
    }

    pub fn release_writes(&self) {
        self.gated.store(false, Ordering::SeqCst);
        self.gate.notify_waiters();
    }

    pub async fn seed(&self, collection: &str, key: &str, data: serde_json::Value) {
        let data = match data {
            serde_json::Value::Object(map) => map,
            _ => Document::new(),
        };
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(StoredDocument {
                key: key.to_string(),
                data,
            });
    }

    pub async fn documents(&self, collection: &str) -> Vec<StoredDocument> {
        self.collections
            .read()
            .await
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    fn check(&self) -> anyhow::Result<()> {
        if self.offline.load(Ordering::SeqCst) {
            Err(anyhow!("remote unreachable"))
        } else {
            Ok(())
        }
    }

    async fn wait_gate(&self) {
        while self.gated.load(Ordering::SeqCst) {
            let notified = self.gate.notified();
            if !self.gated.load(Ordering::SeqCst) {
                break;
            }
            notified.await;
        }
    }
}

#[async_trait]
impl DocumentStore for FakeRemote {
    async fn list(&self, collection: &str) -> anyhow::Result<Vec<StoredDocument>> {
        self.check()?;
        Ok(self.documents(collection).await)
    }

    async fn get(&self, collection: &str, key: &str) -> anyhow::Result<Option<Document>> {
        self.check()?;
        Ok(self
            .documents(collection)
            .await
            .into_iter()
            .find(|doc| doc.key == key)
            .map(|doc| doc.data))
    }

    async fn set(&self, collection: &str, key: &str, data: &Document) -> anyhow::Result<()> {
        self.wait_gate().await;
        self.check()?;
        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection.to_string()).or_default();
        match docs.iter_mut().find(|doc| doc.key == key) {
            Some(doc) => doc.data = data.clone(),
            None => docs.push(StoredDocument {
                key: key.to_string(),
                data: data.clone(),
            }),
        }
        Ok(())
    }

    async fn add(&self, collection: &str, data: &Document) -> anyhow::Result<String> {
        self.wait_gate().await;
        self.check()?;
        let key = format!("doc-{}", self.next_key.fetch_add(1, Ordering::SeqCst));
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(StoredDocument {
                key: key.clone(),
                data: data.clone(),
            });
        Ok(key)
    }

    async fn query_eq(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> anyhow::Result<Vec<StoredDocument>> {
        self.check()?;
        Ok(self
            .documents(collection)
            .await
            .into_iter()
            .filter(|doc| doc.data.get(field).and_then(|v| v.as_str()) == Some(value))
            .collect())
    }

    async fn update(&self, collection: &str, key: &str, data: &Document) -> anyhow::Result<()> {
        self.wait_gate().await;
        self.check()?;
        let mut collections = self.collections.write().await;
        let doc = collections
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|doc| doc.key == key))
            .ok_or_else(|| anyhow!("no document {}/{}", collection, key))?;
        doc.data = data.clone();
        Ok(())
    }

    async fn ping(&self) -> anyhow::Result<()> {
        self.check()
    }
}

#[derive(Default)]
pub struct FakeWallet {
    connection: RwLock<WalletConnection>,
}

#[async_trait]
impl WalletConnector for FakeWallet {
    async fn current_connection(&self) -> WalletConnection {
        self.connection.read().await.clone()
    }
}

#[async_trait]
impl WalletBridge for FakeWallet {
    async fn report_connection(&self, connection: WalletConnection) {
        *self.connection.write().await = connection;
    }
}

pub struct FakeHealth;

#[async_trait]
impl HealthCheckService for FakeHealth {
    async fn check_remote_store(&self) -> anyhow::Result<bool> {
        Ok(true)
    }

    async fn check_local_storage(&self) -> anyhow::Result<bool> {
        Ok(true)
    }
}

pub struct Harness {
    pub state: AppState,
    pub storage: Arc<FakeStorage>,
    pub remote: Arc<FakeRemote>,
    pub wallet: Arc<FakeWallet>,
}

pub fn harness() -> Harness {
    let storage = Arc::new(FakeStorage::default());
    let remote = Arc::new(FakeRemote::default());
    let wallet = Arc::new(FakeWallet::default());
    let hub = Arc::new(ChangeHub::default());
    let metrics = Arc::new(Metrics::default());
    let store = Arc::new(DataStore::new(
        backend_domain::seed_events(),
        storage.clone(),
        Some(remote.clone() as Arc<dyn DocumentStore>),
        hub.clone(),
        metrics.clone(),
    ));
    let session = Arc::new(SessionResolver::new(wallet.clone(), storage.clone(), hub.clone()));
    let preferences = Arc::new(PreferenceStore::new(storage.clone()));
    let state = AppState {
        config: backend_domain::RuntimeConfig {
            bind_addr: "127.0.0.1:0".to_string(),
            api_token: None,
            data_dir: "./data".to_string(),
            seed_events_path: None,
            wallet_address: None,
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 5,
            qr_secret: "test-qr-secret".to_string(),
        },
        store,
        session,
        preferences,
        wallet: wallet.clone(),
        health: Arc::new(FakeHealth),
        change_hub: hub,
        metrics,
    };
    Harness {
        state,
        storage,
        remote,
        wallet,
    }
}
