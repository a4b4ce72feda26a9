use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use tokio::sync::RwLock;

use backend_domain::{Document, DocumentStore, StoredDocument};

/// Process-local document store, selected with a `memory://` remote url.
pub struct MemoryDocumentStore {
    collections: RwLock<BTreeMap<String, BTreeMap<String, Document>>>,
    available: AtomicBool,
    next_key: AtomicU64,
}

impl Default for MemoryDocumentStore {
    fn default() -> Self {
        Self {
            collections: RwLock::new(BTreeMap::new()),
            available: AtomicBool::new(true),
            next_key: AtomicU64::new(1),
        }
    }
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulates an unreachable store.
    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    fn ensure_available(&self) -> Result<()> {
        if self.available.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(anyhow!("memory document store unavailable"))
        }
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn list(&self, collection: &str) -> Result<Vec<StoredDocument>> {
        self.ensure_available()?;
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|docs| {
                docs.iter()
                    .map(|(key, data)| StoredDocument {
                        key: key.clone(),
                        data: data.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn get(&self, collection: &str, key: &str) -> Result<Option<Document>> {
        self.ensure_available()?;
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.get(key))
            .cloned())
    }

    async fn set(&self, collection: &str, key: &str, data: &Document) -> Result<()> {
        self.ensure_available()?;
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .insert(key.to_string(), data.clone());
        Ok(())
    }

    async fn add(&self, collection: &str, data: &Document) -> Result<String> {
        self.ensure_available()?;
        let key = format!("mem-{:08}", self.next_key.fetch_add(1, Ordering::SeqCst));
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .insert(key.clone(), data.clone());
        Ok(key)
    }

    async fn query_eq(&self, collection: &str, field: &str, value: &str) -> Result<Vec<StoredDocument>> {
        let docs = self.list(collection).await?;
        Ok(docs
            .into_iter()
            .filter(|doc| doc.data.get(field).and_then(|v| v.as_str()) == Some(value))
            .collect())
    }

    async fn update(&self, collection: &str, key: &str, data: &Document) -> Result<()> {
        self.ensure_available()?;
        let mut collections = self.collections.write().await;
        let slot = collections
            .get_mut(collection)
            .and_then(|docs| docs.get_mut(key))
            .ok_or_else(|| anyhow!("document {}/{} does not exist", collection, key))?;
        *slot = data.clone();
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        self.ensure_available()
    }
}
