use async_trait::async_trait;
use serde_json::{Map, Value};

/// Flat attribute map as stored by the remote document store.
pub type Document = Map<String, Value>;

pub const EVENTS_COLLECTION: &str = "events";
pub const TICKETS_COLLECTION: &str = "tickets";

#[derive(Debug, Clone, PartialEq)]
pub struct StoredDocument {
    pub key: String,
    pub data: Document,
}

/// Shared, network-reachable document database. Any method may fail when the
/// store is unreachable.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn list(&self, collection: &str) -> anyhow::Result<Vec<StoredDocument>>;
    async fn get(&self, collection: &str, key: &str) -> anyhow::Result<Option<Document>>;
    /// Creates or replaces the document under `key`.
    async fn set(&self, collection: &str, key: &str, data: &Document) -> anyhow::Result<()>;
    /// Adds a document under a store-assigned key and returns that key.
    async fn add(&self, collection: &str, data: &Document) -> anyhow::Result<String>;
    async fn query_eq(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> anyhow::Result<Vec<StoredDocument>>;
    /// Replaces an existing document; fails when `key` is unknown.
    async fn update(&self, collection: &str, key: &str, data: &Document) -> anyhow::Result<()>;
    async fn ping(&self) -> anyhow::Result<()>;
}

/// Per-device persisted key/value storage holding opaque serialized blobs.
#[async_trait]
pub trait LocalStorage: Send + Sync {
    async fn get_item(&self, key: &str) -> anyhow::Result<Option<String>>;
    async fn set_item(&self, key: &str, value: &str) -> anyhow::Result<()>;
    async fn remove_item(&self, key: &str) -> anyhow::Result<()>;
}
