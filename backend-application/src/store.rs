// Multi-source data store
// Reconciles the seed events, the remote document store and the local cache.
// Local writes land and notify before the remote mirror write is issued.

use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;

use anyhow::anyhow;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use backend_domain::{
    dedupe_by_id, merge_layers, upsert_by_id, ChangeTopic, Document, DocumentStore, Event,
    LocalStorage, StoredDocument, Ticket, WalletAddress, EVENTS_COLLECTION, TICKETS_COLLECTION,
};

use crate::outcome::{LocalWrite, RemoteSync, RemoteSyncStatus, WriteOutcome};
use crate::{ChangeHub, Metrics};

pub const LOCAL_EVENTS_KEY: &str = "mintpass.events";
pub const LOCAL_TICKETS_KEY: &str = "mintpass.tickets";

pub struct DataStore {
    seed: Vec<Event>,
    local: Arc<dyn LocalStorage>,
    remote: Option<Arc<dyn DocumentStore>>,
    hub: Arc<ChangeHub>,
    metrics: Arc<Metrics>,
    events_lock: Mutex<()>,
    tickets_lock: Mutex<()>,
}

impl DataStore {
    pub fn new(
        seed: Vec<Event>,
        local: Arc<dyn LocalStorage>,
        remote: Option<Arc<dyn DocumentStore>>,
        hub: Arc<ChangeHub>,
        metrics: Arc<Metrics>,
    ) -> Self {
        Self {
            seed: dedupe_by_id(seed),
            local,
            remote,
            hub,
            metrics,
            events_lock: Mutex::new(()),
            tickets_lock: Mutex::new(()),
        }
    }

    pub fn has_remote(&self) -> bool {
        self.remote.is_some()
    }

    // ----- events -----

    pub async fn list_events(&self) -> Vec<Event> {
        let local = self.read_local::<Event>(LOCAL_EVENTS_KEY).await;
        let remote = self.fetch_remote_events().await;
        merge_layers(self.seed.clone(), remote, local)
    }

    /// Local cache, then the remote store, then the seed list.
    pub async fn get_event(&self, id: &str) -> Option<Event> {
        let id = id.trim();
        if id.is_empty() {
            return None;
        }
        let local = self.read_local::<Event>(LOCAL_EVENTS_KEY).await;
        if let Some(event) = local.into_iter().rev().find(|event| event.id == id) {
            return Some(event);
        }
        if let Some(remote) = &self.remote {
            match remote.get(EVENTS_COLLECTION, id).await {
                Ok(Some(doc)) => {
                    if let Some(event) = decode_event(id, doc) {
                        return Some(event);
                    }
                }
                Ok(None) => {}
                Err(err) => {
                    self.metrics.record_remote_read_error();
                    warn!(event_id = id, error = %err, "remote event lookup failed, using local data");
                }
            }
        }
        self.seed.iter().find(|event| event.id == id).cloned()
    }

    pub async fn save_event(&self, event: Event) -> WriteOutcome<Event> {
        if event.minted > event.supply {
            warn!(
                event_id = %event.id,
                minted = event.minted,
                supply = event.supply,
                "event minted count exceeds supply"
            );
        }
        let local = {
            let _guard = self.events_lock.lock().await;
            match self.load_local::<Event>(LOCAL_EVENTS_KEY).await {
                Ok(mut items) => {
                    upsert_by_id(&mut items, event.clone());
                    self.write_local(LOCAL_EVENTS_KEY, &items).await
                }
                Err(err) => self.local_unavailable(LOCAL_EVENTS_KEY, err),
            }
        };
        self.hub
            .publish(ChangeTopic::Events, Some(event.id.clone()));

        let remote = match (&self.remote, encode_document(&event)) {
            (None, _) => RemoteSync::Disabled,
            (Some(_), Err(err)) => {
                warn!(event_id = %event.id, error = %err, "event not encodable for remote store");
                RemoteSync::Disabled
            }
            (Some(remote), Ok(doc)) => {
                let remote = remote.clone();
                let key = event.id.clone();
                self.spawn_remote("save_event", event.id.clone(), async move {
                    remote.set(EVENTS_COLLECTION, &key, &doc).await
                })
            }
        };
        WriteOutcome {
            record: event,
            local,
            remote,
        }
    }

    /// Upserts on both tiers, like `save_event`.
    pub async fn update_event(&self, event: Event) -> WriteOutcome<Event> {
        debug!(event_id = %event.id, "updating event");
        self.save_event(event).await
    }

    // ----- tickets -----

    /// Tickets owned by `owner`. A blank owner yields nothing.
    pub async fn list_tickets(&self, owner: &str) -> Vec<Ticket> {
        let Some(owner) = WalletAddress::parse(owner) else {
            return Vec::new();
        };
        let local = self.read_local::<Ticket>(LOCAL_TICKETS_KEY).await;
        let local_ids: HashSet<String> = local.iter().map(|ticket| ticket.id.clone()).collect();
        let mut tickets = dedupe_by_id(
            local
                .into_iter()
                .filter(|ticket| owner.matches(&ticket.owner_address))
                .collect(),
        );

        let remote = self
            .query_remote_tickets("ownerAddress", owner.as_str())
            .await
            .into_iter()
            // Any local copy decides ownership, even one naming another owner,
            // matching `get_ticket`.
            .filter(|ticket| !local_ids.contains(&ticket.id))
            .filter(|ticket| owner.matches(&ticket.owner_address))
            .collect::<Vec<_>>();
        let seen: HashSet<String> = tickets.iter().map(|ticket| ticket.id.clone()).collect();
        for ticket in dedupe_by_id(remote) {
            if !seen.contains(&ticket.id) {
                tickets.push(ticket);
            }
        }
        tickets
    }

    pub async fn get_ticket(&self, id: &str) -> Option<Ticket> {
        let id = id.trim();
        if id.is_empty() {
            return None;
        }
        let local = self.read_local::<Ticket>(LOCAL_TICKETS_KEY).await;
        if let Some(ticket) = local.into_iter().rev().find(|ticket| ticket.id == id) {
            return Some(ticket);
        }
        self.query_remote_tickets("id", id).await.into_iter().next()
    }

    pub async fn save_ticket(&self, ticket: Ticket) -> WriteOutcome<Ticket> {
        let local = {
            let _guard = self.tickets_lock.lock().await;
            match self.load_local::<Ticket>(LOCAL_TICKETS_KEY).await {
                Ok(mut items) => {
                    upsert_by_id(&mut items, ticket.clone());
                    self.write_local(LOCAL_TICKETS_KEY, &items).await
                }
                Err(err) => self.local_unavailable(LOCAL_TICKETS_KEY, err),
            }
        };
        self.hub
            .publish(ChangeTopic::Tickets, Some(ticket.id.clone()));

        let remote = match (&self.remote, encode_document(&ticket)) {
            (None, _) => RemoteSync::Disabled,
            (Some(_), Err(err)) => {
                warn!(ticket_id = %ticket.id, error = %err, "ticket not encodable for remote store");
                RemoteSync::Disabled
            }
            (Some(remote), Ok(doc)) => {
                let remote = remote.clone();
                self.spawn_remote("save_ticket", ticket.id.clone(), async move {
                    remote.add(TICKETS_COLLECTION, &doc).await.map(|_| ())
                })
            }
        };
        WriteOutcome {
            record: ticket,
            local,
            remote,
        }
    }

    /// Full-record replacement. A ticket already marked used stays used.
    /// Upserts locally when the ticket is only known remotely.
    pub async fn update_ticket(&self, ticket: Ticket) -> WriteOutcome<Ticket> {
        let (ticket, local) = {
            let _guard = self.tickets_lock.lock().await;
            match self.load_local::<Ticket>(LOCAL_TICKETS_KEY).await {
                Ok(mut items) => {
                    let merged = match items.iter().rev().find(|existing| existing.id == ticket.id) {
                        Some(existing) => {
                            if existing.is_used && !ticket.is_used {
                                warn!(ticket_id = %ticket.id, "ignoring attempt to mark a used ticket unused");
                            }
                            existing.superseded_by(ticket)
                        }
                        None => {
                            debug!(ticket_id = %ticket.id, "ticket not cached locally, inserting");
                            ticket
                        }
                    };
                    upsert_by_id(&mut items, merged.clone());
                    let local = self.write_local(LOCAL_TICKETS_KEY, &items).await;
                    (merged, local)
                }
                Err(err) => {
                    let local = self.local_unavailable(LOCAL_TICKETS_KEY, err);
                    (ticket, local)
                }
            }
        };
        self.hub
            .publish(ChangeTopic::Tickets, Some(ticket.id.clone()));

        let remote = match (&self.remote, encode_document(&ticket)) {
            (None, _) => RemoteSync::Disabled,
            (Some(_), Err(err)) => {
                warn!(ticket_id = %ticket.id, error = %err, "ticket not encodable for remote store");
                RemoteSync::Disabled
            }
            (Some(remote), Ok(doc)) => {
                let remote = remote.clone();
                let id = ticket.id.clone();
                self.spawn_remote("update_ticket", ticket.id.clone(), async move {
                    let matches = remote.query_eq(TICKETS_COLLECTION, "id", &id).await?;
                    if matches.is_empty() {
                        return Err(anyhow!("ticket {} not found in remote store", id));
                    }
                    for stored in matches {
                        remote.update(TICKETS_COLLECTION, &stored.key, &doc).await?;
                    }
                    Ok(())
                })
            }
        };
        WriteOutcome {
            record: ticket,
            local,
            remote,
        }
    }

    /// Ids of every ticket in the local cache.
    pub async fn local_ticket_ids(&self) -> HashSet<String> {
        self.read_local::<Ticket>(LOCAL_TICKETS_KEY)
            .await
            .into_iter()
            .map(|ticket| ticket.id)
            .collect()
    }

    // ----- plumbing -----

    async fn fetch_remote_events(&self) -> Vec<Event> {
        let Some(remote) = &self.remote else {
            return Vec::new();
        };
        match remote.list(EVENTS_COLLECTION).await {
            Ok(docs) => docs
                .into_iter()
                .filter_map(|doc| decode_event(&doc.key, doc.data))
                .collect(),
            Err(err) => {
                self.metrics.record_remote_read_error();
                warn!(error = %err, "remote events unavailable, serving seed and local data");
                Vec::new()
            }
        }
    }

    async fn query_remote_tickets(&self, field: &str, value: &str) -> Vec<Ticket> {
        let Some(remote) = &self.remote else {
            return Vec::new();
        };
        match remote.query_eq(TICKETS_COLLECTION, field, value).await {
            Ok(docs) => docs.into_iter().filter_map(decode_ticket).collect(),
            Err(err) => {
                self.metrics.record_remote_read_error();
                warn!(field, error = %err, "remote ticket query failed, serving local data");
                Vec::new()
            }
        }
    }

    /// Read path: storage failures and unreadable blobs degrade to empty.
    async fn read_local<T: DeserializeOwned>(&self, key: &str) -> Vec<T> {
        match self.load_local(key).await {
            Ok(items) => items,
            Err(err) => {
                warn!(key, error = %err, "local cache unavailable, treating as empty");
                Vec::new()
            }
        }
    }

    async fn load_local<T: DeserializeOwned>(&self, key: &str) -> anyhow::Result<Vec<T>> {
        let Some(raw) = self.local.get_item(key).await? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str::<Vec<T>>(&raw) {
            Ok(items) => Ok(items),
            Err(err) => {
                warn!(key, error = %err, "local cache entry unreadable, starting over");
                Ok(Vec::new())
            }
        }
    }

    async fn write_local<T: Serialize>(&self, key: &str, items: &[T]) -> LocalWrite {
        let encoded = match serde_json::to_string(items) {
            Ok(encoded) => encoded,
            Err(err) => return self.local_unavailable(key, err.into()),
        };
        match self.local.set_item(key, &encoded).await {
            Ok(()) => {
                self.metrics.record_local_write();
                LocalWrite::Applied
            }
            Err(err) => self.local_unavailable(key, err),
        }
    }

    fn local_unavailable(&self, key: &str, err: anyhow::Error) -> LocalWrite {
        self.metrics.record_local_write_error();
        warn!(key, error = %err, "local cache write failed");
        LocalWrite::Unavailable(err.to_string())
    }

    fn spawn_remote<F>(&self, op: &'static str, record_id: String, write: F) -> RemoteSync
    where
        F: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        let metrics = self.metrics.clone();
        RemoteSync::Pending(tokio::spawn(async move {
            match write.await {
                Ok(()) => {
                    metrics.record_remote_write();
                    debug!(op, record_id = %record_id, "remote write applied");
                    RemoteSyncStatus::Applied
                }
                Err(err) => {
                    metrics.record_remote_write_error();
                    warn!(op, record_id = %record_id, error = %err, "remote write failed, local copy kept");
                    RemoteSyncStatus::Failed(err.to_string())
                }
            }
        }))
    }
}

fn encode_document<T: Serialize>(record: &T) -> anyhow::Result<Document> {
    match serde_json::to_value(record)? {
        Value::Object(map) => Ok(map),
        other => Err(anyhow!("expected a json object, got {}", other)),
    }
}

fn decode_event(key: &str, mut doc: Document) -> Option<Event> {
    doc.entry("id")
        .or_insert_with(|| Value::String(key.to_string()));
    match serde_json::from_value::<Event>(Value::Object(doc)) {
        Ok(event) => Some(event),
        Err(err) => {
            warn!(key, error = %err, "skipping malformed remote event");
            None
        }
    }
}

fn decode_ticket(doc: StoredDocument) -> Option<Ticket> {
    match serde_json::from_value::<Ticket>(Value::Object(doc.data)) {
        Ok(ticket) => Some(ticket),
        Err(err) => {
            warn!(key = %doc.key, error = %err, "skipping malformed remote ticket");
            None
        }
    }
}
