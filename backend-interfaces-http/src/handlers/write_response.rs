use serde::Serialize;

use backend_application::{LocalWrite, RemoteSync, RemoteSyncStatus, WriteOutcome};
use backend_domain::WriteQuery;

/// Body of every mutating endpoint. `remote` is absent while the mirror
/// write is still in flight and the caller did not ask to wait for it.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WriteResponse<T> {
    pub record: T,
    pub local: LocalWrite,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote: Option<RemoteSyncStatus>,
    pub remote_pending: bool,
}

impl<T> WriteResponse<T> {
    pub async fn from_outcome(outcome: WriteOutcome<T>, query: &WriteQuery) -> Self {
        let wait = query.wait_remote.unwrap_or(false);
        let (remote, remote_pending) = match outcome.remote {
            RemoteSync::Disabled => (Some(RemoteSyncStatus::Disabled), false),
            pending if wait => (Some(pending.wait().await), false),
            _ => (None, true),
        };
        Self {
            record: outcome.record,
            local: outcome.local,
            remote,
            remote_pending,
        }
    }
}
