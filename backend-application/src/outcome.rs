use serde::Serialize;
use tokio::task::JoinHandle;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum LocalWrite {
    Applied,
    Unavailable(String),
}

impl LocalWrite {
    pub fn is_applied(&self) -> bool {
        matches!(self, LocalWrite::Applied)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum RemoteSyncStatus {
    Applied,
    Failed(String),
    Disabled,
}

/// The remote half of a write. Dropping it detaches the task, which keeps running.
#[derive(Debug)]
pub enum RemoteSync {
    Disabled,
    Pending(JoinHandle<RemoteSyncStatus>),
}

impl RemoteSync {
    pub async fn wait(self) -> RemoteSyncStatus {
        match self {
            RemoteSync::Disabled => RemoteSyncStatus::Disabled,
            RemoteSync::Pending(handle) => handle
                .await
                .unwrap_or_else(|err| RemoteSyncStatus::Failed(format!("remote task aborted: {err}"))),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, RemoteSync::Pending(handle) if !handle.is_finished())
    }
}

/// Result of a store write: the record as stored locally, the local status
/// and a handle on the remote mirror write.
#[derive(Debug)]
pub struct WriteOutcome<T> {
    pub record: T,
    pub local: LocalWrite,
    pub remote: RemoteSync,
}
