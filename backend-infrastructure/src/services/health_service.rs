use std::sync::Arc;

use async_trait::async_trait;

use backend_domain::{DocumentStore, HealthCheckService, LocalStorage};

use crate::utils::current_millis;

const HEALTHCHECK_KEY_PREFIX: &str = "mintpass.healthcheck";

pub struct DefaultHealthService {
    remote: Option<Arc<dyn DocumentStore>>,
    local: Arc<dyn LocalStorage>,
}

impl DefaultHealthService {
    pub fn new(remote: Option<Arc<dyn DocumentStore>>, local: Arc<dyn LocalStorage>) -> Self {
        Self { remote, local }
    }
}

#[async_trait]
impl HealthCheckService for DefaultHealthService {
    /// `false` when no remote store is configured.
    async fn check_remote_store(&self) -> anyhow::Result<bool> {
        match &self.remote {
            Some(remote) => remote.ping().await.map(|_| true),
            None => Ok(false),
        }
    }

    async fn check_local_storage(&self) -> anyhow::Result<bool> {
        let key = format!("{}.{}", HEALTHCHECK_KEY_PREFIX, current_millis());
        self.local.set_item(&key, "ok").await?;
        let read_back = self.local.get_item(&key).await?;
        self.local.remove_item(&key).await?;
        Ok(read_back.as_deref() == Some("ok"))
    }
}
