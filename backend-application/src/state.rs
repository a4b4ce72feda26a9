use std::sync::Arc;

use backend_domain::ports::{HealthCheckService, WalletBridge};
use backend_domain::RuntimeConfig;

use crate::{ChangeHub, DataStore, Metrics, PreferenceStore, SessionResolver};

#[derive(Clone)]
pub struct AppState {
    pub config: RuntimeConfig,
    pub store: Arc<DataStore>,
    pub session: Arc<SessionResolver>,
    pub preferences: Arc<PreferenceStore>,
    pub wallet: Arc<dyn WalletBridge>,
    pub health: Arc<dyn HealthCheckService>,
    pub change_hub: Arc<ChangeHub>,
    pub metrics: Arc<Metrics>,
}
