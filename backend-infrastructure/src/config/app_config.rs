use std::env;
use std::path::Path;

use anyhow::{anyhow, Result};
use serde::Deserialize;
use tokio::fs;
use tracing::warn;

use backend_domain::{RemoteStoreConfig, RuntimeConfig};

use crate::config::validation::{validate_remote_url, validate_wallet_address};

pub const CONFIG_ENV: &str = "MINTPASS_CONFIG";
pub const DEFAULT_CONFIG_PATH: &str = "./config.toml";
const MIN_QR_SECRET_LEN: usize = 16;

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AppConfig {
    pub bind_addr: String,
    pub api_token: Option<String>,
    pub data_dir: String,
    pub seed_events_path: Option<String>,
    pub remote_store_url: Option<String>,
    pub remote_store_token: Option<String>,
    pub remote_timeout_seconds: u64,
    pub wallet_address: Option<String>,
    /// Key for QR payload signatures. Generated and kept in the data dir when unset.
    pub qr_secret: Option<String>,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
    pub log_format: String,
    pub log_dir: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3280".to_string(),
            api_token: None,
            data_dir: "./data".to_string(),
            seed_events_path: None,
            remote_store_url: None,
            remote_store_token: None,
            remote_timeout_seconds: 10,
            wallet_address: None,
            qr_secret: None,
            max_body_bytes: 2 * 1024 * 1024,
            request_timeout_seconds: 15,
            log_format: "text".to_string(),
            log_dir: None,
        }
    }
}

impl AppConfig {
    pub fn config_path() -> String {
        env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string())
    }

    pub async fn load() -> Result<Self> {
        let path = Self::config_path();
        let file_path = Path::new(&path);
        let base_dir = file_path.parent();
        let mut config = if file_path.exists() {
            let content = fs::read_to_string(file_path).await?;
            Self::from_toml(&content)?
        } else {
            warn!(path = %path, "config file not found, using defaults");
            AppConfig::default()
        };
        config.apply_env_overrides();
        config.resolve_paths(base_dir);
        config.normalize();
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|err| anyhow!("invalid config: {}", err))
    }

    pub fn normalize(&mut self) {
        self.api_token = non_blank(self.api_token.take());
        self.seed_events_path = non_blank(self.seed_events_path.take());
        self.remote_store_url =
            non_blank(self.remote_store_url.take()).map(|url| url.trim_end_matches('/').to_string());
        self.remote_store_token = non_blank(self.remote_store_token.take());
        self.wallet_address = non_blank(self.wallet_address.take());
        self.qr_secret = non_blank(self.qr_secret.take());
        self.log_dir = non_blank(self.log_dir.take());
        self.log_format = self.log_format.trim().to_lowercase();
        if self.log_format.is_empty() {
            self.log_format = "text".to_string();
        }
    }

    fn resolve_paths(&mut self, base_dir: Option<&Path>) {
        let Some(base) = base_dir else {
            return;
        };
        self.data_dir = resolve_path(base, &self.data_dir);
        if let Some(path) = &self.seed_events_path {
            self.seed_events_path = Some(resolve_path(base, path));
        }
        if let Some(path) = &self.log_dir {
            self.log_dir = Some(resolve_path(base, path));
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.bind_addr
            .parse::<std::net::SocketAddr>()
            .map_err(|err| anyhow!("invalid bind_addr: {}", err))?;
        if self.data_dir.trim().is_empty() {
            return Err(anyhow!("data_dir must not be empty"));
        }
        if self.max_body_bytes == 0 {
            return Err(anyhow!("max_body_bytes must be greater than 0"));
        }
        if self.remote_timeout_seconds == 0 {
            return Err(anyhow!("remote_timeout_seconds must be greater than 0"));
        }
        if let Some(url) = &self.remote_store_url {
            validate_remote_url(url)?;
        }
        if let Some(address) = &self.wallet_address {
            validate_wallet_address(address)?;
        }
        if let Some(secret) = &self.qr_secret {
            if secret.len() < MIN_QR_SECRET_LEN {
                return Err(anyhow!(
                    "qr_secret must be at least {} characters",
                    MIN_QR_SECRET_LEN
                ));
            }
        }
        if !matches!(self.log_format.as_str(), "text" | "json") {
            return Err(anyhow!(
                "log_format must be 'text' or 'json', got '{}'",
                self.log_format
            ));
        }
        Ok(())
    }

    /// `qr_secret` is the resolved signing key (configured or persisted).
    pub fn to_runtime_config(&self, qr_secret: String) -> RuntimeConfig {
        RuntimeConfig {
            bind_addr: self.bind_addr.clone(),
            api_token: self.api_token.clone(),
            data_dir: self.data_dir.clone(),
            seed_events_path: self.seed_events_path.clone(),
            wallet_address: self.wallet_address.clone(),
            max_body_bytes: self.max_body_bytes,
            request_timeout_seconds: self.request_timeout_seconds,
            qr_secret,
        }
    }

    pub fn to_remote_store_config(&self) -> RemoteStoreConfig {
        RemoteStoreConfig {
            url: self.remote_store_url.clone(),
            token: self.remote_store_token.clone(),
            timeout_seconds: self.remote_timeout_seconds,
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(value) = lookup("MINTPASS_BIND_ADDR") {
            self.bind_addr = value;
        }
        if let Some(value) = lookup("MINTPASS_API_TOKEN") {
            self.api_token = Some(value);
        }
        if let Some(value) = lookup("MINTPASS_DATA_DIR") {
            self.data_dir = value;
        }
        if let Some(value) = lookup("MINTPASS_SEED_EVENTS_PATH") {
            self.seed_events_path = Some(value);
        }
        if let Some(value) = lookup("MINTPASS_REMOTE_STORE_URL") {
            self.remote_store_url = Some(value);
        }
        if let Some(value) = lookup("MINTPASS_REMOTE_STORE_TOKEN") {
            self.remote_store_token = Some(value);
        }
        if let Some(value) = lookup("MINTPASS_REMOTE_TIMEOUT_SECONDS") {
            self.remote_timeout_seconds = value.parse().unwrap_or(self.remote_timeout_seconds);
        }
        if let Some(value) = lookup("MINTPASS_WALLET_ADDRESS") {
            self.wallet_address = Some(value);
        }
        if let Some(value) = lookup("MINTPASS_QR_SECRET") {
            self.qr_secret = Some(value);
        }
        if let Some(value) = lookup("MINTPASS_MAX_BODY_BYTES") {
            self.max_body_bytes = value.parse().unwrap_or(self.max_body_bytes);
        }
        if let Some(value) = lookup("MINTPASS_REQUEST_TIMEOUT_SECONDS") {
            self.request_timeout_seconds = value.parse().unwrap_or(self.request_timeout_seconds);
        }
        if let Some(value) = lookup("MINTPASS_LOG_FORMAT") {
            self.log_format = value;
        }
        if let Some(value) = lookup("MINTPASS_LOG_DIR") {
            self.log_dir = Some(value);
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty())
}

fn resolve_path(base: &Path, value: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return trimmed.to_string();
    }
    let path = Path::new(trimmed);
    if path.is_absolute() {
        trimmed.to_string()
    } else {
        base.join(path).to_string_lossy().to_string()
    }
}
