// Runtime configuration consumed by the application and interface layers

#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub bind_addr: String,
    pub api_token: Option<String>,
    pub data_dir: String,
    pub seed_events_path: Option<String>,
    pub wallet_address: Option<String>,
    pub max_body_bytes: u64,
    pub request_timeout_seconds: u64,
    /// HMAC key for ticket QR payloads.
    pub qr_secret: String,
}

#[derive(Debug, Clone)]
pub struct RemoteStoreConfig {
    pub url: Option<String>,
    pub token: Option<String>,
    pub timeout_seconds: u64,
}
