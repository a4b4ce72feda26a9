use anyhow::{anyhow, Result};

use backend_domain::WalletAddress;

pub const MEMORY_STORE_URL: &str = "memory://";

pub fn validate_wallet_address(value: &str) -> Result<()> {
    let address = WalletAddress::parse(value).ok_or_else(|| anyhow!("wallet address is empty"))?;
    if !address.is_well_formed() {
        return Err(anyhow!("wallet address must be 0x followed by 40 hex digits"));
    }
    Ok(())
}

pub fn validate_remote_url(value: &str) -> Result<()> {
    let trimmed = value.trim();
    if trimmed == MEMORY_STORE_URL || trimmed == MEMORY_STORE_URL.trim_end_matches('/') {
        return Ok(());
    }
    if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
        return Err(anyhow!(
            "remote_store_url must be http(s):// or {}",
            MEMORY_STORE_URL
        ));
    }
    reqwest::Url::parse(trimmed).map_err(|err| anyhow!("invalid remote_store_url: {}", err))?;
    Ok(())
}

pub fn is_memory_url(value: &str) -> bool {
    value.trim().trim_end_matches('/') == MEMORY_STORE_URL.trim_end_matches('/')
}
