use std::path::Path;

use anyhow::{anyhow, Result};
use tokio::fs;
use tracing::{info, warn};

use backend_domain::{dedupe_by_id, seed_events, Event};

/// Loads the baseline events. Without a path, or when the file is missing,
/// the built-in seed list is used. A present but unreadable file is an error.
pub async fn load_seed_events(path: Option<&str>) -> Result<Vec<Event>> {
    let Some(path) = path else {
        return Ok(seed_events());
    };
    let file_path = Path::new(path);
    if !file_path.exists() {
        warn!(path, "seed events file not found, using built-in events");
        return Ok(seed_events());
    }
    let content = fs::read_to_string(file_path).await?;
    let events = parse_seed_events(file_path, &content)?;
    info!(path, count = events.len(), "seed events loaded");
    Ok(dedupe_by_id(events))
}

fn parse_seed_events(path: &Path, content: &str) -> Result<Vec<Event>> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase());
    match extension.as_deref() {
        Some("yaml") | Some("yml") => serde_yaml::from_str(content)
            .map_err(|err| anyhow!("invalid seed events yaml {}: {}", path.display(), err)),
        _ => serde_json::from_str(content)
            .map_err(|err| anyhow!("invalid seed events json {}: {}", path.display(), err)),
    }
}
