use axum::http::{header, HeaderMap};

use backend_domain::RuntimeConfig;

/// Open when no API token is configured.
pub fn authorize(config: &RuntimeConfig, headers: &HeaderMap) -> bool {
    match &config.api_token {
        Some(api_token) => extract_bearer(headers)
            .map(|token| token == *api_token)
            .unwrap_or(false),
        None => true,
    }
}

fn extract_bearer(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?.trim();
    let token = value.strip_prefix("Bearer ")?.trim();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}
