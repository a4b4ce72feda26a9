use axum::extract::State;
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use tokio::time::{timeout, Duration};
use tracing::{error, warn};

use backend_application::AppState;

use crate::middleware::authorize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessReport {
    pub status: &'static str,
    pub local_storage: &'static str,
    pub remote_store: &'static str,
}

pub async fn health_live() -> StatusCode {
    StatusCode::OK
}

/// Not ready when local storage fails; an unreachable remote store only degrades.
pub async fn health_ready(State(state): State<AppState>) -> impl IntoResponse {
    let timeout_secs = state.config.request_timeout_seconds.max(1);
    let timeout_duration = Duration::from_secs(timeout_secs);

    let local_storage = match timeout(timeout_duration, state.health.check_local_storage()).await {
        Ok(Ok(true)) => "ok",
        Ok(Ok(false)) => "error",
        Ok(Err(err)) => {
            error!(error = %err, "local storage check failed");
            "error"
        }
        Err(_) => {
            error!(timeout_secs, "local storage check timed out");
            "timeout"
        }
    };
    let remote_store = match timeout(timeout_duration, state.health.check_remote_store()).await {
        Ok(Ok(true)) => "ok",
        Ok(Ok(false)) => "disabled",
        Ok(Err(err)) => {
            warn!(error = %err, "remote store check failed");
            "error"
        }
        Err(_) => {
            warn!(timeout_secs, "remote store check timed out");
            "timeout"
        }
    };

    let (status, label) = match (local_storage, remote_store) {
        ("ok", "ok" | "disabled") => (StatusCode::OK, "ok"),
        ("ok", _) => (StatusCode::OK, "degraded"),
        _ => (StatusCode::SERVICE_UNAVAILABLE, "unavailable"),
    };
    (
        status,
        Json(ReadinessReport {
            status: label,
            local_storage,
            remote_store,
        }),
    )
}

pub async fn metrics_prometheus(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> impl IntoResponse {
    if !authorize(&state.config, &headers) {
        return (StatusCode::UNAUTHORIZED, "unauthorized".to_string()).into_response();
    }
    let payload = state.metrics.render_prometheus();
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("text/plain; version=0.0.4; charset=utf-8"),
    );
    (headers, payload).into_response()
}
