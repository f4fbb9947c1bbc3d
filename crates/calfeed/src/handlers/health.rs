//! Health check endpoints for Kubernetes-style probes.
//!
//! - `/livez` - Basic liveness probe (immediate 200, no checks)
//! - `/healthz` - Feed cache stats (passive, never touches the event store)

use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::state::AppState;

/// Body of the `/healthz` response.
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub healthy: bool,
    /// Number of companies whose feed is currently cached.
    pub cached_feeds: usize,
}

/// GET /livez - Basic liveness probe.
#[axum::debug_handler]
pub async fn livez() -> StatusCode {
    StatusCode::OK
}

/// GET /healthz - Feed cache stats.
#[axum::debug_handler]
pub async fn healthz(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(HealthStatus {
        healthy: true,
        cached_feeds: state.feeds.cached_count(),
    })
}
