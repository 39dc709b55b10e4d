//! Health check endpoints.
//!
//! - `GET /health` - Liveness probe (always 200 if the server is up)
//! - `GET /health/ready` - Readiness probe (200 if SQLite answers `SELECT 1`)

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use tracing::warn;

use crate::error::{ApiError, ApiResult};
use crate::state::SharedState;

/// Probe response body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Liveness probe: `GET /health`
///
/// Touches nothing, so it stays green while the database is down.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

/// Readiness probe: `GET /health/ready`
pub async fn ready(State(state): State<SharedState>) -> ApiResult<Json<HealthResponse>> {
    if state.db.health_check().await {
        Ok(Json(HealthResponse { status: "ready" }))
    } else {
        warn!("Readiness check failed: database unavailable");
        Err(ApiError::Unavailable)
    }
}
