//! `GET /summary`

use axum::extract::State;
use axum::Json;
use tracing::debug;

use stockroom_core::InventorySummary;

use crate::error::ApiResult;
use crate::state::SharedState;

/// Stock value per resource type and overall, rounded to cents.
pub async fn summary(State(state): State<SharedState>) -> ApiResult<Json<InventorySummary>> {
    let summary = state.db.summary().compute().await?;

    debug!(grand_total = %summary.grand_total_display(), "Summary computed");
    Ok(Json(summary))
}
