//! Stock endpoints, written once for every resource type.
//!
//! # Endpoints
//!
//! | Route                  | Handler              |
//! |------------------------|----------------------|
//! | `POST /phones`         | `create::<Phone>`     |
//! | `GET /phones`          | `list::<Phone>`       |
//! | `DELETE /phones/{id}`  | `delete::<Phone>`     |
//! | `POST /accessories`    | `create::<Accessory>` |
//! | `GET /accessories`     | `list::<Accessory>`   |
//! | `DELETE /accessories/{id}` | `delete::<Accessory>` |
//!
//! The create body is taken as raw bytes so that malformed JSON, a missing
//! body, and missing keys all produce the same `Missing required fields`
//! response instead of axum's default extractor rejections. A body over
//! axum's default limit (2 MB) is a JSON 413.

use axum::body::Bytes;
use axum::extract::rejection::BytesRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use tracing::{debug, info, warn};

use stockroom_core::validation::parse_body;
use stockroom_core::ValidationError;
use stockroom_db::StoredRecord;

use crate::error::{ApiError, ApiResult};
use crate::state::SharedState;

/// Body of a successful delete.
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub message: String,
}

/// `POST /{resource}`: validate, insert, return the stored record.
pub async fn create<R: StoredRecord>(
    State(state): State<SharedState>,
    body: Result<Bytes, BytesRejection>,
) -> ApiResult<(StatusCode, Json<R>)> {
    let body = body.map_err(|rejection| {
        warn!(resource = R::KIND.table(), %rejection, "Request body rejected");
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge
        } else {
            ApiError::Validation(ValidationError::MissingField { kind: R::KIND })
        }
    })?;

    let item = parse_body(R::KIND, &body)?;

    let record = state.db.stock::<R>().insert(item).await?;

    info!(
        resource = R::KIND.table(),
        id = record.id(),
        label = record.label(),
        "Stock record created"
    );
    Ok((StatusCode::CREATED, Json(record)))
}

/// `GET /{resource}`: every record, newest first.
pub async fn list<R: StoredRecord>(State(state): State<SharedState>) -> ApiResult<Json<Vec<R>>> {
    let records = state.db.stock::<R>().list().await?;
    Ok(Json(records))
}

/// `DELETE /{resource}/{id}`: succeeds whether or not the id existed.
///
/// A segment that is not a non-negative integer never names a record and
/// is treated as an unmatched route.
pub async fn delete<R: StoredRecord>(
    State(state): State<SharedState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<DeletedResponse>> {
    let id = parse_id(&raw_id).ok_or(ApiError::NotFound)?;

    let removed = state.db.stock::<R>().delete(id).await?;

    if removed {
        info!(resource = R::KIND.table(), id, "Stock record deleted");
    } else {
        debug!(resource = R::KIND.table(), id, "Delete matched no record");
    }

    Ok(Json(DeletedResponse {
        message: format!("{} deleted", R::KIND.display_name()),
    }))
}

/// Digits only, fitting in an `i64`.
fn parse_id(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("0"), Some(0));
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id("007"), Some(7));

        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("-1"), None);
        assert_eq!(parse_id("+1"), None);
        assert_eq!(parse_id("1.5"), None);
        assert_eq!(parse_id("abc"), None);
        assert_eq!(parse_id("99999999999999999999"), None);
    }
}
