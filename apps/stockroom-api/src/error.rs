//! Error types for the HTTP layer.
//!
//! Every handler returns [`ApiResult`]; [`ApiError`] owns the mapping from
//! domain and storage failures to status codes and the `{"error": ...}` body.
//!
//! ```text
//! ValidationError ──► 400  {"error": "<reason>"}
//! NotFound        ──► 404  {"error": "Endpoint not found"}
//! MethodNotAllowed──► 405  {"error": "Method not allowed"}
//! PayloadTooLarge ──► 413  {"error": "Request body too large"}
//! DbError         ──► 500  {"error": "Internal server error"}   (detail logged)
//! Unavailable     ──► 503  {"error": "Database unavailable"}
//! ```

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

use stockroom_core::ValidationError;
use stockroom_db::DbError;

/// API errors.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request body failed validation (400).
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No route matched (404).
    #[error("Endpoint not found")]
    NotFound,

    /// Route matched but not for this method (405).
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Request body over the extractor's size limit (413).
    #[error("Request body too large")]
    PayloadTooLarge,

    /// Storage failure (500). The detail stays in the logs.
    #[error("Database error: {0}")]
    Database(#[from] DbError),

    /// Handler panicked (500).
    #[error("Internal server error")]
    Internal,

    /// Database unreachable on a readiness probe (503).
    #[error("Database unavailable")]
    Unavailable,
}

impl ApiError {
    /// HTTP status for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::PayloadTooLarge => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::Database(_) | ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Unavailable => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    /// Message placed in the response body.
    fn public_message(&self) -> String {
        match self {
            ApiError::Database(_) => "Internal server error".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Database(ref e) = self {
            error!(error = %e, "Database operation failed");
        }

        let status = self.status();
        let body = Json(json!({ "error": self.public_message() }));

        (status, body).into_response()
    }
}

/// Result type alias for handlers.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use stockroom_core::ResourceKind;

    #[test]
    fn test_validation_maps_to_400_with_reason() {
        let err = ApiError::from(ValidationError::NegativeValue { field: "price" });
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_message(), "Price cannot be negative");

        let err = ApiError::from(ValidationError::MissingField {
            kind: ResourceKind::Phone,
        });
        assert_eq!(
            err.public_message(),
            "Missing required fields: model, price, quantity"
        );
    }

    #[test]
    fn test_database_detail_is_hidden() {
        let err = ApiError::from(DbError::QueryFailed("no such table: phones".into()));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Internal server error");
    }

    #[test]
    fn test_fixed_messages() {
        assert_eq!(ApiError::NotFound.public_message(), "Endpoint not found");
        assert_eq!(ApiError::MethodNotAllowed.status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(ApiError::PayloadTooLarge.status(), StatusCode::PAYLOAD_TOO_LARGE);
        assert_eq!(ApiError::PayloadTooLarge.public_message(), "Request body too large");
        assert_eq!(ApiError::Unavailable.public_message(), "Database unavailable");
        assert_eq!(ApiError::Internal.public_message(), "Internal server error");
    }
}
