//! Axum application builder.
//!
//! Configures routes, middleware, and state for the server.
//!
//! # Routes
//!
//! - `GET /health`, `GET /health/ready` - Probes
//! - `POST|GET /phones`, `DELETE /phones/{id}` - Phone stock
//! - `POST|GET /accessories`, `DELETE /accessories/{id}` - Accessory stock
//! - `GET /summary` - Stock value totals
//!
//! Anything else answers 404 (unknown path) or 405 (known path, wrong method),
//! both with the usual `{"error": ...}` body.

use std::any::Any;

use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::error;

use stockroom_core::{Accessory, Phone};

use crate::error::ApiError;
use crate::routes::{health, stock, summary};
use crate::state::SharedState;

/// Create the Axum application with all routes.
pub fn create_app(state: SharedState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health))
        .route("/health/ready", get(health::ready))
        // Phones
        .route(
            "/phones",
            get(stock::list::<Phone>).post(stock::create::<Phone>),
        )
        .route("/phones/{id}", delete(stock::delete::<Phone>))
        // Accessories
        .route(
            "/accessories",
            get(stock::list::<Accessory>).post(stock::create::<Accessory>),
        )
        .route("/accessories/{id}", delete(stock::delete::<Accessory>))
        // Summary
        .route("/summary", get(summary::summary))
        // JSON bodies for unmatched routes
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        // Middleware
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(CatchPanicLayer::custom(handle_panic))
        // State
        .with_state(state)
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}

/// Turns a handler panic into the generic 500 body.
fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };

    error!(panic = detail, "Request handler panicked");
    ApiError::Internal.into_response()
}
