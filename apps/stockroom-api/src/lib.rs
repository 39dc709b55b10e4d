//! # stockroom-api: HTTP Server for Stockroom
//!
//! Exposes phone and accessory stock as JSON over HTTP.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Request Lifecycle                                │
//! │                                                                         │
//! │  POST /phones {"model": "...", "price": 1, "quantity": 2}              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatchPanic ─► Trace ─► CORS ─► Router                                 │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  routes::stock::create::<Phone>                                        │
//! │       │  parse_body(Phone::KIND, bytes)     (stockroom-core)           │
//! │       │  db.stock::<Phone>().insert(item)   (stockroom-db)             │
//! │       ▼                                                                 │
//! │  201 {"id": 1, "model": "...", "price": 1.0, "quantity": 2, ...}       │
//! │                                                                         │
//! │  Any failure becomes an ApiError ─► {"error": "..."} with a status.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The library target exists so the router can be driven in-process by the
//! integration tests; `main.rs` only wires configuration and the listener.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod app;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;

// =============================================================================
// Re-exports
// =============================================================================

pub use app::create_app;
pub use config::{ApiConfig, ConfigError};
pub use error::{ApiError, ApiResult};
pub use state::AppState;
