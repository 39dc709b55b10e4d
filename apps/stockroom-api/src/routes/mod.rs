//! HTTP route handlers.
//!
//! - [`health`] - Liveness and readiness probes
//! - [`stock`] - Create / list / delete, generic over the resource type
//! - [`summary`] - Aggregate stock value

pub mod health;
pub mod stock;
pub mod summary;
