//! Shared application state.

use std::sync::Arc;

use stockroom_db::Database;

/// State handed to every handler through axum's `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
}

impl AppState {
    /// Wraps the database handle for sharing across handlers.
    pub fn new(db: Database) -> Arc<Self> {
        Arc::new(AppState { db })
    }
}

/// Handle type used by the router.
pub type SharedState = Arc<AppState>;
