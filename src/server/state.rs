//! Application state shared across all request handlers.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

/// Shared resources for the handlers, cloned per request by axum's state extraction.
#[derive(Clone)]
pub struct AppState {
    /// Pooled connection to the forum platform's database.
    pub db: DatabaseConnection,

    /// Shared secret the read endpoints require in `api_key`.
    pub api_key: Arc<str>,
}

impl AppState {
    /// Creates the application state.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `api_key` - Shared secret for the read endpoints
    pub fn new(db: DatabaseConnection, api_key: impl Into<Arc<str>>) -> Self {
        Self {
            db,
            api_key: api_key.into(),
        }
    }
}
