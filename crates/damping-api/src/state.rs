//! Shared application state for the resource API.
//!
//! The only thing handlers share is the store handle. Each request
//! borrows a pooled connection for the duration of one query or
//! transaction and returns it on drop; there are no in-process locks.

use damping_db::SqliteDb;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`](std::sync::Arc) and injected via Axum's `State`
/// extractor.
#[derive(Clone)]
pub struct AppState {
    /// Pooled handle to the rig's `SQLite` store.
    pub db: SqliteDb,
}

impl AppState {
    /// Create application state around an open store.
    pub const fn new(db: SqliteDb) -> Self {
        Self { db }
    }
}
