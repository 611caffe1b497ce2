//! Error types for the backend binary.
//!
//! [`AppError`] is the top-level error that wraps every failure mode
//! during startup and serving, giving `main` a single type to propagate
//! with `?`.

/// Top-level error for the backend binary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// An environment variable held an unusable value.
    #[error("config error: {0}")]
    Config(String),

    /// The store could not be opened or its schema created.
    #[error("database error: {source}")]
    Database {
        /// The underlying data layer error.
        #[from]
        source: damping_db::DbError,
    },

    /// The HTTP server failed to bind or serve.
    #[error("server error: {source}")]
    Server {
        /// The underlying server error.
        #[from]
        source: damping_api::ServerError,
    },
}
