//! `SQLite` connection pool and configuration.
//!
//! The rig keeps all of its state in a single embedded `SQLite` file. The
//! file is created on first connect if it does not exist, and the schema is
//! ensured right after the pool opens.
//!
//! Every pooled connection enforces foreign keys and runs in WAL mode with
//! a busy timeout, so concurrent writers queue on `SQLite`'s own lock
//! instead of failing immediately. Queries are built at runtime (not
//! compile-time checked) to avoid requiring a live database at build time.

use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::error::DbError;
use crate::schema;

/// Default store location, relative to the working directory.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://damping.db";

/// Default maximum number of connections in the pool.
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Default time to wait for a free pooled connection, in seconds.
const DEFAULT_ACQUIRE_TIMEOUT_SECS: u64 = 5;

/// Default time a writer waits on `SQLite`'s lock, in milliseconds.
const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Configuration for the `SQLite` connection pool.
#[derive(Debug, Clone)]
pub struct SqliteConfig {
    /// `SQLite` connection URL.
    ///
    /// Format: `sqlite://path/to/file.db`
    pub url: String,
    /// Maximum number of connections in the pool.
    pub max_connections: u32,
    /// How long to wait for a free connection.
    pub acquire_timeout: Duration,
    /// How long a statement waits on a locked database before failing.
    pub busy_timeout: Duration,
}

impl SqliteConfig {
    /// Create a new configuration from a database URL.
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_owned(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            acquire_timeout: Duration::from_secs(DEFAULT_ACQUIRE_TIMEOUT_SECS),
            busy_timeout: Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS),
        }
    }

    /// Set the maximum number of connections.
    #[must_use]
    pub const fn with_max_connections(mut self, max: u32) -> Self {
        self.max_connections = max;
        self
    }

    /// Set the connection acquire timeout.
    #[must_use]
    pub const fn with_acquire_timeout(mut self, timeout: Duration) -> Self {
        self.acquire_timeout = timeout;
        self
    }

    /// Set the `SQLite` busy timeout.
    #[must_use]
    pub const fn with_busy_timeout(mut self, timeout: Duration) -> Self {
        self.busy_timeout = timeout;
        self
    }
}

impl Default for SqliteConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATABASE_URL)
    }
}

/// Connection pool handle to the rig's `SQLite` store.
///
/// Cheap to clone; every clone shares the same underlying pool. Handlers
/// receive it through application state rather than a global.
#[derive(Clone)]
pub struct SqliteDb {
    pool: SqlitePool,
}

impl SqliteDb {
    /// Open the store described by `config` and ensure its schema.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Config`] if the URL cannot be parsed.
    /// Returns [`DbError::Sqlite`] if the file cannot be opened or the
    /// schema cannot be created.
    pub async fn connect(config: &SqliteConfig) -> Result<Self, DbError> {
        if !config.url.starts_with("sqlite:") {
            return Err(DbError::Config(format!(
                "Expected a sqlite: URL, got {}",
                config.url
            )));
        }

        let connect_options: SqliteConnectOptions = config
            .url
            .parse()
            .map_err(|e: sqlx::Error| DbError::Config(format!("Invalid database URL: {e}")))?;

        let connect_options = connect_options
            .create_if_missing(true)
            .foreign_keys(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(config.busy_timeout);

        let pool = SqlitePoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(config.acquire_timeout)
            .connect_with(connect_options)
            .await?;

        tracing::info!(
            url = %config.url,
            max_connections = config.max_connections,
            "Connected to SQLite"
        );

        let db = Self { pool };
        db.ensure_schema().await?;
        Ok(db)
    }

    /// Connect using a database URL string with default pool settings.
    ///
    /// # Errors
    ///
    /// Returns [`DbError`] if the connection or schema setup fails.
    pub async fn connect_url(url: &str) -> Result<Self, DbError> {
        let config = SqliteConfig::new(url);
        Self::connect(&config).await
    }

    /// Create any tables that do not exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] if a `CREATE TABLE` statement fails.
    pub async fn ensure_schema(&self) -> Result<(), DbError> {
        schema::ensure_schema(&self.pool).await
    }

    /// Return a reference to the underlying [`SqlitePool`].
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close all connections in the pool gracefully.
    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("SQLite pool closed");
    }
}
