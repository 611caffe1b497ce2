//! Configuration for the backend binary.
//!
//! All configuration is loaded from environment variables. Every variable
//! is optional; unset variables fall back to defaults that run the rig
//! against `damping.db` in the working directory on port 5000.

use std::time::Duration;

use damping_api::{ServerConfig, DEFAULT_PORT};
use damping_db::{SqliteConfig, DEFAULT_DATABASE_URL};

use crate::error::AppError;

/// Complete backend configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Store connection settings.
    pub database: SqliteConfig,
    /// HTTP bind settings.
    pub server: ServerConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional variables:
    /// - `DATABASE_URL` -- `SQLite` store URL (default `sqlite://damping.db`)
    /// - `DB_MAX_CONNECTIONS` -- pool size (default 5)
    /// - `DB_BUSY_TIMEOUT_MS` -- how long writers wait on the lock (default 5000)
    /// - `HOST` -- bind address (default `0.0.0.0`)
    /// - `PORT` -- bind port (default 5000)
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_owned());

        let mut database = SqliteConfig::new(&url);
        if let Some(raw) = lookup("DB_MAX_CONNECTIONS") {
            database = database.with_max_connections(parse_var("DB_MAX_CONNECTIONS", &raw)?);
        }
        if let Some(raw) = lookup("DB_BUSY_TIMEOUT_MS") {
            let millis: u64 = parse_var("DB_BUSY_TIMEOUT_MS", &raw)?;
            database = database.with_busy_timeout(Duration::from_millis(millis));
        }

        let host = lookup("HOST").unwrap_or_else(|| String::from("0.0.0.0"));
        let port = match lookup("PORT") {
            Some(raw) => parse_var("PORT", &raw)?,
            None => DEFAULT_PORT,
        };

        Ok(Self {
            database,
            server: ServerConfig { host, port },
        })
    }
}

/// Parse a numeric environment variable, naming it in the error.
fn parse_var<T>(name: &str, raw: &str) -> Result<T, AppError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| AppError::Config(format!("invalid {name}: {e}")))
}
