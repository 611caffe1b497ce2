//! Data layer for the suspension-damping test rig (`SQLite`).
//!
//! All rig state lives in one embedded `SQLite` file. This crate opens the
//! pool, creates missing tables on startup, and provides one store per
//! entity with a list query and a transactional insert.
//!
//! # Ownership
//!
//! ```text
//! vehicle ──┬── sensor ──────── measurement
//!           └── damping_test ── formula_result
//! ```
//!
//! # Modules
//!
//! - [`sqlite`] -- Connection pool and configuration
//! - [`schema`] -- Idempotent table creation
//! - [`vehicle_store`], [`sensor_store`], [`measurement_store`],
//!   [`test_store`], [`result_store`] -- Per-table list and insert
//! - [`error`] -- Shared error types

pub mod error;
pub mod measurement_store;
pub mod result_store;
pub mod schema;
pub mod sensor_store;
pub mod sqlite;
pub mod test_store;
pub mod vehicle_store;

// Re-export primary types for convenience.
pub use error::DbError;
pub use measurement_store::MeasurementStore;
pub use result_store::FormulaResultStore;
pub use sensor_store::SensorStore;
pub use sqlite::{SqliteConfig, SqliteDb, DEFAULT_DATABASE_URL};
pub use test_store::DampingTestStore;
pub use vehicle_store::VehicleStore;
