//! Table definitions for the five rig entities.
//!
//! Tables are created with `CREATE TABLE IF NOT EXISTS` in dependency
//! order (parents before children). Nothing here ever drops or alters a
//! table, so running [`ensure_schema`] against an existing store is a no-op.
//!
//! Column names are the API field names verbatim, unit suffixes included.
//! Defaulted timestamps are written by `SQLite` at insert time as RFC 3339
//! UTC text with millisecond precision, which sorts chronologically.

use sqlx::SqlitePool;

use crate::error::DbError;

/// `vehicle` table: the root of both ownership chains.
const CREATE_VEHICLE: &str = r"CREATE TABLE IF NOT EXISTS vehicle (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    brand VARCHAR(80) NOT NULL,
    model VARCHAR(80) NOT NULL,
    year INTEGER NOT NULL,
    mass_kg REAL NOT NULL,
    spring_stiffness_N_m REAL NOT NULL,
    plate VARCHAR(20)
)";

/// `sensor` table, owned by `vehicle`.
const CREATE_SENSOR: &str = r#"CREATE TABLE IF NOT EXISTS sensor (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    "type" VARCHAR(50) NOT NULL,
    location VARCHAR(100) NOT NULL,
    vehicle_id INTEGER NOT NULL REFERENCES vehicle (id)
)"#;

/// `measurement` table, owned by `sensor`.
const CREATE_MEASUREMENT: &str = r"CREATE TABLE IF NOT EXISTS measurement (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    sensor_id INTEGER NOT NULL REFERENCES sensor (id),
    chassis_vibration_amplitude REAL,
    wheel_vibration_amplitude REAL,
    frequency_Hz REAL,
    acceleration_m_s2 REAL,
    temperature_C REAL,
    timestamp DATETIME DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
)";

/// `damping_test` table, owned by `vehicle`.
const CREATE_DAMPING_TEST: &str = r"CREATE TABLE IF NOT EXISTS damping_test (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    vehicle_id INTEGER NOT NULL REFERENCES vehicle (id),
    damping_coefficient REAL,
    transmissibility REAL,
    natural_frequency_Hz REAL,
    efficiency_percent REAL,
    test_date DATETIME DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
)";

/// `formula_result` table, owned by `damping_test`.
const CREATE_FORMULA_RESULT: &str = r"CREATE TABLE IF NOT EXISTS formula_result (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    test_id INTEGER NOT NULL REFERENCES damping_test (id),
    energy_before_J REAL NOT NULL,
    energy_after_J REAL NOT NULL,
    theoretical_frequency_Hz REAL NOT NULL,
    measured_frequency_Hz REAL NOT NULL,
    frequency_deviation_percent REAL NOT NULL
)";

/// Every table as `(name, DDL)`, parents first.
pub const TABLES: [(&str, &str); 5] = [
    ("vehicle", CREATE_VEHICLE),
    ("sensor", CREATE_SENSOR),
    ("measurement", CREATE_MEASUREMENT),
    ("damping_test", CREATE_DAMPING_TEST),
    ("formula_result", CREATE_FORMULA_RESULT),
];

/// Create any missing tables.
///
/// All statements run in one transaction, so a failure part-way leaves
/// the store exactly as it was.
///
/// # Errors
///
/// Returns [`DbError::Sqlite`] if any statement fails.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), DbError> {
    let mut tx = pool.begin().await?;
    for (name, ddl) in TABLES {
        sqlx::query(ddl).execute(&mut *tx).await?;
        tracing::debug!(table = name, "Table ensured");
    }
    tx.commit().await?;

    tracing::info!(tables = TABLES.len(), "Schema ready");
    Ok(())
}
