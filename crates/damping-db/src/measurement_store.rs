//! Persistence for the `measurement` table.
//!
//! Measurements are the only list with a defined order: newest first by
//! the store-assigned `timestamp`. Rows written within the same
//! millisecond fall back to descending id, so the order is total.

use chrono::{DateTime, Utc};
use damping_types::{Measurement, MeasurementId, NewMeasurement, SensorId};
use sqlx::SqlitePool;

use crate::error::DbError;

/// Operations on the `measurement` table.
pub struct MeasurementStore<'a> {
    pool: &'a SqlitePool,
}

impl<'a> MeasurementStore<'a> {
    /// Create a new measurement store bound to a connection pool.
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List every measurement, most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] if the query fails.
    pub async fn list(&self) -> Result<Vec<Measurement>, DbError> {
        let rows = sqlx::query_as::<_, MeasurementRow>(
            r"SELECT id, sensor_id, chassis_vibration_amplitude, wheel_vibration_amplitude,
                     frequency_Hz, acceleration_m_s2, temperature_C, timestamp
              FROM measurement
              ORDER BY timestamp DESC, id DESC",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Measurement::from).collect())
    }

    /// Insert a measurement and return its new id.
    ///
    /// `timestamp` is not bound; the column default stamps the row with
    /// the store's current UTC time.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] if the insert or commit fails, including
    /// when `sensor_id` does not reference an existing sensor.
    pub async fn insert(&self, measurement: &NewMeasurement) -> Result<MeasurementId, DbError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r"INSERT INTO measurement
              (sensor_id, chassis_vibration_amplitude, wheel_vibration_amplitude, frequency_Hz, acceleration_m_s2, temperature_C)
              VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(measurement.sensor_id.into_inner())
        .bind(measurement.chassis_vibration_amplitude)
        .bind(measurement.wheel_vibration_amplitude)
        .bind(measurement.frequency_hz)
        .bind(measurement.acceleration_m_s2)
        .bind(measurement.temperature_c)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        let id = MeasurementId(result.last_insert_rowid());
        tracing::debug!(
            measurement_id = %id,
            sensor_id = %measurement.sensor_id,
            "Inserted measurement"
        );
        Ok(id)
    }

    /// Count stored measurements.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] if the query fails.
    pub async fn count(&self) -> Result<i64, DbError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM measurement")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}

/// A row from the `measurement` table.
#[derive(Debug, Clone, sqlx::FromRow)]
struct MeasurementRow {
    id: i64,
    sensor_id: i64,
    chassis_vibration_amplitude: Option<f64>,
    wheel_vibration_amplitude: Option<f64>,
    #[sqlx(rename = "frequency_Hz")]
    frequency_hz: Option<f64>,
    acceleration_m_s2: Option<f64>,
    #[sqlx(rename = "temperature_C")]
    temperature_c: Option<f64>,
    timestamp: Option<DateTime<Utc>>,
}

impl From<MeasurementRow> for Measurement {
    fn from(row: MeasurementRow) -> Self {
        Self {
            id: MeasurementId(row.id),
            sensor_id: SensorId(row.sensor_id),
            chassis_vibration_amplitude: row.chassis_vibration_amplitude,
            wheel_vibration_amplitude: row.wheel_vibration_amplitude,
            frequency_hz: row.frequency_hz,
            acceleration_m_s2: row.acceleration_m_s2,
            temperature_c: row.temperature_c,
            timestamp: row.timestamp,
        }
    }
}
