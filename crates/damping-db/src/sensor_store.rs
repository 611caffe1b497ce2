//! Persistence for the `sensor` table.

use damping_types::{NewSensor, Sensor, SensorId, VehicleId};
use sqlx::SqlitePool;

use crate::error::DbError;

/// Operations on the `sensor` table.
pub struct SensorStore<'a> {
    pool: &'a SqlitePool,
}

impl<'a> SensorStore<'a> {
    /// Create a new sensor store bound to a connection pool.
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List every sensor in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] if the query fails.
    pub async fn list(&self) -> Result<Vec<Sensor>, DbError> {
        let rows = sqlx::query_as::<_, SensorRow>(
            r#"SELECT id, "type", location, vehicle_id
               FROM sensor
               ORDER BY id"#,
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Sensor::from).collect())
    }

    /// Insert a sensor and return its new id.
    ///
    /// Fails with a foreign-key violation if `vehicle_id` does not name an
    /// existing vehicle; nothing is written in that case.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] if the insert or commit fails.
    pub async fn insert(&self, sensor: &NewSensor) -> Result<SensorId, DbError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"INSERT INTO sensor ("type", location, vehicle_id)
               VALUES (?, ?, ?)"#,
        )
        .bind(&sensor.sensor_type)
        .bind(&sensor.location)
        .bind(sensor.vehicle_id.into_inner())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        let id = SensorId(result.last_insert_rowid());
        tracing::debug!(sensor_id = %id, vehicle_id = %sensor.vehicle_id, "Inserted sensor");
        Ok(id)
    }

    /// Count stored sensors.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] if the query fails.
    pub async fn count(&self) -> Result<i64, DbError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM sensor")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}

/// A row from the `sensor` table.
#[derive(Debug, Clone, sqlx::FromRow)]
struct SensorRow {
    id: i64,
    #[sqlx(rename = "type")]
    sensor_type: String,
    location: String,
    vehicle_id: i64,
}

impl From<SensorRow> for Sensor {
    fn from(row: SensorRow) -> Self {
        Self {
            id: SensorId(row.id),
            sensor_type: row.sensor_type,
            location: row.location,
            vehicle_id: VehicleId(row.vehicle_id),
        }
    }
}
