//! Persistence for the `vehicle` table.

use damping_types::{NewVehicle, Vehicle, VehicleId};
use sqlx::SqlitePool;

use crate::error::DbError;

/// Operations on the `vehicle` table.
pub struct VehicleStore<'a> {
    pool: &'a SqlitePool,
}

impl<'a> VehicleStore<'a> {
    /// Create a new vehicle store bound to a connection pool.
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List every vehicle in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] if the query fails.
    pub async fn list(&self) -> Result<Vec<Vehicle>, DbError> {
        let rows = sqlx::query_as::<_, VehicleRow>(
            r"SELECT id, brand, model, year, mass_kg, spring_stiffness_N_m, plate
              FROM vehicle
              ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Vehicle::from).collect())
    }

    /// Insert a vehicle and return its new id.
    ///
    /// The insert runs in its own transaction; on any error the
    /// transaction is dropped and rolled back.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] if the insert or commit fails.
    pub async fn insert(&self, vehicle: &NewVehicle) -> Result<VehicleId, DbError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r"INSERT INTO vehicle (brand, model, year, mass_kg, spring_stiffness_N_m, plate)
              VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&vehicle.brand)
        .bind(&vehicle.model)
        .bind(vehicle.year)
        .bind(vehicle.mass_kg)
        .bind(vehicle.spring_stiffness_n_m)
        .bind(vehicle.plate.as_deref())
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        let id = VehicleId(result.last_insert_rowid());
        tracing::debug!(
            vehicle_id = %id,
            brand = %vehicle.brand,
            model = %vehicle.model,
            "Inserted vehicle"
        );
        Ok(id)
    }

    /// Count stored vehicles.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] if the query fails.
    pub async fn count(&self) -> Result<i64, DbError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM vehicle")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}

/// A row from the `vehicle` table.
#[derive(Debug, Clone, sqlx::FromRow)]
struct VehicleRow {
    id: i64,
    brand: String,
    model: String,
    year: i32,
    mass_kg: f64,
    #[sqlx(rename = "spring_stiffness_N_m")]
    spring_stiffness_n_m: f64,
    plate: Option<String>,
}

impl From<VehicleRow> for Vehicle {
    fn from(row: VehicleRow) -> Self {
        Self {
            id: VehicleId(row.id),
            brand: row.brand,
            model: row.model,
            year: row.year,
            mass_kg: row.mass_kg,
            spring_stiffness_n_m: row.spring_stiffness_n_m,
            plate: row.plate,
        }
    }
}
