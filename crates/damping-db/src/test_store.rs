//! Persistence for the `damping_test` table.

use chrono::{DateTime, Utc};
use damping_types::{DampingTest, NewDampingTest, TestId, VehicleId};
use sqlx::SqlitePool;

use crate::error::DbError;

/// Operations on the `damping_test` table.
pub struct DampingTestStore<'a> {
    pool: &'a SqlitePool,
}

impl<'a> DampingTestStore<'a> {
    /// Create a new damping test store bound to a connection pool.
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List every damping test in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] if the query fails.
    pub async fn list(&self) -> Result<Vec<DampingTest>, DbError> {
        let rows = sqlx::query_as::<_, DampingTestRow>(
            r"SELECT id, vehicle_id, damping_coefficient, transmissibility,
                     natural_frequency_Hz, efficiency_percent, test_date
              FROM damping_test
              ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(DampingTest::from).collect())
    }

    /// Insert a damping test and return its new id. `test_date` is
    /// stamped by the store.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] if the insert or commit fails.
    pub async fn insert(&self, test: &NewDampingTest) -> Result<TestId, DbError> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r"INSERT INTO damping_test
              (vehicle_id, damping_coefficient, transmissibility, natural_frequency_Hz, efficiency_percent)
              VALUES (?, ?, ?, ?, ?)",
        )
        .bind(test.vehicle_id.into_inner())
        .bind(test.damping_coefficient)
        .bind(test.transmissibility)
        .bind(test.natural_frequency_hz)
        .bind(test.efficiency_percent)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        let id = TestId(result.last_insert_rowid());
        tracing::debug!(test_id = %id, vehicle_id = %test.vehicle_id, "Inserted damping test");
        Ok(id)
    }

    /// Count stored damping tests.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] if the query fails.
    pub async fn count(&self) -> Result<i64, DbError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM damping_test")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}

/// A row from the `damping_test` table.
#[derive(Debug, Clone, sqlx::FromRow)]
struct DampingTestRow {
    id: i64,
    vehicle_id: i64,
    damping_coefficient: Option<f64>,
    transmissibility: Option<f64>,
    #[sqlx(rename = "natural_frequency_Hz")]
    natural_frequency_hz: Option<f64>,
    efficiency_percent: Option<f64>,
    test_date: Option<DateTime<Utc>>,
}

impl From<DampingTestRow> for DampingTest {
    fn from(row: DampingTestRow) -> Self {
        Self {
            id: TestId(row.id),
            vehicle_id: VehicleId(row.vehicle_id),
            damping_coefficient: row.damping_coefficient,
            transmissibility: row.transmissibility,
            natural_frequency_hz: row.natural_frequency_hz,
            efficiency_percent: row.efficiency_percent,
            test_date: row.test_date,
        }
    }
}
