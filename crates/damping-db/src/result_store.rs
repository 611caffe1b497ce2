//! Persistence for the `formula_result` table.
//!
//! Formula results are computed by the client from a finished damping
//! test and stored as received. All five quantities are `NOT NULL`.

use damping_types::{FormulaResult, NewFormulaResult, ResultId, TestId};
use sqlx::SqlitePool;

use crate::error::DbError;

/// Operations on the `formula_result` table.
pub struct FormulaResultStore<'a> {
    pool: &'a SqlitePool,
}

impl<'a> FormulaResultStore<'a> {
    /// Create a new formula result store bound to a connection pool.
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List every formula result in insertion order.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] if the query fails.
    pub async fn list(&self) -> Result<Vec<FormulaResult>, DbError> {
        let rows = sqlx::query_as::<_, FormulaResultRow>(
            r"SELECT id, test_id, energy_before_J, energy_after_J, theoretical_frequency_Hz,
                     measured_frequency_Hz, frequency_deviation_percent
              FROM formula_result
              ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(FormulaResult::from).collect())
    }

    /// Insert a formula result and return its new id.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] if the insert or commit fails, including
    /// when `test_id` does not reference an existing damping test.
    pub async fn insert(&self, result: &NewFormulaResult) -> Result<ResultId, DbError> {
        let mut tx = self.pool.begin().await?;

        let outcome = sqlx::query(
            r"INSERT INTO formula_result
              (test_id, energy_before_J, energy_after_J, theoretical_frequency_Hz, measured_frequency_Hz, frequency_deviation_percent)
              VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(result.test_id.into_inner())
        .bind(result.energy_before_j)
        .bind(result.energy_after_j)
        .bind(result.theoretical_frequency_hz)
        .bind(result.measured_frequency_hz)
        .bind(result.frequency_deviation_percent)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        let id = ResultId(outcome.last_insert_rowid());
        tracing::debug!(result_id = %id, test_id = %result.test_id, "Inserted formula result");
        Ok(id)
    }

    /// Count stored formula results.
    ///
    /// # Errors
    ///
    /// Returns [`DbError::Sqlite`] if the query fails.
    pub async fn count(&self) -> Result<i64, DbError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM formula_result")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}

/// A row from the `formula_result` table.
#[derive(Debug, Clone, sqlx::FromRow)]
struct FormulaResultRow {
    id: i64,
    test_id: i64,
    #[sqlx(rename = "energy_before_J")]
    energy_before_j: f64,
    #[sqlx(rename = "energy_after_J")]
    energy_after_j: f64,
    #[sqlx(rename = "theoretical_frequency_Hz")]
    theoretical_frequency_hz: f64,
    #[sqlx(rename = "measured_frequency_Hz")]
    measured_frequency_hz: f64,
    frequency_deviation_percent: f64,
}

impl From<FormulaResultRow> for FormulaResult {
    fn from(row: FormulaResultRow) -> Self {
        Self {
            id: ResultId(row.id),
            test_id: TestId(row.test_id),
            energy_before_j: row.energy_before_j,
            energy_after_j: row.energy_after_j,
            theoretical_frequency_hz: row.theoretical_frequency_hz,
            measured_frequency_hz: row.measured_frequency_hz,
            frequency_deviation_percent: row.frequency_deviation_percent,
        }
    }
}
