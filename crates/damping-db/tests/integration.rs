//! Integration tests for the `damping-db` data layer.
//!
//! Each test opens a fresh `SQLite` file inside a temporary directory, so
//! tests are isolated and need no external services.

// Integration tests use expect/unwrap extensively for clarity -- panicking
// on failure is the correct behavior in test code.
#![allow(
    clippy::expect_used,
    clippy::unwrap_used,
    clippy::float_cmp,
    clippy::indexing_slicing,
    clippy::missing_panics_doc
)]

use std::time::Duration;

use damping_db::{
    DampingTestStore, FormulaResultStore, MeasurementStore, SensorStore, SqliteConfig, SqliteDb,
    VehicleStore,
};
use damping_types::{
    NewDampingTest, NewFormulaResult, NewMeasurement, NewSensor, NewVehicle, SensorId, TestId,
    VehicleId,
};
use tempfile::TempDir;

// =============================================================================
// Helpers
// =============================================================================

async fn open_db() -> (TempDir, SqliteDb) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let url = format!("sqlite://{}", dir.path().join("rig.db").display());
    let db = SqliteDb::connect_url(&url)
        .await
        .expect("Failed to open SQLite store");
    (dir, db)
}

fn corolla() -> NewVehicle {
    NewVehicle {
        brand: String::from("Toyota"),
        model: String::from("Corolla"),
        year: 2020,
        mass_kg: 1200.5,
        spring_stiffness_n_m: 25_000.0,
        plate: None,
    }
}

async fn seed_sensor(db: &SqliteDb) -> SensorId {
    let vehicle_id = VehicleStore::new(db.pool()).insert(&corolla()).await.unwrap();
    SensorStore::new(db.pool())
        .insert(&NewSensor {
            sensor_type: String::from("accelerometer"),
            location: String::from("front-left wheel"),
            vehicle_id,
        })
        .await
        .unwrap()
}

fn sample(sensor_id: SensorId, frequency: f64) -> NewMeasurement {
    NewMeasurement {
        sensor_id,
        chassis_vibration_amplitude: Some(0.8),
        wheel_vibration_amplitude: None,
        frequency_hz: Some(frequency),
        acceleration_m_s2: None,
        temperature_c: Some(21.5),
    }
}

// =============================================================================
// Schema
// =============================================================================

#[tokio::test]
async fn schema_creation_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("rig.db").display());

    let first = SqliteDb::connect_url(&url).await.unwrap();
    VehicleStore::new(first.pool()).insert(&corolla()).await.unwrap();
    first.ensure_schema().await.unwrap();
    first.close().await;

    // Reopening runs CREATE TABLE IF NOT EXISTS again and keeps the data.
    let second = SqliteDb::connect_url(&url).await.unwrap();
    assert_eq!(VehicleStore::new(second.pool()).count().await.unwrap(), 1);
}

#[tokio::test]
async fn store_file_is_created_when_absent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fresh.db");
    assert!(!path.exists());

    let _db = SqliteDb::connect_url(&format!("sqlite://{}", path.display()))
        .await
        .unwrap();
    assert!(path.exists());
}

#[tokio::test]
async fn invalid_url_is_a_config_error() {
    let result = SqliteDb::connect_url("postgres://not-sqlite").await;
    assert!(matches!(result, Err(damping_db::DbError::Config(_))));
}

// =============================================================================
// Vehicles & sensors
// =============================================================================

#[tokio::test]
async fn vehicle_round_trip_keeps_values_and_null_plate() {
    let (_dir, db) = open_db().await;
    let store = VehicleStore::new(db.pool());

    let id = store.insert(&corolla()).await.unwrap();
    assert!(id.into_inner() > 0);

    let vehicles = store.list().await.unwrap();
    assert_eq!(vehicles.len(), 1);
    let v = &vehicles[0];
    assert_eq!(v.id, id);
    assert_eq!(v.brand, "Toyota");
    assert_eq!(v.year, 2020);
    assert_eq!(v.mass_kg, 1200.5);
    assert_eq!(v.spring_stiffness_n_m, 25_000.0);
    assert!(v.plate.is_none());
}

#[tokio::test]
async fn vehicles_list_in_insertion_order() {
    let (_dir, db) = open_db().await;
    let store = VehicleStore::new(db.pool());

    let first = store.insert(&corolla()).await.unwrap();
    let mut civic = corolla();
    civic.brand = String::from("Honda");
    civic.model = String::from("Civic");
    civic.plate = Some(String::from("ÑAB-123"));
    let second = store.insert(&civic).await.unwrap();

    let ids: Vec<VehicleId> = store.list().await.unwrap().iter().map(|v| v.id).collect();
    assert_eq!(ids, vec![first, second]);
    assert_eq!(store.list().await.unwrap()[1].plate.as_deref(), Some("ÑAB-123"));
}

#[tokio::test]
async fn sensor_with_unknown_vehicle_is_rejected_without_a_row() {
    let (_dir, db) = open_db().await;
    let store = SensorStore::new(db.pool());

    let err = store
        .insert(&NewSensor {
            sensor_type: String::from("displacement"),
            location: String::from("rear axle"),
            vehicle_id: VehicleId(999),
        })
        .await
        .unwrap_err();

    assert!(err.is_constraint_violation(), "unexpected error: {err}");
    assert_eq!(store.count().await.unwrap(), 0);
}

// =============================================================================
// Measurements
// =============================================================================

#[tokio::test]
async fn measurement_with_unknown_sensor_is_rejected() {
    let (_dir, db) = open_db().await;
    let store = MeasurementStore::new(db.pool());

    let result = store.insert(&sample(SensorId(42), 3.0)).await;
    assert!(result.is_err());
    assert_eq!(store.count().await.unwrap(), 0);
}

#[tokio::test]
async fn measurements_are_listed_newest_first() {
    let (_dir, db) = open_db().await;
    let sensor_id = seed_sensor(&db).await;
    let store = MeasurementStore::new(db.pool());

    let mut ids = Vec::new();
    for frequency in [1.0, 2.0, 3.0] {
        ids.push(store.insert(&sample(sensor_id, frequency)).await.unwrap());
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let listed = store.list().await.unwrap();
    let listed_ids: Vec<_> = listed.iter().map(|m| m.id).collect();
    ids.reverse();
    assert_eq!(listed_ids, ids);

    let stamps: Vec<_> = listed.iter().map(|m| m.timestamp.unwrap()).collect();
    assert!(stamps[0] > stamps[1] && stamps[1] > stamps[2]);
    assert_eq!(listed[0].frequency_hz, Some(3.0));
    assert!(listed[0].wheel_vibration_amplitude.is_none());
}

// =============================================================================
// Damping tests & formula results
// =============================================================================

#[tokio::test]
async fn damping_test_gets_a_test_date() {
    let (_dir, db) = open_db().await;
    let vehicle_id = VehicleStore::new(db.pool()).insert(&corolla()).await.unwrap();
    let store = DampingTestStore::new(db.pool());

    let id = store
        .insert(&NewDampingTest {
            vehicle_id,
            damping_coefficient: Some(1500.0),
            transmissibility: None,
            natural_frequency_hz: Some(1.45),
            efficiency_percent: Some(72.0),
        })
        .await
        .unwrap();

    let tests = store.list().await.unwrap();
    assert_eq!(tests.len(), 1);
    assert_eq!(tests[0].id, id);
    assert_eq!(tests[0].vehicle_id, vehicle_id);
    assert!(tests[0].transmissibility.is_none());
    assert!(tests[0].test_date.is_some());
}

#[tokio::test]
async fn formula_result_round_trip_and_fk_check() {
    let (_dir, db) = open_db().await;
    let vehicle_id = VehicleStore::new(db.pool()).insert(&corolla()).await.unwrap();
    let test_id = DampingTestStore::new(db.pool())
        .insert(&NewDampingTest {
            vehicle_id,
            damping_coefficient: None,
            transmissibility: None,
            natural_frequency_hz: None,
            efficiency_percent: None,
        })
        .await
        .unwrap();

    let store = FormulaResultStore::new(db.pool());
    let mut result = NewFormulaResult {
        test_id,
        energy_before_j: 120.0,
        energy_after_j: 45.5,
        theoretical_frequency_hz: 1.45,
        measured_frequency_hz: 1.52,
        frequency_deviation_percent: 4.83,
    };
    store.insert(&result).await.unwrap();

    result.test_id = TestId(test_id.into_inner() + 100);
    assert!(store.insert(&result).await.is_err());

    let rows = store.list().await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].energy_after_j, 45.5);
    assert_eq!(rows[0].frequency_deviation_percent, 4.83);
}

// =============================================================================
// Concurrency
// =============================================================================

#[tokio::test]
async fn concurrent_inserts_get_distinct_ids() {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}", dir.path().join("rig.db").display());
    let db = SqliteDb::connect(&SqliteConfig::new(&url).with_max_connections(4))
        .await
        .unwrap();

    let mut handles = Vec::new();
    for _ in 0..8 {
        let db = db.clone();
        handles.push(tokio::spawn(async move {
            VehicleStore::new(db.pool()).insert(&corolla()).await
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().unwrap());
    }
    ids.sort();
    ids.dedup();

    assert_eq!(ids.len(), 8);
    assert_eq!(VehicleStore::new(db.pool()).count().await.unwrap(), 8);
}
