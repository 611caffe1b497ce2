//! REST API endpoint handlers.
//!
//! Every entity gets exactly two handlers: a list that returns all rows
//! as a JSON array, and a create that persists one row from a typed body
//! and answers `201 {"id": <new id>}`.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/vehicles` | List vehicles |
//! | `POST` | `/vehicles` | Create a vehicle |
//! | `GET` | `/sensors` | List sensors |
//! | `POST` | `/sensors` | Create a sensor |
//! | `GET` | `/measurements` | List measurements, newest first |
//! | `POST` | `/measurements` | Record a measurement |
//! | `GET` | `/tests` | List damping tests |
//! | `POST` | `/tests` | Record a damping test |
//! | `GET` | `/results` | List formula results |
//! | `POST` | `/results` | Record a formula result |

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use damping_db::{
    DampingTestStore, FormulaResultStore, MeasurementStore, SensorStore, VehicleStore,
};
use damping_types::{
    Created, DampingTest, FormulaResult, Measurement, NewDampingTest, NewFormulaResult,
    NewMeasurement, NewSensor, NewVehicle, Sensor, Vehicle,
};

use crate::error::ApiError;
use crate::extract::Payload;
use crate::state::AppState;

/// Result of every create handler.
type CreatedResponse = Result<(StatusCode, Json<Created>), ApiError>;

const fn created(id: i64) -> (StatusCode, Json<Created>) {
    (StatusCode::CREATED, Json(Created::new(id)))
}

// ---------------------------------------------------------------------------
// /vehicles
// ---------------------------------------------------------------------------

/// List all vehicles.
pub async fn list_vehicles(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Vehicle>>, ApiError> {
    let vehicles = VehicleStore::new(state.db.pool())
        .list()
        .await
        .map_err(|e| ApiError::list_failed("vehicles", &e))?;
    Ok(Json(vehicles))
}

/// Create a vehicle. `plate` is optional.
pub async fn create_vehicle(
    State(state): State<Arc<AppState>>,
    Payload(body): Payload<NewVehicle>,
) -> CreatedResponse {
    let id = VehicleStore::new(state.db.pool())
        .insert(&body)
        .await
        .map_err(|e| ApiError::create_failed("vehicle", &e))?;
    Ok(created(id.into_inner()))
}

// ---------------------------------------------------------------------------
// /sensors
// ---------------------------------------------------------------------------

/// List all sensors.
pub async fn list_sensors(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Sensor>>, ApiError> {
    let sensors = SensorStore::new(state.db.pool())
        .list()
        .await
        .map_err(|e| ApiError::list_failed("sensors", &e))?;
    Ok(Json(sensors))
}

/// Create a sensor on an existing vehicle.
pub async fn create_sensor(
    State(state): State<Arc<AppState>>,
    Payload(body): Payload<NewSensor>,
) -> CreatedResponse {
    let id = SensorStore::new(state.db.pool())
        .insert(&body)
        .await
        .map_err(|e| ApiError::create_failed("sensor", &e))?;
    Ok(created(id.into_inner()))
}

// ---------------------------------------------------------------------------
// /measurements
// ---------------------------------------------------------------------------

/// List all measurements, most recent first.
pub async fn list_measurements(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Measurement>>, ApiError> {
    let measurements = MeasurementStore::new(state.db.pool())
        .list()
        .await
        .map_err(|e| ApiError::list_failed("measurements", &e))?;
    Ok(Json(measurements))
}

/// Record a measurement. Only `sensor_id` is required.
pub async fn create_measurement(
    State(state): State<Arc<AppState>>,
    Payload(body): Payload<NewMeasurement>,
) -> CreatedResponse {
    let id = MeasurementStore::new(state.db.pool())
        .insert(&body)
        .await
        .map_err(|e| ApiError::create_failed("measurement", &e))?;
    Ok(created(id.into_inner()))
}

// ---------------------------------------------------------------------------
// /tests
// ---------------------------------------------------------------------------

/// List all damping tests.
pub async fn list_tests(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<DampingTest>>, ApiError> {
    let tests = DampingTestStore::new(state.db.pool())
        .list()
        .await
        .map_err(|e| ApiError::list_failed("damping tests", &e))?;
    Ok(Json(tests))
}

/// Record a damping test. Only `vehicle_id` is required.
pub async fn create_test(
    State(state): State<Arc<AppState>>,
    Payload(body): Payload<NewDampingTest>,
) -> CreatedResponse {
    let id = DampingTestStore::new(state.db.pool())
        .insert(&body)
        .await
        .map_err(|e| ApiError::create_failed("damping test", &e))?;
    Ok(created(id.into_inner()))
}

// ---------------------------------------------------------------------------
// /results
// ---------------------------------------------------------------------------

/// List all formula results.
pub async fn list_results(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<FormulaResult>>, ApiError> {
    let results = FormulaResultStore::new(state.db.pool())
        .list()
        .await
        .map_err(|e| ApiError::list_failed("formula results", &e))?;
    Ok(Json(results))
}

/// Record a formula result. Every field is required.
pub async fn create_result(
    State(state): State<Arc<AppState>>,
    Payload(body): Payload<NewFormulaResult>,
) -> CreatedResponse {
    let id = FormulaResultStore::new(state.db.pool())
        .insert(&body)
        .await
        .map_err(|e| ApiError::create_failed("formula result", &e))?;
    Ok(created(id.into_inner()))
}
