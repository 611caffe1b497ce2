//! Persisted entity records as returned by the list endpoints.
//!
//! Field names on the wire are the column names verbatim, unit suffixes
//! included (`frequency_Hz`, `spring_stiffness_N_m`, ...). Rust fields use
//! snake case and carry a serde rename where the two differ.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::{MeasurementId, ResultId, SensorId, TestId, VehicleId};

// ---------------------------------------------------------------------------
// Vehicle
// ---------------------------------------------------------------------------

/// A vehicle mounted on the rig. Owns sensors and damping tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Vehicle {
    /// Store-assigned identifier.
    pub id: VehicleId,
    /// Manufacturer.
    pub brand: String,
    /// Model name.
    pub model: String,
    /// Model year.
    pub year: i32,
    /// Sprung mass in kilograms.
    pub mass_kg: f64,
    /// Suspension spring stiffness in newtons per metre.
    #[serde(rename = "spring_stiffness_N_m")]
    pub spring_stiffness_n_m: f64,
    /// Licence plate, if recorded.
    pub plate: Option<String>,
}

// ---------------------------------------------------------------------------
// Sensor
// ---------------------------------------------------------------------------

/// A sensor attached to one vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Sensor {
    /// Store-assigned identifier.
    pub id: SensorId,
    /// Sensor kind (accelerometer, displacement, thermocouple, ...).
    #[serde(rename = "type")]
    pub sensor_type: String,
    /// Mounting point on the vehicle.
    pub location: String,
    /// Owning vehicle.
    pub vehicle_id: VehicleId,
}

// ---------------------------------------------------------------------------
// Measurement
// ---------------------------------------------------------------------------

/// One raw sample captured by a sensor.
///
/// Every measured quantity is optional; a sensor only reports what it can
/// observe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Measurement {
    /// Store-assigned identifier.
    pub id: MeasurementId,
    /// Sensor that produced the sample.
    pub sensor_id: SensorId,
    /// Vibration amplitude measured at the chassis.
    pub chassis_vibration_amplitude: Option<f64>,
    /// Vibration amplitude measured at the wheel.
    pub wheel_vibration_amplitude: Option<f64>,
    /// Dominant vibration frequency in hertz.
    #[serde(rename = "frequency_Hz")]
    pub frequency_hz: Option<f64>,
    /// Acceleration in metres per second squared.
    pub acceleration_m_s2: Option<f64>,
    /// Temperature in degrees Celsius.
    #[serde(rename = "temperature_C")]
    pub temperature_c: Option<f64>,
    /// When the store recorded the sample.
    pub timestamp: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// DampingTest
// ---------------------------------------------------------------------------

/// A damping test run performed on a vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct DampingTest {
    /// Store-assigned identifier.
    pub id: TestId,
    /// Vehicle under test.
    pub vehicle_id: VehicleId,
    /// Damping coefficient.
    pub damping_coefficient: Option<f64>,
    /// Transmissibility ratio.
    pub transmissibility: Option<f64>,
    /// Natural frequency in hertz.
    #[serde(rename = "natural_frequency_Hz")]
    pub natural_frequency_hz: Option<f64>,
    /// Damping efficiency as a percentage.
    pub efficiency_percent: Option<f64>,
    /// When the store recorded the test.
    pub test_date: Option<DateTime<Utc>>,
}

// ---------------------------------------------------------------------------
// FormulaResult
// ---------------------------------------------------------------------------

/// Derived values computed client-side for a damping test.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct FormulaResult {
    /// Store-assigned identifier.
    pub id: ResultId,
    /// Damping test the result belongs to.
    pub test_id: TestId,
    /// Oscillation energy before damping, in joules.
    #[serde(rename = "energy_before_J")]
    pub energy_before_j: f64,
    /// Oscillation energy after damping, in joules.
    #[serde(rename = "energy_after_J")]
    pub energy_after_j: f64,
    /// Theoretical natural frequency in hertz.
    #[serde(rename = "theoretical_frequency_Hz")]
    pub theoretical_frequency_hz: f64,
    /// Measured natural frequency in hertz.
    #[serde(rename = "measured_frequency_Hz")]
    pub measured_frequency_hz: f64,
    /// Deviation between measured and theoretical frequency, in percent.
    pub frequency_deviation_percent: f64,
}
