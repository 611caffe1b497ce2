//! Request bodies accepted by the create endpoints.
//!
//! Required fields are plain values and optional fields are [`Option`], so
//! a body missing a required field fails to deserialize and is rejected
//! before anything reaches the store. Optional fields omitted from the
//! body become `None` and are persisted as `NULL`.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::{SensorId, TestId, VehicleId};

/// Body of `POST /vehicles`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NewVehicle {
    /// Manufacturer.
    pub brand: String,
    /// Model name.
    pub model: String,
    /// Model year.
    pub year: i32,
    /// Sprung mass in kilograms.
    pub mass_kg: f64,
    /// Spring stiffness in newtons per metre.
    #[serde(rename = "spring_stiffness_N_m")]
    pub spring_stiffness_n_m: f64,
    /// Licence plate.
    #[serde(default)]
    pub plate: Option<String>,
}

/// Body of `POST /sensors`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NewSensor {
    /// Sensor kind.
    #[serde(rename = "type")]
    pub sensor_type: String,
    /// Mounting point on the vehicle.
    pub location: String,
    /// Vehicle the sensor is attached to.
    pub vehicle_id: VehicleId,
}

/// Body of `POST /measurements`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NewMeasurement {
    /// Sensor that produced the sample.
    pub sensor_id: SensorId,
    /// Vibration amplitude at the chassis.
    #[serde(default)]
    pub chassis_vibration_amplitude: Option<f64>,
    /// Vibration amplitude at the wheel.
    #[serde(default)]
    pub wheel_vibration_amplitude: Option<f64>,
    /// Dominant frequency in hertz.
    #[serde(default, rename = "frequency_Hz")]
    pub frequency_hz: Option<f64>,
    /// Acceleration in metres per second squared.
    #[serde(default)]
    pub acceleration_m_s2: Option<f64>,
    /// Temperature in degrees Celsius.
    #[serde(default, rename = "temperature_C")]
    pub temperature_c: Option<f64>,
}

/// Body of `POST /tests`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NewDampingTest {
    /// Vehicle under test.
    pub vehicle_id: VehicleId,
    /// Damping coefficient.
    #[serde(default)]
    pub damping_coefficient: Option<f64>,
    /// Transmissibility ratio.
    #[serde(default)]
    pub transmissibility: Option<f64>,
    /// Natural frequency in hertz.
    #[serde(default, rename = "natural_frequency_Hz")]
    pub natural_frequency_hz: Option<f64>,
    /// Damping efficiency as a percentage.
    #[serde(default)]
    pub efficiency_percent: Option<f64>,
}

/// Body of `POST /results`. Every field is required; partial results are
/// rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct NewFormulaResult {
    /// Damping test the result belongs to.
    pub test_id: TestId,
    /// Energy before damping, in joules.
    #[serde(rename = "energy_before_J")]
    pub energy_before_j: f64,
    /// Energy after damping, in joules.
    #[serde(rename = "energy_after_J")]
    pub energy_after_j: f64,
    /// Theoretical natural frequency in hertz.
    #[serde(rename = "theoretical_frequency_Hz")]
    pub theoretical_frequency_hz: f64,
    /// Measured natural frequency in hertz.
    #[serde(rename = "measured_frequency_Hz")]
    pub measured_frequency_hz: f64,
    /// Frequency deviation in percent.
    pub frequency_deviation_percent: f64,
}

/// Response body of every create endpoint: `{"id": <new id>}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Created {
    /// Identifier assigned by the store.
    #[ts(type = "number")]
    pub id: i64,
}

impl Created {
    /// Wrap a freshly assigned row id.
    pub const fn new(id: i64) -> Self {
        Self { id }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn optional_vehicle_plate_defaults_to_none() {
        let body = r#"{"brand":"Toyota","model":"Corolla","year":2020,"mass_kg":1200.5,"spring_stiffness_N_m":25000.0}"#;
        let vehicle: NewVehicle = serde_json::from_str(body).unwrap();
        assert_eq!(vehicle.plate, None);
        assert_eq!(vehicle.year, 2020);
    }

    #[test]
    fn missing_required_field_is_named_in_error() {
        let body = r#"{"model":"Corolla","year":2020,"mass_kg":1200.5,"spring_stiffness_N_m":25000.0}"#;
        let err = serde_json::from_str::<NewVehicle>(body).unwrap_err().to_string();
        assert!(err.contains("missing field `brand`"), "got: {err}");
    }

    #[test]
    fn partial_formula_result_is_rejected() {
        let body = r#"{"test_id":1,"energy_before_J":10.0,"energy_after_J":4.0,"theoretical_frequency_Hz":1.2,"measured_frequency_Hz":1.25}"#;
        let err = serde_json::from_str::<NewFormulaResult>(body).unwrap_err().to_string();
        assert!(err.contains("frequency_deviation_percent"), "got: {err}");
    }

    #[test]
    fn measurement_accepts_only_sensor_id() {
        let measurement: NewMeasurement = serde_json::from_str(r#"{"sensor_id":4}"#).unwrap();
        assert_eq!(measurement.sensor_id, SensorId(4));
        assert!(measurement.frequency_hz.is_none());
        assert!(measurement.temperature_c.is_none());
    }

    #[test]
    fn created_serializes_as_id_object() {
        let json = serde_json::to_string(&Created::new(12)).unwrap();
        assert_eq!(json, r#"{"id":12}"#);
    }
}
