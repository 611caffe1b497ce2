//! Shared type definitions for the suspension-damping test rig.
//!
//! This crate is the single source of truth for the records the store
//! persists and the payloads the API accepts. Types flow downstream to
//! `TypeScript` via `ts-rs` for the rig dashboard.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe wrappers for the store-assigned row ids
//! - [`records`] -- The five persisted entities as listed by the API
//! - [`payloads`] -- Create request bodies and the `{"id"}` response

pub mod ids;
pub mod payloads;
pub mod records;

// Re-export all public types at crate root for convenience.
pub use ids::{MeasurementId, ResultId, SensorId, TestId, VehicleId};
pub use payloads::{
    Created, NewDampingTest, NewFormulaResult, NewMeasurement, NewSensor, NewVehicle,
};
pub use records::{DampingTest, FormulaResult, Measurement, Sensor, Vehicle};

#[cfg(test)]
mod tests {
    //! `TypeScript` binding generation.

    #[test]
    fn export_bindings() {
        // ts-rs generates TypeScript bindings when types with
        // #[ts(export)] are used. The files are written to the
        // `bindings/` directory relative to the crate root.
        use ts_rs::TS;

        // IDs
        let _ = crate::ids::VehicleId::export_all();
        let _ = crate::ids::SensorId::export_all();
        let _ = crate::ids::MeasurementId::export_all();
        let _ = crate::ids::TestId::export_all();
        let _ = crate::ids::ResultId::export_all();

        // Records
        let _ = crate::records::Vehicle::export_all();
        let _ = crate::records::Sensor::export_all();
        let _ = crate::records::Measurement::export_all();
        let _ = crate::records::DampingTest::export_all();
        let _ = crate::records::FormulaResult::export_all();

        // Payloads
        let _ = crate::payloads::NewVehicle::export_all();
        let _ = crate::payloads::NewSensor::export_all();
        let _ = crate::payloads::NewMeasurement::export_all();
        let _ = crate::payloads::NewDampingTest::export_all();
        let _ = crate::payloads::NewFormulaResult::export_all();
        let _ = crate::payloads::Created::export_all();
    }
}
