//! Type-safe identifier wrappers around the store's integer row ids.
//!
//! Every table uses an `INTEGER PRIMARY KEY AUTOINCREMENT` surrogate key
//! assigned by `SQLite` on insert. Wrapping each one in its own newtype keeps
//! a sensor id from being passed where a vehicle id is expected. On the wire
//! they serialize as plain JSON integers.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Generates a newtype wrapper around [`i64`] with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
        #[ts(export, export_to = "bindings/")]
        pub struct $name(#[ts(type = "number")] pub i64);

        impl $name {
            /// Return the inner row id.
            pub const fn into_inner(self) -> i64 {
                self.0
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Row id of a vehicle mounted on the rig.
    VehicleId
}

define_id! {
    /// Row id of a sensor attached to a vehicle.
    SensorId
}

define_id! {
    /// Row id of a single raw sensor measurement.
    MeasurementId
}

define_id! {
    /// Row id of a damping test run.
    TestId
}

define_id! {
    /// Row id of a formula result derived from a damping test.
    ResultId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_serializes_as_bare_integer() {
        let json = serde_json::to_string(&VehicleId(42)).ok();
        assert_eq!(json.as_deref(), Some("42"));
    }

    #[test]
    fn id_deserializes_from_integer() {
        let id: Result<SensorId, _> = serde_json::from_str("7");
        assert_eq!(id.ok(), Some(SensorId(7)));
    }

    #[test]
    fn id_display_matches_inner() {
        let id = TestId::from(19);
        assert_eq!(id.to_string(), "19");
        assert_eq!(i64::from(id), 19);
    }
}
