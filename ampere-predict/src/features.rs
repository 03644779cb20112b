//! Pure feature derivation. No side effects, no I/O, never fails.

use ampere_core::constants::FEATURE_NAMES;
use ampere_core::models::TelemetryRecord;

/// Features computed from a telemetry record.
///
/// Each is None when its inputs are missing, and `avg_power` is also None
/// on a zero-duration session — a zero duration is a normal skip
/// condition, never a division.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DerivedFeatures {
    /// kWh delivered / charging duration.
    pub avg_power: Option<f64>,
    /// Connection start + charging duration, decimal hours.
    pub connection_end_time: Option<f64>,
}

/// Derive features from a record. Total: incomplete input yields None
/// fields, not an error. Non-finite inputs count as missing.
pub fn derive(record: &TelemetryRecord) -> DerivedFeatures {
    let start = record.connection_time_decimal.filter(|v| v.is_finite());
    let duration = record.charging_duration_hours.filter(|v| v.is_finite());
    let kwh = record.kwh_delivered.filter(|v| v.is_finite());

    let avg_power = match (kwh, duration) {
        (Some(k), Some(d)) if d != 0.0 => Some(k / d),
        _ => None,
    };
    let connection_end_time = match (start, duration) {
        (Some(s), Some(d)) => Some(s + d),
        _ => None,
    };

    DerivedFeatures {
        avg_power,
        connection_end_time,
    }
}

/// The exact ordered model input:
/// `[connectionTime_decimal, chargingDuration, avg_power, connection_end_time]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector(pub [f64; 4]);

impl FeatureVector {
    /// Assemble the vector, or report the names of the missing features.
    /// Feature-incompleteness is the caller's skip condition, not an error.
    pub fn try_from_parts(
        record: &TelemetryRecord,
        derived: &DerivedFeatures,
    ) -> Result<Self, Vec<&'static str>> {
        let values = [
            record.connection_time_decimal.filter(|v| v.is_finite()),
            record.charging_duration_hours.filter(|v| v.is_finite()),
            derived.avg_power,
            derived.connection_end_time,
        ];

        let missing: Vec<&'static str> = values
            .iter()
            .zip(FEATURE_NAMES)
            .filter_map(|(v, name)| v.is_none().then_some(name))
            .collect();
        if !missing.is_empty() {
            return Err(missing);
        }

        // All Some by the check above.
        Ok(Self(values.map(|v| v.unwrap_or_default())))
    }
}
