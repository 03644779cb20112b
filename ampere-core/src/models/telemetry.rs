use serde::{Deserialize, Serialize};

/// One charging session as received from the event source.
///
/// Fields are Option-typed because documents read back from the raw store
/// may be partial; the streaming path tolerates missing fields (prediction
/// is skipped), the batch path drops such rows. Immutable once read.
///
/// Serde renames preserve the original wire field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetryRecord {
    /// Session start, as a decimal hour of day.
    #[serde(
        rename = "connectionTime_decimal",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub connection_time_decimal: Option<f64>,

    /// Charging duration in hours.
    #[serde(
        rename = "chargingDuration",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub charging_duration_hours: Option<f64>,

    /// Energy delivered over the session, in kWh.
    #[serde(
        rename = "kWhDelivered",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub kwh_delivered: Option<f64>,

    /// Day-of-week indicator. Partition key of the prediction store.
    #[serde(
        rename = "dayIndicator",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub day_indicator: Option<String>,
}

impl TelemetryRecord {
    /// Build a record with every field present.
    pub fn new(
        connection_time_decimal: f64,
        charging_duration_hours: f64,
        kwh_delivered: f64,
        day_indicator: impl Into<String>,
    ) -> Self {
        Self {
            connection_time_decimal: Some(connection_time_decimal),
            charging_duration_hours: Some(charging_duration_hours),
            kwh_delivered: Some(kwh_delivered),
            day_indicator: Some(day_indicator.into()),
        }
    }

    /// True when all four source fields are present and the numeric ones
    /// are finite. A non-finite number is treated the same as a missing
    /// field: the batch path drops the row, the streaming path skips the
    /// prediction.
    pub fn is_complete(&self) -> bool {
        matches!(self.connection_time_decimal, Some(v) if v.is_finite())
            && matches!(self.charging_duration_hours, Some(v) if v.is_finite())
            && matches!(self.kwh_delivered, Some(v) if v.is_finite())
            && self.day_indicator.is_some()
    }
}
