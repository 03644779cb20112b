use serde::{Deserialize, Serialize};

use super::{new_document_id, TelemetryRecord};

/// A prediction as persisted in the prediction store: a copy of the source
/// session fields, the predicted energy, and its own fresh identifier.
///
/// The identifier is never the raw document's. There is no foreign-key link
/// back to the source record; deleting a prediction leaves the raw document
/// untouched and vice versa.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionDocument {
    pub id: String,

    #[serde(flatten)]
    pub record: TelemetryRecord,

    #[serde(rename = "predicted_kWh")]
    pub predicted_kwh: f64,
}

impl PredictionDocument {
    /// Build a prediction document from source fields, assigning a fresh id.
    pub fn assign(record: TelemetryRecord, predicted_kwh: f64) -> Self {
        Self {
            id: new_document_id(),
            record,
            predicted_kwh,
        }
    }

    /// Partition key of the prediction store.
    pub fn partition_key(&self) -> Option<&str> {
        self.record.day_indicator.as_deref()
    }
}
