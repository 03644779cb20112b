use serde::{Deserialize, Serialize};

use super::{new_document_id, TelemetryRecord};

/// A telemetry record as persisted in the raw store: the session fields
/// plus the store's primary key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawDocument {
    pub id: String,

    #[serde(flatten)]
    pub record: TelemetryRecord,
}

impl RawDocument {
    /// Assign a fresh identifier to an incoming record.
    pub fn assign(record: TelemetryRecord) -> Self {
        Self {
            id: new_document_id(),
            record,
        }
    }
}
