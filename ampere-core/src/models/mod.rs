//! Wire documents exchanged with the raw and prediction stores.

mod prediction_document;
mod raw_document;
mod telemetry;

pub use prediction_document::PredictionDocument;
pub use raw_document::RawDocument;
pub use telemetry::TelemetryRecord;

/// Generate a fresh document identifier.
///
/// Every persisted document gets its own id at write time; identity is
/// never shared between a raw document and the predictions derived from it.
pub fn new_document_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
