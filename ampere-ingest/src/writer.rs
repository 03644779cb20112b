//! Dual-sink writer: raw first, prediction second, failures isolated.

use ampere_core::constants::MAX_RAW_WRITE_ATTEMPTS;
use ampere_core::errors::SinkError;
use ampere_core::models::{PredictionDocument, RawDocument, TelemetryRecord};
use ampere_core::traits::{IPredictionStore, IRawStore};

/// What happened to one event.
#[derive(Debug, Clone)]
pub struct EventOutcome {
    /// Identifier assigned to the persisted raw document.
    pub raw_id: String,
    /// Identifier of the persisted prediction document, when one was
    /// produced and its write succeeded.
    pub prediction_id: Option<String>,
    /// The prediction write's failure, if any. The raw document is durable
    /// regardless.
    pub prediction_error: Option<SinkError>,
}

impl EventOutcome {
    fn raw_only(raw_id: String) -> Self {
        Self {
            raw_id,
            prediction_id: None,
            prediction_error: None,
        }
    }
}

/// Writes one event's raw and predicted forms to two independent stores.
///
/// The raw write is the durability floor: it happens first, gets one
/// retry with the same already-assigned document (the raw store upserts
/// by id, so the retry cannot double-write), and its failure is the only
/// thing that fails the event. A prediction write failure is recorded in
/// the outcome and goes no further.
pub struct DualSinkWriter<'a> {
    raw: &'a dyn IRawStore,
    predictions: &'a dyn IPredictionStore,
}

impl<'a> DualSinkWriter<'a> {
    pub fn new(raw: &'a dyn IRawStore, predictions: &'a dyn IPredictionStore) -> Self {
        Self { raw, predictions }
    }

    pub fn write(
        &self,
        record: TelemetryRecord,
        prediction: Option<f64>,
    ) -> Result<EventOutcome, SinkError> {
        let raw_doc = RawDocument::assign(record);
        self.write_raw(&raw_doc)?;

        let Some(value) = prediction else {
            tracing::debug!(raw_id = %raw_doc.id, "no prediction for event, raw document persisted");
            return Ok(EventOutcome::raw_only(raw_doc.id));
        };

        let prediction_doc = PredictionDocument::assign(raw_doc.record.clone(), value);
        match self.predictions.upsert(&prediction_doc) {
            Ok(()) => {
                tracing::debug!(
                    raw_id = %raw_doc.id,
                    prediction_id = %prediction_doc.id,
                    predicted_kwh = value,
                    "event persisted to both sinks"
                );
                Ok(EventOutcome {
                    raw_id: raw_doc.id,
                    prediction_id: Some(prediction_doc.id),
                    prediction_error: None,
                })
            }
            Err(err) => {
                // Raw durability is unaffected; report and move on.
                tracing::error!(raw_id = %raw_doc.id, error = %err, "prediction write failed");
                Ok(EventOutcome {
                    raw_id: raw_doc.id,
                    prediction_id: None,
                    prediction_error: Some(err),
                })
            }
        }
    }

    fn write_raw(&self, doc: &RawDocument) -> Result<(), SinkError> {
        let mut last = None;
        for attempt in 1..=MAX_RAW_WRITE_ATTEMPTS {
            match self.raw.upsert(doc) {
                Ok(()) => return Ok(()),
                Err(err) => {
                    tracing::warn!(
                        id = %doc.id,
                        attempt,
                        error = %err,
                        "raw write attempt failed"
                    );
                    last = Some(err);
                }
            }
        }
        // Both attempts failed: fatal for this event, not for the batch.
        Err(last.unwrap_or_else(|| SinkError::WriteFailed {
            id: doc.id.clone(),
            reason: "no write attempt was made".into(),
        }))
    }
}
