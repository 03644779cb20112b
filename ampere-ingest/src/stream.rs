//! The streaming path: decode one event, predict, dual-sink write.

use ampere_core::errors::AmpereError;
use ampere_core::models::TelemetryRecord;
use ampere_core::traits::{IPredictionStore, IRawStore};
use ampere_predict::{predict, ModelCache, ModelResolver};

use crate::writer::{DualSinkWriter, EventOutcome};

/// Processes inbound events one at a time, sequentially.
///
/// Model resolution runs per event but is satisfied from the shared cache
/// after the first success, so a long-lived pipeline fetches at most once.
pub struct StreamPipeline<'a> {
    writer: DualSinkWriter<'a>,
    resolver: &'a ModelResolver,
    cache: &'a ModelCache,
}

impl<'a> StreamPipeline<'a> {
    pub fn new(
        raw: &'a dyn IRawStore,
        predictions: &'a dyn IPredictionStore,
        resolver: &'a ModelResolver,
        cache: &'a ModelCache,
    ) -> Self {
        Self {
            writer: DualSinkWriter::new(raw, predictions),
            resolver,
            cache,
        }
    }

    /// Process one raw event payload (a JSON object).
    ///
    /// Every failure is scoped to this event: the caller keeps feeding
    /// subsequent events regardless of the returned value.
    pub fn process_event(&self, payload: &[u8]) -> Result<EventOutcome, AmpereError> {
        let record: TelemetryRecord =
            serde_json::from_slice(payload).map_err(|e| AmpereError::EventDecode {
                reason: e.to_string(),
            })?;
        self.process_record(record)
    }

    /// Process one already-decoded record.
    pub fn process_record(&self, record: TelemetryRecord) -> Result<EventOutcome, AmpereError> {
        // A None here (no model, incomplete record, invocation failure) is
        // a skip: the raw write below happens unconditionally.
        let prediction = predict(&record, self.resolver.resolve(self.cache).as_deref());
        let outcome = self.writer.write(record, prediction)?;
        Ok(outcome)
    }
}
