//! The predictor: derived features + resolved model → predicted kWh.

use ampere_core::models::TelemetryRecord;

use crate::features::{self, FeatureVector};
use crate::model::ModelArtifact;

/// Predict delivered kWh for one session.
///
/// Returns None — never an error — when no model is available, when the
/// record is not feature-complete (the missing features are logged), or
/// when the model invocation itself fails. Model-internal errors stop
/// here; the raw record's durability never depends on this function.
pub fn predict(record: &TelemetryRecord, model: Option<&ModelArtifact>) -> Option<f64> {
    let Some(model) = model else {
        tracing::warn!("no model available, skipping prediction");
        return None;
    };

    let derived = features::derive(record);
    let vector = match FeatureVector::try_from_parts(record, &derived) {
        Ok(vector) => vector,
        Err(missing) => {
            tracing::warn!(missing = ?missing, "record not feature-complete, skipping prediction");
            return None;
        }
    };

    match model.predict(&vector) {
        Ok(value) => {
            tracing::debug!(predicted_kwh = value, "prediction made");
            Some(value)
        }
        Err(err) => {
            tracing::error!(error = %err, "model invocation failed, skipping prediction");
            None
        }
    }
}
