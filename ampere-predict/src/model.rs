//! The versioned model artifact.

use serde::{Deserialize, Serialize};

use ampere_core::constants::FEATURE_COUNT;
use ampere_core::errors::ModelError;

use crate::features::FeatureVector;

/// A regression artifact over the four session features, serialized as
/// JSON in blob storage. This type is the only place that knows the
/// artifact's shape; everything else handles it as an opaque predictor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Artifact version label, set at export time.
    pub version: String,
    pub intercept: f64,
    pub weights: [f64; FEATURE_COUNT],
}

impl ModelArtifact {
    /// Deserialize an artifact fetched from blob storage.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ModelError> {
        serde_json::from_slice(bytes).map_err(|e| ModelError::DeserializeFailed {
            reason: e.to_string(),
        })
    }

    /// Serialize for the post-reconciliation backup upload.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ModelError> {
        serde_json::to_vec(self).map_err(|e| ModelError::SerializeFailed {
            reason: e.to_string(),
        })
    }

    /// Predicted kWh for one feature vector.
    pub fn predict(&self, features: &FeatureVector) -> Result<f64, ModelError> {
        let value = self
            .weights
            .iter()
            .zip(features.0)
            .fold(self.intercept, |acc, (w, x)| acc + w * x);
        if !value.is_finite() {
            return Err(ModelError::InvocationFailed {
                reason: format!("non-finite output for input {:?}", features.0),
            });
        }
        Ok(value)
    }
}
