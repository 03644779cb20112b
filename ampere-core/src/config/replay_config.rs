use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;
use super::EnvSecretSource;
use crate::traits::ISecretSource;

/// Replay cursor configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReplayConfig {
    /// Single-slot checkpoint file.
    pub state_path: PathBuf,
    /// Fixed inter-record delay (rate limit), in milliseconds.
    pub inter_record_delay_ms: u64,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            state_path: PathBuf::from(defaults::DEFAULT_REPLAY_STATE_PATH),
            inter_record_delay_ms: defaults::DEFAULT_REPLAY_DELAY_MS,
        }
    }
}

impl ReplayConfig {
    /// Resolve from the process environment.
    pub fn from_env() -> Self {
        Self::from_secrets(&EnvSecretSource)
    }

    /// Resolve through an arbitrary secret source.
    pub fn from_secrets(secrets: &dyn ISecretSource) -> Self {
        let base = Self::default();
        Self {
            state_path: secrets
                .get("AMPERE_REPLAY_STATE_PATH")
                .map(PathBuf::from)
                .unwrap_or(base.state_path),
            inter_record_delay_ms: secrets
                .get("AMPERE_REPLAY_DELAY_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(base.inter_record_delay_ms),
        }
    }
}
