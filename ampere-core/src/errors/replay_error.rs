/// Replay cursor and checkpoint errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ReplayError {
    #[error("dispatch failed: {reason}")]
    DispatchFailed { reason: String },

    #[error("checkpoint read failed: {reason}")]
    CheckpointRead { reason: String },

    #[error("checkpoint write failed: {reason}")]
    CheckpointWrite { reason: String },

    #[error("checkpoint value {value} is out of range for source of length {len}")]
    CheckpointOutOfRange { value: usize, len: usize },
}
