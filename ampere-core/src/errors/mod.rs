//! Error types, one enum per subsystem, plus the umbrella `AmpereError`.

mod model_error;
mod reconcile_error;
mod replay_error;
mod sink_error;

pub use model_error::ModelError;
pub use reconcile_error::ReconcileError;
pub use replay_error::ReplayError;
pub use sink_error::SinkError;

/// Umbrella error for cross-subsystem call sites.
#[derive(Debug, thiserror::Error)]
pub enum AmpereError {
    #[error(transparent)]
    Sink(#[from] SinkError),

    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Replay(#[from] ReplayError),

    #[error(transparent)]
    Reconcile(#[from] ReconcileError),

    /// An inbound event that could not be decoded at all. Nothing can be
    /// persisted for such an event; it is reported and skipped.
    #[error("event decode failed: {reason}")]
    EventDecode { reason: String },
}

/// Convenience result alias used across the workspace.
pub type AmpereResult<T> = Result<T, AmpereError>;
