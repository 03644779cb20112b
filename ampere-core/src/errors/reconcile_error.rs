use super::SinkError;

/// Fatal reconciliation-job errors.
///
/// Per-item delete/insert failures are not here: those are counted in the
/// run report, never raised. Only conditions that abort the whole run are.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ReconcileError {
    #[error("raw dataset is empty, nothing to reconcile")]
    EmptyDataset,

    #[error("raw dataset load failed: {0}")]
    LoadFailed(#[from] SinkError),

    #[error("no model could be resolved for this run")]
    ModelUnavailable,

    #[error("output row {id} is missing the dayIndicator partition key")]
    MissingPartitionKey { id: String },
}
