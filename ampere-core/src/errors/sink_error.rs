/// Document and blob store errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SinkError {
    #[error("write failed for document {id}: {reason}")]
    WriteFailed { id: String, reason: String },

    #[error("read failed: {reason}")]
    ReadFailed { reason: String },

    #[error("delete failed for document {id} in partition {partition_key}: {reason}")]
    DeleteFailed {
        id: String,
        partition_key: String,
        reason: String,
    },

    #[error("blob {container}/{blob} unavailable: {reason}")]
    BlobUnavailable {
        container: String,
        blob: String,
        reason: String,
    },
}
