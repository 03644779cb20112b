/// Model resolution and invocation errors.
///
/// These never cross the resolver or predictor boundary: the resolver
/// converts them into fallback attempts, the predictor into a skipped
/// prediction. They exist so strategies and the artifact codec can report
/// what went wrong with enough detail to log.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ModelError {
    #[error("strategy {strategy} is not configured: missing {name}")]
    ConfigMissing { strategy: String, name: String },

    #[error("strategy {strategy} fetch failed: {reason}")]
    FetchFailed { strategy: String, reason: String },

    #[error("model artifact deserialization failed: {reason}")]
    DeserializeFailed { reason: String },

    #[error("model artifact serialization failed: {reason}")]
    SerializeFailed { reason: String },

    #[error("model invocation failed: {reason}")]
    InvocationFailed { reason: String },
}
