use crate::errors::SinkError;

/// Blob storage holding the serialized model artifact.
///
/// Implementations wrap a concrete client already bound to an account and
/// an authentication method; which method (ambient credential vs connection
/// string) is the resolver strategies' concern, not this trait's.
pub trait IBlobStore: Send + Sync {
    fn download(&self, container: &str, blob: &str) -> Result<Vec<u8>, SinkError>;

    /// Upload with overwrite semantics.
    fn upload(&self, container: &str, blob: &str, bytes: &[u8]) -> Result<(), SinkError>;

    /// Create the container if it does not already exist.
    fn ensure_container(&self, container: &str) -> Result<(), SinkError>;
}
