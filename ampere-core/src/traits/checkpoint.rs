use crate::errors::ReplayError;

/// Single-slot durable checkpoint: the index of the next record to process.
///
/// Owned exclusively by the replay cursor. `save` must be atomic — a
/// concurrent reader sees either the old value or the new one, never a
/// partial write.
pub trait ICheckpointStore: Send + Sync {
    /// Returns 0 when no checkpoint has ever been saved.
    fn load(&self) -> Result<usize, ReplayError>;

    fn save(&self, index: usize) -> Result<(), ReplayError>;
}
