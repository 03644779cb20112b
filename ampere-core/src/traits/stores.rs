use crate::errors::SinkError;
use crate::models::{PredictionDocument, RawDocument};

/// The raw session store. Writes are idempotent upserts keyed by `id`:
/// re-writing the same document is safe, which is what lets the dual-sink
/// writer retry a raw write without consulting the store first.
pub trait IRawStore: Send + Sync {
    fn upsert(&self, doc: &RawDocument) -> Result<(), SinkError>;
    fn read_all(&self) -> Result<Vec<RawDocument>, SinkError>;
}

/// The prediction store, partitioned by `dayIndicator`.
pub trait IPredictionStore: Send + Sync {
    fn read_all(&self) -> Result<Vec<PredictionDocument>, SinkError>;
    fn delete(&self, id: &str, partition_key: &str) -> Result<(), SinkError>;
    fn upsert(&self, doc: &PredictionDocument) -> Result<(), SinkError>;
}
