//! In-memory implementations of the Ampere store and transport traits,
//! with scriptable failure injection, shared by tests across crates.

mod blob_store;
mod checkpoint_store;
mod dispatcher;
mod prediction_store;
mod raw_store;

pub use blob_store::MemoryBlobStore;
pub use checkpoint_store::MemoryCheckpointStore;
pub use dispatcher::ScriptedDispatcher;
pub use prediction_store::MemoryPredictionStore;
pub use raw_store::MemoryRawStore;

use ampere_core::models::TelemetryRecord;

/// Initialize tracing output for a test binary. Safe to call repeatedly.
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_test_writer()
        .try_init();
}

/// The canonical complete session used throughout the tests:
/// derived features [1.0, 2.0, 2.0, 3.0].
pub fn sample_record() -> TelemetryRecord {
    TelemetryRecord::new(1.0, 2.0, 4.0, "Mon")
}

/// A small dataset of complete sessions with distinct values.
pub fn sample_dataset(len: usize) -> Vec<TelemetryRecord> {
    (0..len)
        .map(|i| {
            let i = i as f64;
            TelemetryRecord::new(i, i + 1.0, 2.0 * (i + 1.0), "Mon")
        })
        .collect()
}
