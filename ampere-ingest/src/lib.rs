//! # ampere-ingest
//!
//! The two persistence paths of the pipeline.
//!
//! Streaming: one event at a time through the dual-sink writer — the raw
//! record's durability never depends on prediction success, and one
//! event's failure never stops the next event.
//!
//! Batch: the reconciliation job recomputes predictions for the whole raw
//! dataset and replaces the prediction store, tolerating per-item failures
//! and finishing with a best-effort model backup.

pub mod reconcile;
pub mod stream;
pub mod writer;

pub use reconcile::{non_critical, ReconcileJob, ReconcileReport};
pub use stream::StreamPipeline;
pub use writer::{DualSinkWriter, EventOutcome};
