//! # ampere-replay
//!
//! Resumable replay of a finite, ordered telemetry source over an outbound
//! transport. A single-slot file checkpoint survives process restarts:
//! the cursor never skips a record and never advances past an unconfirmed
//! send. Delivery is at-least-once across restarts — the one in-flight
//! record may be redelivered if the process dies between a confirmed send
//! and the checkpoint write.

pub mod checkpoint;
pub mod cursor;

pub use checkpoint::FileCheckpointStore;
pub use cursor::{ReplayCursor, ReplaySummary};
