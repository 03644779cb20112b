//! The replay cursor: iterate, dispatch, advance, sleep.

use std::time::Duration;

use ampere_core::errors::ReplayError;
use ampere_core::models::TelemetryRecord;
use ampere_core::traits::{ICheckpointStore, IDispatcher};

/// Outcome of a completed replay run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplaySummary {
    /// Records dispatched and confirmed during this run.
    pub dispatched: usize,
    /// Checkpoint value at the end of the run (== source length).
    pub resume_index: usize,
}

/// Replays an immutable, ordered record source from the checkpointed
/// position, one record at a time.
///
/// Protocol per position `i`: dispatch record `i`; only on confirmed
/// success save checkpoint `i + 1`; then apply the fixed inter-record
/// delay. A dispatch failure aborts the run without advancing — a restart
/// resumes at the same `i`. A checkpoint-save failure after a confirmed
/// send also aborts; that record may be redelivered on restart, which is
/// the accepted at-least-once boundary.
pub struct ReplayCursor<'a> {
    records: Vec<TelemetryRecord>,
    checkpoints: &'a dyn ICheckpointStore,
    dispatcher: &'a dyn IDispatcher,
    delay: Duration,
}

impl<'a> ReplayCursor<'a> {
    pub fn new(
        records: Vec<TelemetryRecord>,
        checkpoints: &'a dyn ICheckpointStore,
        dispatcher: &'a dyn IDispatcher,
        delay: Duration,
    ) -> Self {
        Self {
            records,
            checkpoints,
            dispatcher,
            delay,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Run the cursor to the end of the source, fail-fast.
    pub fn run(&self) -> Result<ReplaySummary, ReplayError> {
        let start = self.checkpoints.load()?;
        if start > self.records.len() {
            return Err(ReplayError::CheckpointOutOfRange {
                value: start,
                len: self.records.len(),
            });
        }
        tracing::info!(
            start,
            total = self.records.len(),
            "replay starting from checkpoint"
        );

        let mut dispatched = 0;
        for (i, record) in self.records.iter().enumerate().skip(start) {
            if let Err(err) = self.dispatcher.dispatch(record) {
                tracing::error!(index = i, error = %err, "dispatch failed, aborting without advancing");
                return Err(err);
            }
            self.checkpoints.save(i + 1)?;
            dispatched += 1;
            tracing::debug!(index = i, "record dispatched, checkpoint advanced");

            if !self.delay.is_zero() {
                std::thread::sleep(self.delay);
            }
        }

        tracing::info!(dispatched, "replay run complete");
        Ok(ReplaySummary {
            dispatched,
            resume_index: self.records.len(),
        })
    }
}
