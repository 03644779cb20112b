//! The reconciliation job: full idempotent replace of the prediction set.

use ampere_core::config::ModelStoreConfig;
use ampere_core::errors::ReconcileError;
use ampere_core::models::PredictionDocument;
use ampere_core::traits::{IBlobStore, IPredictionStore, IRawStore};
use ampere_predict::{predict, ModelCache, ModelResolver};

/// Per-phase outcome of one reconciliation run. Per-item failures are
/// counted here, never raised.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileReport {
    /// Raw documents loaded.
    pub loaded: usize,
    /// Rows dropped for missing fields (batch mode is strict).
    pub dropped: usize,
    /// Predictions computed.
    pub predicted: usize,
    /// Complete rows the predictor still skipped.
    pub skipped: usize,
    /// Old prediction rows successfully deleted.
    pub deleted: usize,
    /// Old prediction rows that failed to delete and may remain stale.
    pub delete_failures: usize,
    /// New prediction rows successfully inserted.
    pub inserted: usize,
    /// New prediction rows that failed to insert.
    pub insert_failures: usize,
    /// Whether the best-effort model backup upload succeeded.
    pub model_backed_up: bool,
}

/// Run a best-effort step: any failure is logged and converted into
/// `false`, control always returns to the caller.
pub fn non_critical<E: std::fmt::Display>(
    label: &str,
    f: impl FnOnce() -> Result<(), E>,
) -> bool {
    match f() {
        Ok(()) => true,
        Err(err) => {
            tracing::warn!(operation = label, error = %err, "non-critical operation failed");
            false
        }
    }
}

/// Recomputes the entire prediction set from the current raw dataset and
/// model, then replaces the prediction store's contents.
///
/// Phase failure policy: the dataset load and the model resolution are
/// all-or-nothing; every per-row and per-item operation after that is
/// isolated and counted. Delete-then-insert is not transactional — rows
/// that fail to delete can survive alongside the new set, which the
/// report exposes as `delete_failures`.
pub struct ReconcileJob<'a> {
    raw: &'a dyn IRawStore,
    predictions: &'a dyn IPredictionStore,
    resolver: &'a ModelResolver,
    cache: &'a ModelCache,
    blobs: &'a dyn IBlobStore,
    backup: ModelStoreConfig,
}

impl<'a> ReconcileJob<'a> {
    pub fn new(
        raw: &'a dyn IRawStore,
        predictions: &'a dyn IPredictionStore,
        resolver: &'a ModelResolver,
        cache: &'a ModelCache,
        blobs: &'a dyn IBlobStore,
        backup: ModelStoreConfig,
    ) -> Self {
        Self {
            raw,
            predictions,
            resolver,
            cache,
            blobs,
            backup,
        }
    }

    pub fn run(&self) -> Result<ReconcileReport, ReconcileError> {
        let mut report = ReconcileReport::default();

        // 1. Load everything; an empty dataset is fatal here, unlike the
        // streaming path.
        let rows = self.raw.read_all().map_err(ReconcileError::LoadFailed)?;
        if rows.is_empty() {
            return Err(ReconcileError::EmptyDataset);
        }
        report.loaded = rows.len();

        // 2. Strict drop of partial rows.
        let complete: Vec<_> = rows
            .into_iter()
            .filter(|doc| doc.record.is_complete())
            .collect();
        report.dropped = report.loaded - complete.len();
        if report.dropped > 0 {
            tracing::info!(dropped = report.dropped, "dropped rows with missing fields");
        }

        // 3. One model for the whole run.
        let model = self
            .resolver
            .resolve(self.cache)
            .ok_or(ReconcileError::ModelUnavailable)?;

        // 4. Predict all complete rows, assigning fresh identities.
        let mut outputs: Vec<PredictionDocument> = Vec::with_capacity(complete.len());
        for doc in &complete {
            match predict(&doc.record, Some(model.as_ref())) {
                Some(value) => {
                    outputs.push(PredictionDocument::assign(doc.record.clone(), value))
                }
                None => report.skipped += 1,
            }
        }
        report.predicted = outputs.len();

        // Contract check: every output row must carry the partition key.
        for doc in &outputs {
            if doc.partition_key().is_none() {
                return Err(ReconcileError::MissingPartitionKey { id: doc.id.clone() });
            }
        }

        // 5. Delete the existing prediction set, counting per-item failures.
        let existing = self
            .predictions
            .read_all()
            .map_err(ReconcileError::LoadFailed)?;
        for doc in &existing {
            let partition = doc.partition_key().unwrap_or_default();
            if non_critical("delete old prediction", || {
                self.predictions.delete(&doc.id, partition)
            }) {
                report.deleted += 1;
            } else {
                report.delete_failures += 1;
            }
        }
        tracing::info!(
            deleted = report.deleted,
            failures = report.delete_failures,
            "old prediction set removed"
        );

        // 6. Insert the fresh set, counting per-item failures.
        for doc in &outputs {
            if non_critical("insert prediction", || self.predictions.upsert(doc)) {
                report.inserted += 1;
            } else {
                report.insert_failures += 1;
            }
        }
        tracing::info!(
            inserted = report.inserted,
            failures = report.insert_failures,
            "new prediction set written"
        );

        // 7. Best-effort model backup; never fails the job.
        report.model_backed_up = non_critical("model backup upload", || self.backup_model(&model));

        Ok(report)
    }

    fn backup_model(&self, model: &ampere_predict::ModelArtifact) -> Result<(), String> {
        let bytes = model.to_bytes().map_err(|e| e.to_string())?;
        self.blobs
            .ensure_container(&self.backup.container)
            .map_err(|e| e.to_string())?;
        self.blobs
            .upload(&self.backup.container, &self.backup.blob_name, &bytes)
            .map_err(|e| e.to_string())?;
        tracing::info!(
            container = %self.backup.container,
            blob = %self.backup.blob_name,
            size = bytes.len(),
            "model backup uploaded"
        );
        Ok(())
    }
}
