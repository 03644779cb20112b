use std::collections::HashSet;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use dashmap::DashMap;

use ampere_core::errors::SinkError;
use ampere_core::models::PredictionDocument;
use ampere_core::traits::IPredictionStore;

/// In-memory prediction store, keyed by id, with injectable per-item
/// delete and upsert failures.
#[derive(Default)]
pub struct MemoryPredictionStore {
    docs: DashMap<String, PredictionDocument>,
    fail_delete_ids: Mutex<HashSet<String>>,
    fail_next_upserts: AtomicUsize,
}

impl MemoryPredictionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_documents(docs: Vec<PredictionDocument>) -> Self {
        let store = Self::new();
        for doc in docs {
            store.docs.insert(doc.id.clone(), doc);
        }
        store
    }

    /// Make deletes of the given id fail (the row stays in the store).
    pub fn fail_delete_of(&self, id: &str) {
        self.fail_delete_ids
            .lock()
            .unwrap()
            .insert(id.to_string());
    }

    /// Fail the next `n` upsert calls, then behave normally.
    pub fn fail_next_upserts(&self, n: usize) {
        self.fail_next_upserts.store(n, Ordering::SeqCst);
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.docs.contains_key(id)
    }

    pub fn documents(&self) -> Vec<PredictionDocument> {
        self.docs.iter().map(|e| e.value().clone()).collect()
    }
}

impl IPredictionStore for MemoryPredictionStore {
    fn read_all(&self) -> Result<Vec<PredictionDocument>, SinkError> {
        Ok(self.documents())
    }

    fn delete(&self, id: &str, partition_key: &str) -> Result<(), SinkError> {
        if self.fail_delete_ids.lock().unwrap().contains(id) {
            return Err(SinkError::DeleteFailed {
                id: id.to_string(),
                partition_key: partition_key.to_string(),
                reason: "injected delete failure".into(),
            });
        }
        match self.docs.get(id) {
            Some(doc) if doc.partition_key() == Some(partition_key) => {}
            _ => {
                return Err(SinkError::DeleteFailed {
                    id: id.to_string(),
                    partition_key: partition_key.to_string(),
                    reason: "document not found in partition".into(),
                })
            }
        }
        self.docs.remove(id);
        Ok(())
    }

    fn upsert(&self, doc: &PredictionDocument) -> Result<(), SinkError> {
        let remaining = self.fail_next_upserts.load(Ordering::SeqCst);
        if remaining > 0 {
            self.fail_next_upserts.store(remaining - 1, Ordering::SeqCst);
            return Err(SinkError::WriteFailed {
                id: doc.id.clone(),
                reason: "injected prediction-store failure".into(),
            });
        }
        self.docs.insert(doc.id.clone(), doc.clone());
        Ok(())
    }
}
