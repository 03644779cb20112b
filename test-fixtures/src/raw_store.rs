use std::sync::atomic::{AtomicUsize, Ordering};

use dashmap::DashMap;

use ampere_core::errors::SinkError;
use ampere_core::models::RawDocument;
use ampere_core::traits::IRawStore;

/// In-memory raw session store with injectable write failures.
#[derive(Default)]
pub struct MemoryRawStore {
    docs: DashMap<String, RawDocument>,
    fail_next_upserts: AtomicUsize,
    upsert_attempts: AtomicUsize,
}

impl MemoryRawStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_documents(docs: Vec<RawDocument>) -> Self {
        let store = Self::new();
        for doc in docs {
            store.docs.insert(doc.id.clone(), doc);
        }
        store
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

    pub fn get(&self, id: &str) -> Option<RawDocument> {
        self.docs.get(id).map(|d| d.clone())
    }

    /// Total upsert calls seen, including failed ones.
    pub fn upsert_attempts(&self) -> usize {
        self.upsert_attempts.load(Ordering::SeqCst)
    }
}

impl IRawStore for MemoryRawStore {
    fn upsert(&self, doc: &RawDocument) -> Result<(), SinkError> {
        self.upsert_attempts.fetch_add(1, Ordering::SeqCst);
        let remaining = self.fail_next_upserts.load(Ordering::SeqCst);
        if remaining > 0 {
            self.fail_next_upserts.store(remaining - 1, Ordering::SeqCst);
            return Err(SinkError::WriteFailed {
                id: doc.id.clone(),
                reason: "injected raw-store failure".into(),
            });
        }
        self.docs.insert(doc.id.clone(), doc.clone());
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<RawDocument>, SinkError> {
        Ok(self.docs.iter().map(|e| e.value().clone()).collect())
    }
}
