use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use dashmap::{DashMap, DashSet};

use ampere_core::errors::SinkError;
use ampere_core::traits::IBlobStore;

/// In-memory blob store with download-failure injection and a download
/// counter, so tests can prove the model cache prevents re-fetching.
#[derive(Default)]
pub struct MemoryBlobStore {
    blobs: DashMap<String, Vec<u8>>,
    containers: DashSet<String>,
    fail_downloads: AtomicBool,
    fail_uploads: AtomicBool,
    downloads: AtomicUsize,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob(container: &str, blob: &str, bytes: Vec<u8>) -> Self {
        let store = Self::new();
        store.containers.insert(container.to_string());
        store.blobs.insert(Self::key(container, blob), bytes);
        store
    }

    fn key(container: &str, blob: &str) -> String {
        format!("{container}/{blob}")
    }

    pub fn set_fail_downloads(&self, fail: bool) {
        self.fail_downloads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_uploads(&self, fail: bool) {
        self.fail_uploads.store(fail, Ordering::SeqCst);
    }

    pub fn download_count(&self) -> usize {
        self.downloads.load(Ordering::SeqCst)
    }

    pub fn blob(&self, container: &str, blob: &str) -> Option<Vec<u8>> {
        self.blobs.get(&Self::key(container, blob)).map(|b| b.clone())
    }

    pub fn has_container(&self, container: &str) -> bool {
        self.containers.contains(container)
    }
}

impl IBlobStore for MemoryBlobStore {
    fn download(&self, container: &str, blob: &str) -> Result<Vec<u8>, SinkError> {
        self.downloads.fetch_add(1, Ordering::SeqCst);
        if self.fail_downloads.load(Ordering::SeqCst) {
            return Err(SinkError::BlobUnavailable {
                container: container.to_string(),
                blob: blob.to_string(),
                reason: "injected download failure".into(),
            });
        }
        self.blobs
            .get(&Self::key(container, blob))
            .map(|b| b.clone())
            .ok_or_else(|| SinkError::BlobUnavailable {
                container: container.to_string(),
                blob: blob.to_string(),
                reason: "blob not found".into(),
            })
    }

    fn upload(&self, container: &str, blob: &str, bytes: &[u8]) -> Result<(), SinkError> {
        if self.fail_uploads.load(Ordering::SeqCst) {
            return Err(SinkError::WriteFailed {
                id: Self::key(container, blob),
                reason: "injected upload failure".into(),
            });
        }
        self.blobs.insert(Self::key(container, blob), bytes.to_vec());
        Ok(())
    }

    fn ensure_container(&self, container: &str) -> Result<(), SinkError> {
        self.containers.insert(container.to_string());
        Ok(())
    }
}
