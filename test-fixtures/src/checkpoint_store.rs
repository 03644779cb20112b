use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use ampere_core::errors::ReplayError;
use ampere_core::traits::ICheckpointStore;

/// In-memory single-slot checkpoint with save history, for cursor tests
/// that don't need the filesystem.
#[derive(Default)]
pub struct MemoryCheckpointStore {
    value: AtomicUsize,
    saved: AtomicBool,
    history: Mutex<Vec<usize>>,
    fail_saves: AtomicBool,
}

impl MemoryCheckpointStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn starting_at(index: usize) -> Self {
        let store = Self::new();
        store.value.store(index, Ordering::SeqCst);
        store.saved.store(true, Ordering::SeqCst);
        store
    }

    pub fn set_fail_saves(&self, fail: bool) {
        self.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Every value ever saved, in order.
    pub fn history(&self) -> Vec<usize> {
        self.history.lock().unwrap().clone()
    }

    pub fn current(&self) -> usize {
        self.value.load(Ordering::SeqCst)
    }
}

impl ICheckpointStore for MemoryCheckpointStore {
    fn load(&self) -> Result<usize, ReplayError> {
        if self.saved.load(Ordering::SeqCst) {
            Ok(self.value.load(Ordering::SeqCst))
        } else {
            Ok(0)
        }
    }

    fn save(&self, index: usize) -> Result<(), ReplayError> {
        if self.fail_saves.load(Ordering::SeqCst) {
            return Err(ReplayError::CheckpointWrite {
                reason: "injected checkpoint failure".into(),
            });
        }
        self.value.store(index, Ordering::SeqCst);
        self.saved.store(true, Ordering::SeqCst);
        self.history.lock().unwrap().push(index);
        Ok(())
    }
}
