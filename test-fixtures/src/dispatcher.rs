use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use ampere_core::errors::ReplayError;
use ampere_core::models::TelemetryRecord;
use ampere_core::traits::IDispatcher;

/// Dispatcher that records every sent record and can be scripted to fail
/// on a given call index (0-based, counted across all calls).
#[derive(Default)]
pub struct ScriptedDispatcher {
    sent: Mutex<Vec<TelemetryRecord>>,
    calls: AtomicUsize,
    fail_on_call: Mutex<Option<usize>>,
}

impl ScriptedDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the dispatch call with this 0-based index; all others succeed.
    pub fn fail_on_call(&self, call: usize) {
        *self.fail_on_call.lock().unwrap() = Some(call);
    }

    pub fn sent(&self) -> Vec<TelemetryRecord> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl IDispatcher for ScriptedDispatcher {
    fn dispatch(&self, record: &TelemetryRecord) -> Result<(), ReplayError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if *self.fail_on_call.lock().unwrap() == Some(call) {
            return Err(ReplayError::DispatchFailed {
                reason: format!("injected transport failure on call {call}"),
            });
        }
        self.sent.lock().unwrap().push(record.clone());
        Ok(())
    }
}
