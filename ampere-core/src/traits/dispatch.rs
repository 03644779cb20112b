use crate::errors::ReplayError;
use crate::models::TelemetryRecord;

/// Outbound transport for the replay cursor. One call per record; the call
/// returns only once the send is confirmed, so a returned `Ok` is the
/// cursor's signal to advance the checkpoint.
pub trait IDispatcher: Send + Sync {
    fn dispatch(&self, record: &TelemetryRecord) -> Result<(), ReplayError>;
}
