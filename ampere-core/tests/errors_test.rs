use ampere_core::errors::{AmpereError, ModelError, ReconcileError, ReplayError, SinkError};

#[test]
fn umbrella_error_converts_from_every_subsystem() {
    let sink: AmpereError = SinkError::ReadFailed {
        reason: "timeout".into(),
    }
    .into();
    assert!(matches!(sink, AmpereError::Sink(_)));

    let model: AmpereError = ModelError::InvocationFailed {
        reason: "shape mismatch".into(),
    }
    .into();
    assert!(matches!(model, AmpereError::Model(_)));

    let replay: AmpereError = ReplayError::DispatchFailed {
        reason: "connection reset".into(),
    }
    .into();
    assert!(matches!(replay, AmpereError::Replay(_)));

    let reconcile: AmpereError = ReconcileError::EmptyDataset.into();
    assert!(matches!(reconcile, AmpereError::Reconcile(_)));
}

#[test]
fn error_messages_carry_context() {
    let err = SinkError::DeleteFailed {
        id: "abc".into(),
        partition_key: "Mon".into(),
        reason: "gone".into(),
    };
    let msg = err.to_string();
    assert!(msg.contains("abc"));
    assert!(msg.contains("Mon"));

    let err = ModelError::ConfigMissing {
        strategy: "managed_identity".into(),
        name: "AMPERE_STORAGE_ACCOUNT_NAME".into(),
    };
    assert!(err.to_string().contains("managed_identity"));
}

#[test]
fn load_failure_wraps_sink_error() {
    let err: ReconcileError = SinkError::ReadFailed {
        reason: "503".into(),
    }
    .into();
    assert!(matches!(err, ReconcileError::LoadFailed(_)));
}
