use std::sync::Arc;

use ampere_core::config::ModelStoreConfig;
use ampere_core::errors::AmpereError;
use ampere_core::traits::IBlobStore;
use ampere_ingest::StreamPipeline;
use ampere_predict::strategies::ManagedIdentityStrategy;
use ampere_predict::{ModelArtifact, ModelCache, ModelResolver};
use test_fixtures::{MemoryBlobStore, MemoryPredictionStore, MemoryRawStore};

fn fixture_model() -> ModelArtifact {
    ModelArtifact {
        version: "2026-08".into(),
        intercept: 0.5,
        weights: [0.5, 0.5, 0.0, 0.5],
    }
}

fn blob_store_with_model() -> Arc<MemoryBlobStore> {
    let config = ModelStoreConfig::default();
    Arc::new(MemoryBlobStore::with_blob(
        &config.container,
        &config.blob_name,
        fixture_model().to_bytes().unwrap(),
    ))
}

fn resolver_over(store: Arc<MemoryBlobStore>) -> ModelResolver {
    let config = ModelStoreConfig {
        storage_account: Some("chargedata".into()),
        ..ModelStoreConfig::default()
    };
    ModelResolver::new(vec![Box::new(ManagedIdentityStrategy::new(
        config,
        store as Arc<dyn IBlobStore>,
    ))])
}

const EVENT: &[u8] = br#"{
    "connectionTime_decimal": 1.0,
    "chargingDuration": 2.0,
    "kWhDelivered": 4.0,
    "dayIndicator": "Mon"
}"#;

#[test]
fn event_lands_in_both_sinks_with_a_prediction() {
    test_fixtures::init_test_logging();
    let raw = MemoryRawStore::new();
    let predictions = MemoryPredictionStore::new();
    let resolver = resolver_over(blob_store_with_model());
    let cache = ModelCache::new();
    let pipeline = StreamPipeline::new(&raw, &predictions, &resolver, &cache);

    let outcome = pipeline.process_event(EVENT).unwrap();

    assert!(raw.contains(&outcome.raw_id));
    let stored = &predictions.documents()[0];
    assert_eq!(stored.predicted_kwh, 3.5);
    assert_eq!(stored.partition_key(), Some("Mon"));
}

// Raw-sink durability is independent of prediction: with model resolution
// failing outright, the raw write still happens, exactly once.
#[test]
fn raw_write_happens_exactly_once_even_when_resolution_fails() {
    let raw = MemoryRawStore::new();
    let predictions = MemoryPredictionStore::new();
    let blobs = blob_store_with_model();
    blobs.set_fail_downloads(true);
    let resolver = resolver_over(blobs);
    let cache = ModelCache::new();
    let pipeline = StreamPipeline::new(&raw, &predictions, &resolver, &cache);

    let outcome = pipeline.process_event(EVENT).unwrap();

    assert_eq!(raw.upsert_attempts(), 1);
    assert_eq!(raw.len(), 1);
    assert!(outcome.prediction_id.is_none());
    assert!(predictions.is_empty());
}

#[test]
fn undecodable_event_writes_nothing() {
    let raw = MemoryRawStore::new();
    let predictions = MemoryPredictionStore::new();
    let resolver = resolver_over(blob_store_with_model());
    let cache = ModelCache::new();
    let pipeline = StreamPipeline::new(&raw, &predictions, &resolver, &cache);

    let err = pipeline.process_event(b"not json at all").unwrap_err();

    assert!(matches!(err, AmpereError::EventDecode { .. }));
    assert!(raw.is_empty());
    assert!(predictions.is_empty());
}

#[test]
fn incomplete_event_is_persisted_raw_with_prediction_skipped() {
    let raw = MemoryRawStore::new();
    let predictions = MemoryPredictionStore::new();
    let resolver = resolver_over(blob_store_with_model());
    let cache = ModelCache::new();
    let pipeline = StreamPipeline::new(&raw, &predictions, &resolver, &cache);

    // Zero duration: feature-incomplete, a normal skip condition.
    let outcome = pipeline
        .process_event(br#"{"connectionTime_decimal": 8.0, "chargingDuration": 0.0, "kWhDelivered": 5.0, "dayIndicator": "Wed"}"#)
        .unwrap();

    assert!(raw.contains(&outcome.raw_id));
    assert!(outcome.prediction_id.is_none());
    assert!(predictions.is_empty());
}

#[test]
fn model_is_fetched_once_across_many_events() {
    let raw = MemoryRawStore::new();
    let predictions = MemoryPredictionStore::new();
    let blobs = blob_store_with_model();
    let resolver = resolver_over(Arc::clone(&blobs));
    let cache = ModelCache::new();
    let pipeline = StreamPipeline::new(&raw, &predictions, &resolver, &cache);

    for _ in 0..5 {
        pipeline.process_event(EVENT).unwrap();
    }

    assert_eq!(blobs.download_count(), 1);
    assert_eq!(raw.len(), 5);
    assert_eq!(predictions.len(), 5);
}
