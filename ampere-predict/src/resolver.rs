//! Model resolution: walk the strategy chain, cache the first success.

use std::sync::{Arc, OnceLock};

use crate::model::ModelArtifact;
use crate::strategies::ResolveStrategy;

/// Write-once process-wide model slot.
///
/// Absent at startup, populated by the first successful resolution,
/// retained for the process lifetime, never invalidated. Concurrent
/// racers before the first population may fetch independently; the first
/// `populate` wins and later results are discarded.
#[derive(Default)]
pub struct ModelCache {
    slot: OnceLock<Arc<ModelArtifact>>,
}

impl ModelCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<Arc<ModelArtifact>> {
        self.slot.get().map(Arc::clone)
    }

    pub fn is_populated(&self) -> bool {
        self.slot.get().is_some()
    }

    /// Store the artifact if the slot is still empty; either way, return
    /// the cached instance.
    pub fn populate(&self, artifact: ModelArtifact) -> Arc<ModelArtifact> {
        let candidate = Arc::new(artifact);
        match self.slot.set(Arc::clone(&candidate)) {
            Ok(()) => candidate,
            // Another thread won the race; its artifact is the cached one.
            Err(_) => self.get().unwrap_or(candidate),
        }
    }
}

/// Walks an ordered strategy list and caches the first success.
///
/// `resolve` never returns an error: unavailable strategies are skipped,
/// failing ones are logged and fallen through, and exhaustion yields None
/// ("no prediction" downstream, never a crash).
pub struct ModelResolver {
    strategies: Vec<Box<dyn ResolveStrategy>>,
}

impl ModelResolver {
    pub fn new(strategies: Vec<Box<dyn ResolveStrategy>>) -> Self {
        Self { strategies }
    }

    pub fn resolve(&self, cache: &ModelCache) -> Option<Arc<ModelArtifact>> {
        if let Some(artifact) = cache.get() {
            return Some(artifact);
        }

        for strategy in &self.strategies {
            if !strategy.available() {
                tracing::debug!(strategy = strategy.name(), "strategy not configured, skipping");
                continue;
            }
            match strategy.fetch() {
                Ok(artifact) => {
                    tracing::info!(
                        strategy = strategy.name(),
                        version = %artifact.version,
                        "model resolved"
                    );
                    return Some(cache.populate(artifact));
                }
                Err(err) => {
                    tracing::warn!(
                        strategy = strategy.name(),
                        error = %err,
                        "strategy failed, trying next"
                    );
                }
            }
        }

        tracing::warn!("all strategies exhausted, no model available");
        None
    }
}
