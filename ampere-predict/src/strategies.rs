//! Ordered model-retrieval strategies.
//!
//! Each strategy is self-contained: it knows whether its configuration is
//! present (`available`) and how to fetch and decode the artifact. The
//! resolver walks the list and short-circuits on the first success.

use std::sync::{Arc, OnceLock};

use ampere_core::config::ModelStoreConfig;
use ampere_core::errors::ModelError;
use ampere_core::traits::IBlobStore;

use crate::model::ModelArtifact;

/// One way to obtain a ready-to-use model artifact.
pub trait ResolveStrategy: Send + Sync {
    fn name(&self) -> &'static str;

    /// Whether this strategy's configuration is present. An unavailable
    /// strategy is skipped, not failed.
    fn available(&self) -> bool;

    fn fetch(&self) -> Result<ModelArtifact, ModelError>;
}

/// Strategy A: ambient-credential blob access, selected by the storage
/// account name being configured. The transport is already bound to the
/// ambient identity.
pub struct ManagedIdentityStrategy {
    config: ModelStoreConfig,
    transport: Arc<dyn IBlobStore>,
}

impl ManagedIdentityStrategy {
    pub fn new(config: ModelStoreConfig, transport: Arc<dyn IBlobStore>) -> Self {
        Self { config, transport }
    }
}

impl ResolveStrategy for ManagedIdentityStrategy {
    fn name(&self) -> &'static str {
        "managed_identity"
    }

    fn available(&self) -> bool {
        self.config.storage_account.is_some()
    }

    fn fetch(&self) -> Result<ModelArtifact, ModelError> {
        let account =
            self.config
                .storage_account
                .as_deref()
                .ok_or_else(|| ModelError::ConfigMissing {
                    strategy: self.name().to_string(),
                    name: "storage_account".to_string(),
                })?;
        tracing::debug!(
            account,
            container = %self.config.container,
            blob = %self.config.blob_name,
            "fetching model via ambient credential"
        );
        let bytes = self
            .transport
            .download(&self.config.container, &self.config.blob_name)
            .map_err(|e| ModelError::FetchFailed {
                strategy: self.name().to_string(),
                reason: e.to_string(),
            })?;
        ModelArtifact::from_bytes(&bytes)
    }
}

/// Builds a blob client from a connection string.
pub type BlobClientFactory =
    Box<dyn Fn(&str) -> Result<Arc<dyn IBlobStore>, ModelError> + Send + Sync>;

/// Strategy B: connection-string blob access. The client is created on
/// first use and held for the life of the process; later fetches reuse it.
pub struct ConnectionStringStrategy {
    config: ModelStoreConfig,
    factory: BlobClientFactory,
    client: OnceLock<Arc<dyn IBlobStore>>,
}

impl ConnectionStringStrategy {
    pub fn new(config: ModelStoreConfig, factory: BlobClientFactory) -> Self {
        Self {
            config,
            factory,
            client: OnceLock::new(),
        }
    }

    fn client(&self) -> Result<Arc<dyn IBlobStore>, ModelError> {
        if let Some(client) = self.client.get() {
            return Ok(Arc::clone(client));
        }
        let conn =
            self.config
                .connection_string
                .as_deref()
                .ok_or_else(|| ModelError::ConfigMissing {
                    strategy: self.name().to_string(),
                    name: "connection_string".to_string(),
                })?;
        let client = (self.factory)(conn)?;
        // A concurrent first caller may have won the race; use theirs.
        let _ = self.client.set(Arc::clone(&client));
        Ok(Arc::clone(self.client.get().unwrap_or(&client)))
    }
}

impl ResolveStrategy for ConnectionStringStrategy {
    fn name(&self) -> &'static str {
        "connection_string"
    }

    fn available(&self) -> bool {
        self.config.connection_string.is_some()
    }

    fn fetch(&self) -> Result<ModelArtifact, ModelError> {
        let client = self.client()?;
        tracing::debug!(
            container = %self.config.container,
            blob = %self.config.blob_name,
            "fetching model via connection string"
        );
        let bytes = client
            .download(&self.config.container, &self.config.blob_name)
            .map_err(|e| ModelError::FetchFailed {
                strategy: self.name().to_string(),
                reason: e.to_string(),
            })?;
        ModelArtifact::from_bytes(&bytes)
    }
}
