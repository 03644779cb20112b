use serde::{Deserialize, Serialize};

use super::defaults;
use super::EnvSecretSource;
use crate::traits::ISecretSource;

/// Where the model artifact lives and how the store may be reached.
///
/// `storage_account` enables the managed-identity resolution path;
/// `connection_string` enables the fallback path. Either may be absent —
/// which strategies are available follows from what is set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelStoreConfig {
    /// Storage account name. Selects the ambient-credential blob path.
    pub storage_account: Option<String>,
    /// Container holding the model artifact.
    pub container: String,
    /// Blob name of the model artifact.
    pub blob_name: String,
    /// Connection string for the fallback authentication path.
    pub connection_string: Option<String>,
}

impl Default for ModelStoreConfig {
    fn default() -> Self {
        Self {
            storage_account: None,
            container: defaults::DEFAULT_MODEL_CONTAINER.to_string(),
            blob_name: defaults::DEFAULT_MODEL_BLOB.to_string(),
            connection_string: None,
        }
    }
}

impl ModelStoreConfig {
    /// Resolve from the process environment.
    pub fn from_env() -> Self {
        Self::from_secrets(&EnvSecretSource)
    }

    /// Resolve through an arbitrary secret source (vault indirection).
    pub fn from_secrets(secrets: &dyn ISecretSource) -> Self {
        let base = Self::default();
        Self {
            storage_account: secrets.get("AMPERE_STORAGE_ACCOUNT_NAME"),
            container: secrets
                .get("AMPERE_MODEL_CONTAINER_NAME")
                .unwrap_or(base.container),
            blob_name: secrets
                .get("AMPERE_MODEL_BLOB_NAME")
                .unwrap_or(base.blob_name),
            connection_string: secrets.get("AMPERE_STORAGE_CONNECTION_STRING"),
        }
    }
}
