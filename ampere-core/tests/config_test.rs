use std::collections::HashMap;

use ampere_core::config::{defaults, ModelStoreConfig, ReplayConfig};
use ampere_core::traits::ISecretSource;

/// Map-backed secret source, standing in for both env and vault.
struct MapSecrets(HashMap<&'static str, &'static str>);

impl ISecretSource for MapSecrets {
    fn get(&self, name: &str) -> Option<String> {
        self.0.get(name).map(|v| v.to_string())
    }
}

#[test]
fn model_store_config_defaults_when_nothing_is_set() {
    let config = ModelStoreConfig::from_secrets(&MapSecrets(HashMap::new()));
    assert_eq!(config.storage_account, None);
    assert_eq!(config.container, defaults::DEFAULT_MODEL_CONTAINER);
    assert_eq!(config.blob_name, defaults::DEFAULT_MODEL_BLOB);
    assert_eq!(config.connection_string, None);
}

#[test]
fn model_store_config_reads_all_values() {
    let secrets = MapSecrets(HashMap::from([
        ("AMPERE_STORAGE_ACCOUNT_NAME", "chargedata"),
        ("AMPERE_MODEL_CONTAINER_NAME", "artifacts"),
        ("AMPERE_MODEL_BLOB_NAME", "model-v2.json"),
        ("AMPERE_STORAGE_CONNECTION_STRING", "Endpoint=sb://x"),
    ]));
    let config = ModelStoreConfig::from_secrets(&secrets);
    assert_eq!(config.storage_account.as_deref(), Some("chargedata"));
    assert_eq!(config.container, "artifacts");
    assert_eq!(config.blob_name, "model-v2.json");
    assert_eq!(config.connection_string.as_deref(), Some("Endpoint=sb://x"));
}

#[test]
fn replay_config_parses_delay_and_falls_back_on_garbage() {
    let secrets = MapSecrets(HashMap::from([
        ("AMPERE_REPLAY_STATE_PATH", "/var/lib/ampere/cursor"),
        ("AMPERE_REPLAY_DELAY_MS", "250"),
    ]));
    let config = ReplayConfig::from_secrets(&secrets);
    assert_eq!(config.state_path.to_str(), Some("/var/lib/ampere/cursor"));
    assert_eq!(config.inter_record_delay_ms, 250);

    let bad = MapSecrets(HashMap::from([("AMPERE_REPLAY_DELAY_MS", "soon")]));
    let config = ReplayConfig::from_secrets(&bad);
    assert_eq!(
        config.inter_record_delay_ms,
        defaults::DEFAULT_REPLAY_DELAY_MS
    );
}
