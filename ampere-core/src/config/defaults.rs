//! Default configuration values.

/// Blob container holding model artifacts.
pub const DEFAULT_MODEL_CONTAINER: &str = "models";

/// Blob name of the active model artifact.
pub const DEFAULT_MODEL_BLOB: &str = "kwh_regression_model.json";

/// Path of the replay cursor's single-slot state file.
pub const DEFAULT_REPLAY_STATE_PATH: &str = "replay_checkpoint.txt";

/// Fixed inter-record delay on the replay path, in milliseconds.
pub const DEFAULT_REPLAY_DELAY_MS: u64 = 2000;
