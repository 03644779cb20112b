//! Single-slot file checkpoint.

use std::fs;
use std::path::{Path, PathBuf};

use ampere_core::config::ReplayConfig;
use ampere_core::errors::ReplayError;
use ampere_core::traits::ICheckpointStore;

/// Persists the replay index as plain text in a single file.
///
/// `save` writes a temp file in the same directory and renames it over the
/// slot, so a concurrent reader sees either the previous value or the new
/// one, never a torn write.
#[derive(Debug, Clone)]
pub struct FileCheckpointStore {
    path: PathBuf,
}

impl FileCheckpointStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn from_config(config: &ReplayConfig) -> Self {
        Self::new(config.state_path.clone())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().unwrap_or_default().to_os_string();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl ICheckpointStore for FileCheckpointStore {
    fn load(&self) -> Result<usize, ReplayError> {
        if !self.path.exists() {
            return Ok(0);
        }
        let text = fs::read_to_string(&self.path).map_err(|e| ReplayError::CheckpointRead {
            reason: e.to_string(),
        })?;
        text.trim()
            .parse::<usize>()
            .map_err(|e| ReplayError::CheckpointRead {
                reason: format!("invalid checkpoint {text:?}: {e}"),
            })
    }

    fn save(&self, index: usize) -> Result<(), ReplayError> {
        let temp = self.temp_path();
        fs::write(&temp, index.to_string()).map_err(|e| ReplayError::CheckpointWrite {
            reason: e.to_string(),
        })?;
        fs::rename(&temp, &self.path).map_err(|e| ReplayError::CheckpointWrite {
            reason: e.to_string(),
        })
    }
}
