//! Configuration surface. Values come from the environment (or a secret
//! vault behind [`ISecretSource`]), never from CLI flags.

pub mod defaults;

mod model_store_config;
mod replay_config;

pub use model_store_config::ModelStoreConfig;
pub use replay_config::ReplayConfig;

use crate::traits::ISecretSource;

/// Environment-backed secret source. Treats unset and empty the same.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvSecretSource;

impl ISecretSource for EnvSecretSource {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok().filter(|v| !v.is_empty())
    }
}
