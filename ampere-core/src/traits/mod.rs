//! Trait seams for the external collaborators: document stores, blob
//! storage, the outbound transport, checkpoint persistence, and secret
//! resolution. The pipeline crates only ever see these traits; concrete
//! cloud clients live behind them.

mod blob;
mod checkpoint;
mod dispatch;
mod secrets;
mod stores;

pub use blob::IBlobStore;
pub use checkpoint::ICheckpointStore;
pub use dispatch::IDispatcher;
pub use secrets::ISecretSource;
pub use stores::{IPredictionStore, IRawStore};
