//! # ampere-core
//!
//! Foundation crate for the Ampere charging-telemetry pipeline.
//! Defines the wire documents, errors, store/transport traits, config,
//! and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{EnvSecretSource, ModelStoreConfig, ReplayConfig};
pub use errors::{AmpereError, AmpereResult};
pub use models::{PredictionDocument, RawDocument, TelemetryRecord};
