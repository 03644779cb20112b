//! # ampere-predict
//!
//! The prediction stage: pure feature derivation, a versioned model
//! artifact, model resolution over an ordered fallback strategy chain with
//! a write-once process cache, and the predictor that ties them together.
//!
//! ## Resolution fallback
//!
//! | Order | Strategy | Requires |
//! |-------|----------|----------|
//! | 1 | managed identity | storage account name |
//! | 2 | connection string | connection string |
//!
//! The first success is cached for the life of the process; a model update
//! in the backing store is not observed without a restart.

pub mod features;
pub mod model;
pub mod predictor;
pub mod resolver;
pub mod strategies;

pub use features::{derive, DerivedFeatures, FeatureVector};
pub use model::ModelArtifact;
pub use predictor::predict;
pub use resolver::{ModelCache, ModelResolver};
pub use strategies::{ConnectionStringStrategy, ManagedIdentityStrategy, ResolveStrategy};
