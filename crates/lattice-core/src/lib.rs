//! # lattice-core
//!
//! Foundation crate for the lattice consolidation engine.
//! Defines configuration, errors, constants, the annotation-layer
//! vocabulary, shared models, and the cell boundary trait.
//! The engine crate builds on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod layer;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{LatticeConfig, MergeConfig};
pub use errors::{ConfigError, LatticeError, LatticeResult};
pub use layer::LayerKind;
pub use traits::ContentCell;
