//! Error taxonomy for the lattice engine.
//!
//! Runtime data conflicts are not errors here: an irreconcilable merge
//! surfaces as the [`Contradiction`](crate::models::Contradiction) sentinel
//! inside cell content, and a violated patch-application invariant is a
//! programmer error that panics rather than propagating.

pub mod config_error;

pub use config_error::ConfigError;

/// Umbrella error for all lattice subsystems.
#[derive(Debug, thiserror::Error)]
pub enum LatticeError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Convenience result alias.
pub type LatticeResult<T> = Result<T, LatticeError>;
