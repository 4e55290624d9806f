//! Configuration for the lattice engine.
//!
//! # Examples
//!
//! ```
//! use lattice_core::config::LatticeConfig;
//!
//! let config = LatticeConfig::from_toml("").unwrap();
//! assert!(config.merge.channel_subsumption);
//! assert_eq!(config.merge.set_size_warning, 64);
//! ```

pub mod defaults;
pub mod merge_config;

pub use merge_config::MergeConfig;

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, LatticeResult};

/// Top-level configuration, loaded from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LatticeConfig {
    /// Merge engine settings.
    pub merge: MergeConfig,
}

impl LatticeConfig {
    /// Parse a TOML string, falling back to defaults for absent fields.
    pub fn from_toml(input: &str) -> LatticeResult<Self> {
        let config: LatticeConfig = toml::from_str(input).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Check cross-field invariants.
    pub fn validate(&self) -> LatticeResult<()> {
        self.merge.validate()?;
        Ok(())
    }
}
