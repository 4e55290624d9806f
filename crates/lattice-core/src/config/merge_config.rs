use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::DEFAULT_LAYER_FOLD_ORDER;
use crate::errors::ConfigError;
use crate::layer::LayerKind;

/// Merge engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MergeConfig {
    /// Ordered layer policies the engine folds over. Default: clock, support.
    pub layers: Vec<LayerKind>,
    /// Whether the channel-domain containment tie-break participates in
    /// staleness proofs. Default: true.
    pub channel_subsumption: bool,
    /// Element count above which a cell's value set logs a warning. Default: 64.
    pub set_size_warning: usize,
}

impl MergeConfig {
    /// Check layer-list invariants: non-empty, no duplicates.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.layers.is_empty() {
            return Err(ConfigError::InvalidLayerSet {
                reason: "at least one layer policy is required".to_string(),
            });
        }
        let mut seen = HashSet::new();
        for kind in &self.layers {
            if !seen.insert(kind) {
                return Err(ConfigError::InvalidLayerSet {
                    reason: format!("duplicate layer policy: {kind}"),
                });
            }
        }
        Ok(())
    }
}

impl Default for MergeConfig {
    fn default() -> Self {
        Self {
            layers: DEFAULT_LAYER_FOLD_ORDER.to_vec(),
            channel_subsumption: defaults::DEFAULT_CHANNEL_SUBSUMPTION,
            set_size_warning: defaults::DEFAULT_SET_SIZE_WARNING,
        }
    }
}
