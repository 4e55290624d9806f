use crate::layer::LayerKind;

/// Lattice system version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Canonical fold order for layer verdicts when none is configured.
pub const DEFAULT_LAYER_FOLD_ORDER: [LayerKind; 2] = [LayerKind::Clock, LayerKind::Support];
