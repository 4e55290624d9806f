//! The closed vocabulary of annotation-layer kinds.

use serde::{Deserialize, Serialize};

/// Kinds of annotation layers a value can carry.
///
/// The set is closed: every dispatch site in the engine matches exhaustively,
/// so adding a kind is a compile-time-visible change across the workspace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    /// Causal version: a vector clock over source channels.
    Clock,
    /// Justification strength: a premise support set from the belief system.
    Support,
}

impl std::fmt::Display for LayerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayerKind::Clock => write!(f, "clock"),
            LayerKind::Support => write!(f, "support"),
        }
    }
}
