use serde::{Deserialize, Serialize};

/// The distinguished sentinel a cell holds when it has received information
/// that no annotation layer can reconcile.
///
/// Produced when values claiming the same identity are mutually
/// non-subsuming and non-stale. The merge core only propagates it; resolving
/// the conflict (for instance by retracting a premise) belongs to the
/// external belief-maintenance collaborator, which watches cell content for
/// this type.
///
/// Generic over the value representation so that foundation code stays
/// independent of the engine crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contradiction<V> {
    /// The values that could not be reconciled.
    pub conflicting: Vec<V>,
    /// Human-readable description of the conflict.
    pub description: String,
}

impl<V> Contradiction<V> {
    /// Build a contradiction over the given values.
    pub fn new(conflicting: Vec<V>, description: impl Into<String>) -> Self {
        Self {
            conflicting,
            description: description.into(),
        }
    }
}
