//! The cell-content value set, updated only through patches.

use serde::{Deserialize, Serialize};

use crate::annotated::AnnotatedValue;
use crate::patch::PatchSet;

/// An unordered set of annotated values keyed by base identity for removal.
///
/// Elements with distinct base values coexist freely; elements sharing a
/// base value coexist only while no annotation layer proves one stale.
/// Mutation happens exclusively through
/// [`apply_patches`](Self::apply_patches), which returns a new set and
/// leaves the prior one untouched — any reader of the prior set keeps a
/// valid value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatchedValueSet<T> {
    elements: Vec<AnnotatedValue<T>>,
}

impl<T> PatchedValueSet<T> {
    /// An empty value set.
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// A set holding exactly one value.
    pub fn singleton(value: AnnotatedValue<T>) -> Self {
        Self {
            elements: vec![value],
        }
    }

    /// All elements, in no significant order.
    pub fn elements(&self) -> &[AnnotatedValue<T>] {
        &self.elements
    }

    /// All base values, in no significant order.
    pub fn bases(&self) -> Vec<&T> {
        self.elements.iter().map(|element| element.base()).collect()
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if the set holds no values.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl<T: PartialEq> PatchedValueSet<T> {
    /// Returns true if some element's base value equals `base`.
    pub fn contains_base(&self, base: &T) -> bool {
        self.elements.iter().any(|element| element.base() == base)
    }
}

impl<T: Clone + PartialEq> PatchedValueSet<T> {
    /// Insert `value` unless an exactly-equal element (same base, same
    /// layers) is already present.
    fn join(&mut self, value: AnnotatedValue<T>) {
        let already_present = self.elements.iter().any(|existing| existing == &value);
        if !already_present {
            self.elements.push(value);
        }
    }

    /// Delete every element whose base value equals `target`.
    fn remove_base(&mut self, target: &T) {
        self.elements.retain(|element| element.base() != target);
    }

    /// Apply a patch set functionally: removals against the prior set first,
    /// then joins of the candidate.
    ///
    /// # Panics
    ///
    /// Panics when a join patch's recorded target differs from the base of
    /// the candidate being inserted. The scan computed an inconsistent
    /// patch, which is a bug in the engine, not a data condition; it must
    /// not be absorbed.
    pub fn apply_patches(&self, patches: &PatchSet<T>, candidate: &AnnotatedValue<T>) -> Self {
        let mut next = self.clone();
        for patch in patches.removes() {
            next.remove_base(patch.target());
        }
        for patch in patches.joins() {
            assert!(
                patch.target() == candidate.base(),
                "join patch target does not match the value being inserted"
            );
            next.join(candidate.clone());
        }
        next
    }
}

impl<T> Default for PatchedValueSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: PartialEq> PartialEq for PatchedValueSet<T> {
    fn eq(&self, other: &Self) -> bool {
        if self.elements.len() != other.elements.len() {
            return false;
        }
        // Order-independent comparison: every element of self exists in other
        self.elements
            .iter()
            .all(|element| other.elements.contains(element))
            && other
                .elements
                .iter()
                .all(|element| self.elements.contains(element))
    }
}

impl<T: Eq> Eq for PatchedValueSet<T> {}
