//! Justification-strength metadata supplied by the belief system.
//!
//! A support set names the premises a value depends on. Fewer premises mean
//! a stronger justification: a value resting on `{p1}` holds whenever one
//! resting on `{p1, p2}` does, so the subset relation is the ordering that
//! matters. The belief-maintenance collaborator owns premise identity and
//! belief state; this crate only reads the ordering.
//!
//! # Examples
//!
//! ```
//! use lattice_merge::SupportSet;
//!
//! let strong = SupportSet::from_premises(["p1"]);
//! let weak = SupportSet::from_premises(["p1", "p2"]);
//!
//! assert!(strong.is_subset_of(&weak));
//! assert!(strong.is_stronger_than(&weak));
//! assert!(!weak.is_stronger_than(&strong));
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A set of premise identifiers justifying a value.
///
/// Equality is set equality; iteration order is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportSet {
    premises: BTreeSet<String>,
}

impl SupportSet {
    /// Create an empty support set.
    ///
    /// An empty set is the strongest possible justification: the value
    /// depends on no premise at all.
    pub fn new() -> Self {
        Self {
            premises: BTreeSet::new(),
        }
    }

    /// Build a support set from premise identifiers.
    pub fn from_premises<I, S>(premises: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            premises: premises.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns all premise identifiers, in sorted order.
    pub fn premises(&self) -> Vec<&str> {
        self.premises.iter().map(|p| p.as_str()).collect()
    }

    /// Returns true if the value depends on the given premise.
    pub fn contains(&self, premise: &str) -> bool {
        self.premises.contains(premise)
    }

    /// Returns the number of premises.
    pub fn len(&self) -> usize {
        self.premises.len()
    }

    /// Returns true if the set names no premises.
    pub fn is_empty(&self) -> bool {
        self.premises.is_empty()
    }

    /// Returns true if every premise of `self` is also a premise of `other`.
    ///
    /// A subset is at least as strong a justification: it asks for less.
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.premises.is_subset(&other.premises)
    }

    /// Returns true if `self` is a strict subset of `other` — a strictly
    /// stronger justification for the same conclusion.
    pub fn is_stronger_than(&self, other: &Self) -> bool {
        self.premises.len() < other.premises.len() && self.is_subset_of(other)
    }
}
