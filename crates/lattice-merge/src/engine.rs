//! The consolidation engine: scan, apply, merge.
//!
//! [`MergeEngine::merge`] is the function the propagator network installs on
//! every cell. It is pure: inputs are immutable, the result is a new content
//! value, merging the same increment twice changes nothing, and increments
//! from independent sources converge to the same observable base values in
//! any arrival order.
//!
//! # Examples
//!
//! ```
//! use lattice_merge::{AnnotatedValue, Content, MergeEngine, VectorClock};
//!
//! let engine = MergeEngine::default();
//!
//! let first = AnnotatedValue::new(10).with_clock(VectorClock::new().forward("s"));
//! let second = AnnotatedValue::new(20).with_clock(first.clock().unwrap().forward("s"));
//!
//! let content = engine.merge_value(&Content::Nothing, &first);
//! let content = engine.merge_value(&content, &second);
//!
//! // The second version supersedes the first.
//! assert_eq!(content.values().unwrap().bases(), vec![&20]);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use lattice_core::config::defaults::DEFAULT_SET_SIZE_WARNING;
use lattice_core::models::Contradiction;
use lattice_core::{LatticeResult, MergeConfig};

use crate::annotated::AnnotatedValue;
use crate::patch::PatchSet;
use crate::policy::{CombinedVerdict, LayerPolicySet};
use crate::value_set::PatchedValueSet;

/// Cell content: the empty sentinel, a consolidated value set, or the
/// contradiction sentinel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Content<T> {
    /// No information yet. Absorbing on the increment side of a merge.
    Nothing,
    /// The consolidated value set.
    Values(PatchedValueSet<T>),
    /// Irreconcilable information. Propagates through the network like any
    /// other value; resolution belongs to the belief system.
    Contradiction(Contradiction<AnnotatedValue<T>>),
}

impl<T> Content<T> {
    /// A content holding exactly one value.
    pub fn singleton(value: AnnotatedValue<T>) -> Self {
        Content::Values(PatchedValueSet::singleton(value))
    }

    /// Returns true for the empty sentinel.
    pub fn is_nothing(&self) -> bool {
        matches!(self, Content::Nothing)
    }

    /// Returns true for the contradiction sentinel.
    pub fn is_contradiction(&self) -> bool {
        matches!(self, Content::Contradiction(_))
    }

    /// The value set, when this content holds one.
    pub fn values(&self) -> Option<&PatchedValueSet<T>> {
        match self {
            Content::Values(set) => Some(set),
            _ => None,
        }
    }
}

/// The consolidation engine.
///
/// Stateless across merges; holds the layer policies (explicit dependency
/// injection, no global registry) and the ambient knobs from
/// [`MergeConfig`].
#[derive(Debug, Clone)]
pub struct MergeEngine {
    policies: LayerPolicySet,
    set_size_warning: usize,
}

impl MergeEngine {
    /// Engine over the given layer policies with default knobs.
    pub fn new(policies: LayerPolicySet) -> Self {
        Self {
            policies,
            set_size_warning: DEFAULT_SET_SIZE_WARNING,
        }
    }

    /// Build the engine from configuration.
    pub fn from_config(config: &MergeConfig) -> LatticeResult<Self> {
        Ok(Self {
            policies: LayerPolicySet::from_config(config)?,
            set_size_warning: config.set_size_warning,
        })
    }

    /// The layer policies this engine consults.
    pub fn policies(&self) -> &LayerPolicySet {
        &self.policies
    }

    /// Compute the patches that consolidate `candidate` into `set`.
    ///
    /// An empty result means the candidate was rejected: every layer with an
    /// opinion agreed it is already subsumed.
    pub fn scan_for_patches<T: Clone + PartialEq>(
        &self,
        set: &PatchedValueSet<T>,
        candidate: &AnnotatedValue<T>,
    ) -> PatchSet<T> {
        if set.is_empty() {
            return PatchSet::singleton_join(candidate);
        }

        let verdicts = self.policies.evaluate(set, candidate);
        let combined = CombinedVerdict::fold(verdicts);

        if combined.related.is_empty() {
            return PatchSet::singleton_join(candidate);
        }
        if combined.is_subsumed() {
            debug!(related = combined.related.len(), "candidate subsumed");
            return PatchSet::new();
        }

        debug!(
            related = combined.related.len(),
            removes = combined.patches.removes().count(),
            "scan complete"
        );
        combined.patches
    }

    /// Apply patches to the prior set, returning the new set.
    pub fn apply_content_patch<T: Clone + PartialEq>(
        &self,
        set: &PatchedValueSet<T>,
        patches: &PatchSet<T>,
        candidate: &AnnotatedValue<T>,
    ) -> PatchedValueSet<T> {
        let next = set.apply_patches(patches, candidate);
        if next.len() > self.set_size_warning {
            warn!(
                size = next.len(),
                threshold = self.set_size_warning,
                "cell value set is growing large"
            );
        }
        next
    }

    /// The merge entry point the network installs on every cell.
    ///
    /// `Nothing` increments are absorbed. A contradiction increment replaces
    /// the content so dependent cells can react to it; a cell already
    /// holding a contradiction keeps it until the belief system resolves the
    /// conflict out of band. Otherwise every increment element is scanned
    /// and applied in turn against the prior set (empty when the content was
    /// `Nothing`).
    pub fn merge<T: Clone + PartialEq>(
        &self,
        content: &Content<T>,
        increment: &Content<T>,
    ) -> Content<T> {
        let increments = match increment {
            Content::Nothing => return content.clone(),
            Content::Contradiction(contradiction) => {
                return Content::Contradiction(contradiction.clone())
            }
            Content::Values(set) => set,
        };

        let mut set = match content {
            Content::Contradiction(held) => return Content::Contradiction(held.clone()),
            Content::Nothing => PatchedValueSet::new(),
            Content::Values(prior) => prior.clone(),
        };

        debug!(
            prior = set.len(),
            increments = increments.len(),
            "consolidating cell content"
        );
        for candidate in increments.elements() {
            let patches = self.scan_for_patches(&set, candidate);
            set = self.apply_content_patch(&set, &patches, candidate);
        }
        Content::Values(set)
    }

    /// Merge a single annotated increment.
    pub fn merge_value<T: Clone + PartialEq>(
        &self,
        content: &Content<T>,
        increment: &AnnotatedValue<T>,
    ) -> Content<T> {
        self.merge(content, &Content::singleton(increment.clone()))
    }
}

impl Default for MergeEngine {
    fn default() -> Self {
        Self::new(LayerPolicySet::full())
    }
}
