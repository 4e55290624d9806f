//! Layer policies and verdict combination.
//!
//! Each annotation layer present on a candidate contributes a verdict:
//! which existing elements it considers related, whether those elements
//! already subsume the candidate, and the patches it wants applied. The
//! fold rule is fixed: relatedness is unioned, subsumption is ANDed across
//! expressed opinions, and patches are unioned, in the order the policy set
//! was configured. A policy whose layer is absent on the candidate expresses
//! no opinion and proposes nothing.

pub mod clock_policy;
pub mod support_policy;

use std::collections::BTreeSet;

use lattice_core::constants::DEFAULT_LAYER_FOLD_ORDER;
use lattice_core::{LatticeResult, LayerKind, MergeConfig};

use crate::annotated::AnnotatedValue;
use crate::patch::PatchSet;
use crate::value_set::PatchedValueSet;

/// One layer's opinion about a candidate.
#[derive(Debug, Clone)]
pub struct LayerVerdict<T> {
    /// The layer that produced this verdict.
    pub kind: LayerKind,
    /// Indices into the value set of the elements this layer relates to the
    /// candidate.
    pub related: Vec<usize>,
    /// Whether the related elements already subsume the candidate.
    /// `None` when the layer has no opinion.
    pub subsumed: Option<bool>,
    /// The patches this layer wants applied.
    pub patches: PatchSet<T>,
}

impl<T> LayerVerdict<T> {
    /// A verdict that expresses no opinion and proposes nothing.
    pub fn silent(kind: LayerKind) -> Self {
        Self {
            kind,
            related: Vec::new(),
            subsumed: None,
            patches: PatchSet::new(),
        }
    }
}

/// The fold of every layer's verdict.
#[derive(Debug, Clone)]
pub struct CombinedVerdict<T> {
    /// Union of per-layer relatedness.
    pub related: BTreeSet<usize>,
    /// AND across expressed subsumption opinions; `None` when no layer had
    /// one.
    pub subsumed: Option<bool>,
    /// Union of per-layer patches.
    pub patches: PatchSet<T>,
}

impl<T: Clone + PartialEq> CombinedVerdict<T> {
    /// Fold verdicts in the order given.
    ///
    /// A candidate is rejected only when *every* layer that expressed an
    /// opinion agrees it is already subsumed; a value stale by vector clock
    /// whose justification is new is therefore kept.
    pub fn fold(verdicts: Vec<LayerVerdict<T>>) -> Self {
        let mut related = BTreeSet::new();
        let mut subsumed: Option<bool> = None;
        let mut patches = PatchSet::new();
        for verdict in verdicts {
            related.extend(verdict.related.iter().copied());
            if let Some(opinion) = verdict.subsumed {
                subsumed = Some(subsumed.unwrap_or(true) && opinion);
            }
            patches.union(verdict.patches);
        }
        Self {
            related,
            subsumed,
            patches,
        }
    }

    /// Whether the fold rejected the candidate outright.
    pub fn is_subsumed(&self) -> bool {
        self.subsumed == Some(true)
    }
}

/// The ordered set of layer policies the engine consults.
///
/// Constructed once and handed to the engine — explicit dependency
/// injection, no process-wide registry.
#[derive(Debug, Clone)]
pub struct LayerPolicySet {
    kinds: Vec<LayerKind>,
    channel_subsumption: bool,
}

impl LayerPolicySet {
    /// Both built-in policies in canonical order, with the
    /// channel-subsumption tie-break enabled.
    pub fn full() -> Self {
        Self {
            kinds: DEFAULT_LAYER_FOLD_ORDER.to_vec(),
            channel_subsumption: true,
        }
    }

    /// Build from configuration, rejecting empty or duplicated layer lists.
    pub fn from_config(config: &MergeConfig) -> LatticeResult<Self> {
        config.validate()?;
        Ok(Self {
            kinds: config.layers.clone(),
            channel_subsumption: config.channel_subsumption,
        })
    }

    /// The policies, in fold order.
    pub fn kinds(&self) -> &[LayerKind] {
        &self.kinds
    }

    /// Whether the channel-subsumption tie-break is enabled.
    pub fn channel_subsumption(&self) -> bool {
        self.channel_subsumption
    }

    /// Evaluate every policy against the candidate, in order.
    pub fn evaluate<T: Clone + PartialEq>(
        &self,
        set: &PatchedValueSet<T>,
        candidate: &AnnotatedValue<T>,
    ) -> Vec<LayerVerdict<T>> {
        self.kinds
            .iter()
            .map(|kind| match kind {
                LayerKind::Clock => {
                    clock_policy::verdict(set, candidate, self.channel_subsumption)
                }
                LayerKind::Support => support_policy::verdict(set, candidate),
            })
            .collect()
    }
}

impl Default for LayerPolicySet {
    fn default() -> Self {
        Self::full()
    }
}
