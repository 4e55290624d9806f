//! Vector-clock layer policy.
//!
//! An element is related to the candidate when a staleness proof exists in
//! either direction: the candidate proving the element stale calls for its
//! removal, and an element proving the candidate stale means the candidate
//! is old news. Elements without a clock layer are read through the empty
//! clock, so an unversioned value yields to any versioned one.

use lattice_core::LayerKind;

use crate::annotated::AnnotatedValue;
use crate::clock::proves_staled;
use crate::patch::{Patch, PatchSet};
use crate::policy::LayerVerdict;
use crate::value_set::PatchedValueSet;

/// Evaluate the clock layer against a candidate.
pub fn verdict<T: Clone + PartialEq>(
    set: &PatchedValueSet<T>,
    candidate: &AnnotatedValue<T>,
    channel_subsumption: bool,
) -> LayerVerdict<T> {
    let Some(candidate_clock) = candidate.clock() else {
        return LayerVerdict::silent(LayerKind::Clock);
    };

    let mut related = Vec::new();
    let mut stale = Vec::new();
    let mut dominated = false;

    for (index, element) in set.elements().iter().enumerate() {
        let element_clock = element.clock_or_default();
        let element_stale = proves_staled(&element_clock, candidate_clock, channel_subsumption);
        let candidate_stale = proves_staled(candidate_clock, &element_clock, channel_subsumption);

        if element_stale || candidate_stale {
            related.push(index);
        }
        if element_stale {
            stale.push(index);
        }
        if candidate_stale {
            dominated = true;
        }
    }

    if related.is_empty() {
        return LayerVerdict {
            kind: LayerKind::Clock,
            related,
            subsumed: None,
            patches: PatchSet::new(),
        };
    }

    let mut patches = PatchSet::new();
    if !dominated {
        for &index in &stale {
            patches.push(Patch::Remove {
                target: set.elements()[index].base().clone(),
            });
        }
        patches.push(Patch::Join {
            target: candidate.base().clone(),
        });
    }

    LayerVerdict {
        kind: LayerKind::Clock,
        related,
        subsumed: Some(dominated),
        patches,
    }
}
