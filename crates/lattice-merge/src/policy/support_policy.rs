//! Support layer policy.
//!
//! Two values are related when their base values are logically equal: they
//! are the same claim under different justifications. The candidate is
//! subsumed when every related element already holds the claim on a
//! subset-or-equal support — nothing new is learned. Elements without a
//! support layer are read through the empty set, which is maximally strong:
//! an unconditional value rejects any justified duplicate.

use lattice_core::LayerKind;

use crate::annotated::AnnotatedValue;
use crate::patch::{Patch, PatchSet};
use crate::policy::LayerVerdict;
use crate::value_set::PatchedValueSet;

/// Evaluate the support layer against a candidate.
pub fn verdict<T: Clone + PartialEq>(
    set: &PatchedValueSet<T>,
    candidate: &AnnotatedValue<T>,
) -> LayerVerdict<T> {
    let Some(candidate_support) = candidate.support() else {
        return LayerVerdict::silent(LayerKind::Support);
    };

    let related: Vec<usize> = set
        .elements()
        .iter()
        .enumerate()
        .filter(|(_, element)| element.base() == candidate.base())
        .map(|(index, _)| index)
        .collect();

    if related.is_empty() {
        return LayerVerdict {
            kind: LayerKind::Support,
            related,
            subsumed: None,
            patches: PatchSet::new(),
        };
    }

    let subsumed = related.iter().all(|&index| {
        set.elements()[index]
            .support_or_default()
            .is_subset_of(candidate_support)
    });

    let mut patches = PatchSet::new();
    if !subsumed {
        for &index in &related {
            let element_support = set.elements()[index].support_or_default();
            if candidate_support.is_stronger_than(&element_support) {
                patches.push(Patch::Remove {
                    target: set.elements()[index].base().clone(),
                });
            }
        }
        patches.push(Patch::Join {
            target: candidate.base().clone(),
        });
    }

    LayerVerdict {
        kind: LayerKind::Support,
        related,
        subsumed: Some(subsumed),
        patches,
    }
}
