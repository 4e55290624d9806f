//! # lattice-merge
//!
//! The layered value-set consolidation engine for propagator cells. When a
//! cell receives new information while already holding some, this crate
//! decides whether the increment replaces, coexists with, or is rejected by
//! what is held — and converges to the same result no matter the order in
//! which independent sources deliver their updates.
//!
//! ## Building blocks
//!
//! - [`VectorClock`] — causal ordering over per-source channels
//! - [`SupportSet`] — justification strength from the belief system
//! - [`AnnotatedValue`] / [`Layer`] — a base value plus its annotation layers
//! - [`Patch`] / [`PatchSet`] — join/remove instructions from a scan
//! - [`PatchedValueSet`] — cell content, updated only through patches
//! - [`LayerPolicySet`] — the per-layer policies, folded with union/AND/union
//! - [`MergeEngine`] / [`Content`] — the merge entry point and the sentinels
//! - [`Cell`] — a minimal content-plus-merge-slot holder
//!
//! ## Merge guarantees
//!
//! 1. **Idempotence**: `merge(merge(c, v), v) == merge(c, v)`
//! 2. **Order convergence**: increments from independent sources reach the
//!    same observable base values in any arrival order
//! 3. **Purity**: inputs are never mutated; content is replaced wholesale

pub mod annotated;
pub mod cell;
pub mod clock;
pub mod engine;
pub mod patch;
pub mod policy;
pub mod support;
pub mod value_set;

// Re-export public API
pub use annotated::{AnnotatedValue, Layer};
pub use cell::{Cell, MergeFn};
pub use clock::{proves_staled, ClockRelation, VectorClock};
pub use engine::{Content, MergeEngine};
pub use patch::{Patch, PatchSet};
pub use policy::{CombinedVerdict, LayerPolicySet, LayerVerdict};
pub use support::SupportSet;
pub use value_set::PatchedValueSet;
