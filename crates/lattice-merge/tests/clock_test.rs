//! Unit tests for the vector-clock algebra.
//!
//! Covers: increment/forward, witness, merge laws, compare, channel
//! subsumption, and staleness proofs.

use lattice_merge::{proves_staled, ClockRelation, VectorClock};

fn clock(entries: &[(&str, u64)]) -> VectorClock {
    let mut clock = VectorClock::new();
    for (source, count) in entries {
        if *count == 0 {
            clock.witness(source);
        }
        for _ in 0..*count {
            clock.increment(source);
        }
    }
    clock
}

// =============================================================================
// Increment / forward / witness
// =============================================================================

#[test]
fn increment_bumps_single_channel() {
    let mut clock = VectorClock::new();
    assert_eq!(clock.get("s1"), 0);

    clock.increment("s1");
    assert_eq!(clock.get("s1"), 1);

    clock.increment("s1");
    clock.increment("s2");
    assert_eq!(clock.get("s1"), 2);
    assert_eq!(clock.get("s2"), 1);
}

#[test]
fn forward_returns_new_clock_and_leaves_original_untouched() {
    let original = clock(&[("s1", 1)]);
    let forwarded = original.forward("s1");

    assert_eq!(original.get("s1"), 1);
    assert_eq!(forwarded.get("s1"), 2);
}

#[test]
fn forward_defaults_missing_channel_to_zero() {
    let forwarded = VectorClock::new().forward("s9");
    assert_eq!(forwarded.get("s9"), 1);
    assert_eq!(forwarded.len(), 1);
}

#[test]
fn witness_adds_channel_at_zero() {
    let mut clock = VectorClock::new();
    clock.increment("s1");
    clock.witness("s2");

    assert!(clock.contains_channel("s2"));
    assert_eq!(clock.get("s2"), 0);
    assert_eq!(clock.len(), 2);
}

#[test]
fn witness_does_not_reset_existing_count() {
    let mut clock = clock(&[("s1", 3)]);
    clock.witness("s1");
    assert_eq!(clock.get("s1"), 3);
}

// =============================================================================
// Merge: per-channel maximum, semilattice laws
// =============================================================================

#[test]
fn merge_takes_component_wise_max() {
    let a = clock(&[("s1", 2), ("s2", 1)]);
    let b = clock(&[("s1", 1), ("s2", 2), ("s3", 1)]);

    let joined = a.merged(&b);
    assert_eq!(joined.get("s1"), 2);
    assert_eq!(joined.get("s2"), 2);
    assert_eq!(joined.get("s3"), 1);
}

#[test]
fn merge_preserves_zero_count_channels() {
    let a = clock(&[("s1", 1)]);
    let b = clock(&[("s2", 0)]);

    let joined = a.merged(&b);
    assert!(joined.contains_channel("s2"));
    assert_eq!(joined.get("s2"), 0);
}

#[test]
fn merge_commutativity() {
    let a = clock(&[("s1", 2), ("s2", 1)]);
    let b = clock(&[("s2", 3), ("s3", 1)]);

    assert_eq!(a.merged(&b), b.merged(&a));
}

#[test]
fn merge_associativity() {
    let a = clock(&[("s1", 1)]);
    let b = clock(&[("s2", 2)]);
    let c = clock(&[("s1", 3), ("s3", 1)]);

    assert_eq!(a.merged(&b.merged(&c)), a.merged(&b).merged(&c));
}

#[test]
fn merge_idempotency() {
    let a = clock(&[("s1", 2), ("s2", 1)]);
    assert_eq!(a.merged(&a), a);
}

// =============================================================================
// Compare
// =============================================================================

#[test]
fn compare_strict_domination_is_fresher() {
    let newer = clock(&[("s1", 3)]);
    let older = clock(&[("s1", 1)]);

    assert_eq!(newer.compare(&older), ClockRelation::Fresher);
    assert_eq!(older.compare(&newer), ClockRelation::Staled);
}

#[test]
fn compare_domination_across_channels() {
    let newer = clock(&[("s1", 1), ("s2", 1)]);
    let older = clock(&[("s1", 1)]);

    assert_eq!(newer.compare(&older), ClockRelation::Fresher);
    assert_eq!(older.compare(&newer), ClockRelation::Staled);
}

#[test]
fn compare_disjoint_channels_is_concurrent() {
    let a = clock(&[("s1", 1)]);
    let b = clock(&[("s2", 1)]);

    assert_eq!(a.compare(&b), ClockRelation::Concurrent);
    assert_eq!(b.compare(&a), ClockRelation::Concurrent);
}

#[test]
fn compare_mixed_ahead_behind_is_concurrent() {
    let a = clock(&[("s1", 2), ("s2", 1)]);
    let b = clock(&[("s1", 1), ("s2", 2)]);

    assert_eq!(a.compare(&b), ClockRelation::Concurrent);
}

#[test]
fn compare_equal_clocks_is_concurrent() {
    let a = clock(&[("s1", 2)]);
    let b = clock(&[("s1", 2)]);

    // Equality proves no domination.
    assert_eq!(a.compare(&b), ClockRelation::Concurrent);
}

#[test]
fn compare_treats_explicit_zero_like_absent() {
    let a = clock(&[("s1", 1), ("s2", 0)]);
    let b = clock(&[("s1", 1)]);

    assert_eq!(a.compare(&b), ClockRelation::Concurrent);
}

// =============================================================================
// Channel subsumption
// =============================================================================

#[test]
fn subsumes_channels_requires_strict_domain_superset() {
    let wide = clock(&[("s1", 2), ("s2", 0)]);
    let narrow = clock(&[("s1", 2)]);

    assert!(wide.subsumes_channels(&narrow));
    assert!(!narrow.subsumes_channels(&wide));
    // Equal domains never subsume.
    assert!(!narrow.subsumes_channels(&narrow.clone()));
}

#[test]
fn subsumes_channels_requires_at_least_equal_counts() {
    let wide_but_behind = clock(&[("s1", 1), ("s2", 5)]);
    let narrow = clock(&[("s1", 2)]);

    assert!(!wide_but_behind.subsumes_channels(&narrow));
}

#[test]
fn subsumes_channels_fails_on_disjoint_domains() {
    let a = clock(&[("s1", 1), ("s2", 1)]);
    let b = clock(&[("s3", 1)]);

    assert!(!a.subsumes_channels(&b));
}

// =============================================================================
// Staleness proofs
// =============================================================================

#[test]
fn proves_staled_on_strict_domination() {
    let old = clock(&[("s1", 1)]);
    let new = clock(&[("s1", 3)]);

    assert!(proves_staled(&old, &new, true));
    assert!(!proves_staled(&new, &old, true));
}

#[test]
fn proves_staled_on_concurrent_with_channel_subsumption() {
    // Same count on the shared channel, but the new clock has witnessed an
    // extra source: compare says concurrent, subsumption breaks the tie.
    let old = clock(&[("s1", 2)]);
    let new = clock(&[("s1", 2), ("s2", 0)]);

    assert_eq!(old.compare(&new), ClockRelation::Concurrent);
    assert!(proves_staled(&old, &new, true));
}

#[test]
fn proves_staled_heuristic_can_be_disabled() {
    let old = clock(&[("s1", 2)]);
    let new = clock(&[("s1", 2), ("s2", 0)]);

    assert!(!proves_staled(&old, &new, false));
    // Strict domination still proves staleness with the heuristic off.
    assert!(proves_staled(&old, &old.forward("s1"), false));
}

#[test]
fn proves_staled_rejects_genuine_concurrency() {
    let a = clock(&[("s1", 1)]);
    let b = clock(&[("s2", 1)]);

    assert!(!proves_staled(&a, &b, true));
    assert!(!proves_staled(&b, &a, true));
}

#[test]
fn proves_staled_empty_clock_yields_to_any_nonempty() {
    let bare = VectorClock::new();
    let versioned = clock(&[("s1", 1)]);

    assert!(proves_staled(&bare, &versioned, true));
    assert!(!proves_staled(&versioned, &bare, true));
}
