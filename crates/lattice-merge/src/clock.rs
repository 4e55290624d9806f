//! Vector clock for causal ordering of cell updates.
//!
//! Each source that feeds a cell owns one channel (counter) of the clock.
//! Merge is per-channel maximum, which forms a join-semilattice:
//! commutative, associative, idempotent. A channel with an explicit zero
//! count is part of the clock's domain; domains matter for the
//! channel-subsumption tie-break (see [`VectorClock::subsumes_channels`]).
//!
//! # Examples
//!
//! ```
//! use lattice_merge::{ClockRelation, VectorClock};
//!
//! let mut a = VectorClock::new();
//! a.increment("sensor-1");
//! a.increment("sensor-1");
//!
//! let mut b = VectorClock::new();
//! b.increment("sensor-2");
//!
//! assert_eq!(a.compare(&b), ClockRelation::Concurrent);
//!
//! let joined = a.merged(&b);
//! assert_eq!(joined.get("sensor-1"), 2);
//! assert_eq!(joined.get("sensor-2"), 1);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Outcome of comparing two clocks, from the left clock's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClockRelation {
    /// The left clock strictly dominates the right one.
    Fresher,
    /// The right clock strictly dominates the left one.
    Staled,
    /// Neither dominates. Equal clocks are concurrent: equality carries no
    /// domination.
    Concurrent,
}

/// A vector clock mapping source ids to per-source counters.
///
/// Clocks are value types: producers derive new clocks with
/// [`forward`](Self::forward) instead of mutating a shared one, and merges
/// build new clocks with [`merged`](Self::merged).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VectorClock {
    /// Source id → counter. Absent source ⇒ counter 0.
    channels: HashMap<String, u64>,
}

impl VectorClock {
    /// Create an empty vector clock.
    pub fn new() -> Self {
        Self {
            channels: HashMap::new(),
        }
    }

    /// Get the current counter for a source (0 if absent).
    pub fn get(&self, source: &str) -> u64 {
        self.channels.get(source).copied().unwrap_or(0)
    }

    /// Returns true if `source` is part of this clock's domain.
    ///
    /// A channel can be in the domain with a zero count (see
    /// [`witness`](Self::witness)); that is not the same as being absent.
    pub fn contains_channel(&self, source: &str) -> bool {
        self.channels.contains_key(source)
    }

    /// Returns all source ids in this clock's domain.
    pub fn channels(&self) -> Vec<&str> {
        self.channels.keys().map(|s| s.as_str()).collect()
    }

    /// Returns the number of channels in the domain.
    pub fn len(&self) -> usize {
        self.channels.len()
    }

    /// Returns true if the domain is empty.
    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }

    /// Increment the counter for the given source by 1.
    pub fn increment(&mut self, source: &str) {
        let entry = self.channels.entry(source.to_string()).or_insert(0);
        *entry += 1;
    }

    /// Record `source` in the domain at its current count without consuming
    /// an update.
    ///
    /// A witnessed-but-never-forwarded channel sits at count 0 and still
    /// participates in [`subsumes_channels`](Self::subsumes_channels).
    pub fn witness(&mut self, source: &str) {
        self.channels.entry(source.to_string()).or_insert(0);
    }

    /// Returns a new clock equal to `self` with `source`'s counter
    /// incremented by 1.
    ///
    /// Used whenever a source emits a new version of its own output.
    pub fn forward(&self, source: &str) -> Self {
        let mut next = self.clone();
        next.increment(source);
        next
    }

    /// Merge with another clock: per-channel maximum over the union of both
    /// domains.
    ///
    /// Satisfies commutativity, associativity, and idempotency. Zero-count
    /// channels survive the union.
    pub fn merge(&mut self, other: &Self) {
        for (source, &count) in &other.channels {
            let entry = self.channels.entry(source.clone()).or_insert(0);
            *entry = (*entry).max(count);
        }
    }

    /// Returns the merge of `self` and `other` as a new clock.
    pub fn merged(&self, other: &Self) -> Self {
        let mut next = self.clone();
        next.merge(other);
        next
    }

    /// Compare against another clock over the union of both domains.
    ///
    /// Returns [`ClockRelation::Fresher`] when `self` strictly dominates
    /// `other`, [`ClockRelation::Staled`] when `other` strictly dominates
    /// `self`, and [`ClockRelation::Concurrent`] otherwise — including when
    /// both clocks are equal, since equality proves no domination.
    pub fn compare(&self, other: &Self) -> ClockRelation {
        let mut left_ahead = false;
        let mut right_ahead = false;

        for (source, &left) in &self.channels {
            let right = other.get(source);
            if left > right {
                left_ahead = true;
            }
            if left < right {
                right_ahead = true;
            }
        }
        for (source, &right) in &other.channels {
            if !self.channels.contains_key(source) && right > 0 {
                right_ahead = true;
            }
        }

        match (left_ahead, right_ahead) {
            (true, false) => ClockRelation::Fresher,
            (false, true) => ClockRelation::Staled,
            _ => ClockRelation::Concurrent,
        }
    }

    /// Returns true if `self`'s domain strictly and properly contains
    /// `other`'s, with `self` at or above `other` on every shared channel.
    ///
    /// This treats a clock that has learned about more sources as strictly
    /// more informative even when [`compare`](Self::compare) reports the
    /// pair concurrent. Whether that holds against genuine concurrent
    /// divergence is an open question; the engine exposes it as a
    /// configuration toggle rather than settling it.
    pub fn subsumes_channels(&self, other: &Self) -> bool {
        if self.channels.len() <= other.channels.len() {
            return false;
        }
        other
            .channels
            .iter()
            .all(|(source, &count)| self.channels.get(source).is_some_and(|&own| own >= count))
    }
}

/// Returns true when `new` proves `old` safe to discard.
///
/// Holds when `new` strictly dominates `old`, or — with the
/// `channel_subsumption` tie-break enabled — when the pair is concurrent but
/// `new`'s domain subsumes `old`'s.
pub fn proves_staled(old: &VectorClock, new: &VectorClock, channel_subsumption: bool) -> bool {
    match old.compare(new) {
        ClockRelation::Staled => true,
        ClockRelation::Concurrent => channel_subsumption && new.subsumes_channels(old),
        ClockRelation::Fresher => false,
    }
}
