//! Values carrying annotation layers.
//!
//! An [`AnnotatedValue`] is a base value plus at most one layer per
//! [`LayerKind`]: the causal version ([`VectorClock`]) and the justification
//! strength ([`SupportSet`]). A producer attaches layers before the value
//! reaches a cell; after that the value never changes — updates make new
//! values.
//!
//! # Examples
//!
//! ```
//! use lattice_merge::{AnnotatedValue, SupportSet, VectorClock};
//!
//! let value = AnnotatedValue::new(42)
//!     .with_clock(VectorClock::new().forward("sensor-1"))
//!     .with_support(SupportSet::from_premises(["calibration-run-7"]));
//!
//! assert_eq!(*value.base(), 42);
//! assert_eq!(value.clock().unwrap().get("sensor-1"), 1);
//! ```

use serde::{Deserialize, Serialize};

use lattice_core::LayerKind;

use crate::clock::VectorClock;
use crate::support::SupportSet;

/// One annotation layer.
///
/// The set of kinds is closed: dispatch sites match exhaustively instead of
/// probing runtime type tags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum Layer {
    /// Causal version over source channels.
    Clock(VectorClock),
    /// Justification strength from the belief system.
    Support(SupportSet),
}

impl Layer {
    /// The kind tag of this layer.
    pub fn kind(&self) -> LayerKind {
        match self {
            Layer::Clock(_) => LayerKind::Clock,
            Layer::Support(_) => LayerKind::Support,
        }
    }
}

/// A base value plus its annotation layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedValue<T> {
    base: T,
    /// At most one layer per kind; an absent kind reads as that kind's
    /// default where a comparison needs one.
    layers: Vec<Layer>,
}

impl<T> AnnotatedValue<T> {
    /// A bare value with no annotation layers.
    pub fn new(base: T) -> Self {
        Self {
            base,
            layers: Vec::new(),
        }
    }

    /// Attach (or replace) the clock layer.
    pub fn with_clock(mut self, clock: VectorClock) -> Self {
        self.layers.retain(|layer| layer.kind() != LayerKind::Clock);
        self.layers.push(Layer::Clock(clock));
        self
    }

    /// Attach (or replace) the support layer.
    pub fn with_support(mut self, support: SupportSet) -> Self {
        self.layers.retain(|layer| layer.kind() != LayerKind::Support);
        self.layers.push(Layer::Support(support));
        self
    }

    /// The base value.
    pub fn base(&self) -> &T {
        &self.base
    }

    /// Consume the value, returning the base.
    pub fn into_base(self) -> T {
        self.base
    }

    /// The attached layers.
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// The layer of the given kind, if attached.
    pub fn layer(&self, kind: LayerKind) -> Option<&Layer> {
        self.layers.iter().find(|layer| layer.kind() == kind)
    }

    /// The clock layer, if attached.
    pub fn clock(&self) -> Option<&VectorClock> {
        match self.layer(LayerKind::Clock) {
            Some(Layer::Clock(clock)) => Some(clock),
            _ => None,
        }
    }

    /// The support layer, if attached.
    pub fn support(&self) -> Option<&SupportSet> {
        match self.layer(LayerKind::Support) {
            Some(Layer::Support(support)) => Some(support),
            _ => None,
        }
    }

    /// The clock this value is compared under: its own, or the empty clock.
    pub fn clock_or_default(&self) -> VectorClock {
        self.clock().cloned().unwrap_or_default()
    }

    /// The support this value is compared under: its own, or the empty set.
    ///
    /// The empty set is maximally strong: an unannotated value reads as
    /// unconditional.
    pub fn support_or_default(&self) -> SupportSet {
        self.support().cloned().unwrap_or_default()
    }
}
