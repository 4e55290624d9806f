//! A minimal cell holder for the merge boundary.
//!
//! The surrounding propagator network owns activation scheduling, dependency
//! wiring, and neighbor notification; this type is only the content slot
//! plus the configurable merge function, enough for collaborators and tests
//! to drive the engine the way a network would.

use lattice_core::ContentCell;

use crate::annotated::AnnotatedValue;
use crate::engine::{Content, MergeEngine};

/// The merge-function slot a network installs on a cell.
pub type MergeFn<T> = Box<dyn Fn(&Content<T>, &Content<T>) -> Content<T>>;

/// A cell: content plus its merge function.
pub struct Cell<T> {
    content: Content<T>,
    merge: MergeFn<T>,
}

impl<T: Clone + PartialEq + 'static> Cell<T> {
    /// An empty cell with the given merge function installed.
    pub fn with_merge(merge: MergeFn<T>) -> Self {
        Self {
            content: Content::Nothing,
            merge,
        }
    }

    /// An empty cell running the consolidation engine's merge.
    pub fn consolidating(engine: MergeEngine) -> Self {
        Self::with_merge(Box::new(move |content, increment| {
            engine.merge(content, increment)
        }))
    }

    /// Current content.
    pub fn content(&self) -> &Content<T> {
        &self.content
    }

    /// Merge an increment into the cell, swapping the content wholesale.
    ///
    /// The prior content value stays valid for anyone still holding it.
    pub fn receive(&mut self, increment: &Content<T>) -> &Content<T> {
        let next = (self.merge)(&self.content, increment);
        self.content = next;
        &self.content
    }

    /// Merge a single annotated value.
    pub fn receive_value(&mut self, increment: &AnnotatedValue<T>) -> &Content<T> {
        let next = (self.merge)(&self.content, &Content::singleton(increment.clone()));
        self.content = next;
        &self.content
    }
}

impl<T: Clone + PartialEq + 'static> ContentCell for Cell<T> {
    type Content = Content<T>;

    fn content(&self) -> &Content<T> {
        &self.content
    }

    fn set_content(&mut self, content: Content<T>) {
        self.content = content;
    }
}
