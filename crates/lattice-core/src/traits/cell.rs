//! The cell boundary consumed from the propagator network.

/// A network cell as seen by the consolidation engine.
///
/// The network serializes merges per cell: at most one merge of a given cell
/// is in flight at a time, and each merge sees the true prior content.
/// Content is replaced wholesale through [`set_content`](Self::set_content),
/// never mutated in place, so any reader holding the prior content keeps a
/// valid value.
pub trait ContentCell {
    /// The cell-content representation.
    type Content;

    /// Current content.
    fn content(&self) -> &Self::Content;

    /// Replace the content wholesale.
    fn set_content(&mut self, content: Self::Content);
}
