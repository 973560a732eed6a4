//! Zippers: a focus paired with the context needed to rebuild the whole.
//!
//! A zipper splits a structure into the part currently looked at (the
//! *focus*) and everything else (the *context*). Plugging any focus back into
//! the context yields a whole of the original shape. Each structural shape has
//! its own zipper and its own context type:
//!
//! - [`PairZipper`]: one slot of a homogeneous pair, plus the other slot
//! - [`SequenceZipper`]: one element of a sequence, plus its prefix and suffix
//! - [`TreeZipper`]: one subtree of a [`Tree`](crate::shape::Tree), plus the
//!   path back to the root
//!
//! Zippers of different shapes do not compose: a pair zipper cannot focus
//! into a tree stored in its slot. Composable addresses are the job of the
//! [`optics`](crate::optics) module.
//!
//! # Round-trip identity
//!
//! Every zipper satisfies:
//!
//! ```text
//! Z::focus_on(whole)?.reconstruct() == whole
//! ```
//!
//! # Example
//!
//! ```
//! use optica::zipper::{SequenceZipper, Zipper};
//!
//! let zipper = SequenceZipper::focus_on(vec![1, 2, 3]).unwrap();
//! let zipper = zipper.right().unwrap().update(|n| n * 10);
//! assert_eq!(zipper.reconstruct(), vec![1, 20, 3]);
//! ```

mod pair;
mod sequence;
mod tree;

pub use pair::{PairContext, PairZipper, Side};
pub use sequence::{SequenceContext, SequenceZipper};
pub use tree::{Direction, TreeContext, TreeStep, TreeZipper};

use crate::error::ShapeMismatch;

/// A focus within a structure together with the context around it.
///
/// Updates are type-preserving: the replacement focus must have the same type
/// as the original, since the context only knows how to rebuild a whole of
/// the original shape.
///
/// # Laws
///
/// 1. **Round trip**: `Z::focus_on(whole)?.reconstruct() == whole`
/// 2. **Parts**: `Z::from_parts(z.into_parts())` is equivalent to `z`
pub trait Zipper: Sized {
    /// The structure the zipper was opened on.
    type Whole;
    /// The part currently in focus.
    type Focus;
    /// Everything needed to rebuild the whole around a focus.
    type Context;

    /// Opens a zipper on the whole, at the shape's initial focus.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeMismatch`] if the whole has no initial focus, such as an
    /// empty sequence.
    fn focus_on(whole: Self::Whole) -> Result<Self, ShapeMismatch>;

    /// Splits the zipper into its focus and context.
    fn into_parts(self) -> (Self::Focus, Self::Context);

    /// Reassembles a zipper from a focus and a context.
    fn from_parts(focus: Self::Focus, context: Self::Context) -> Self;

    /// Rebuilds a whole by plugging a focus into a context.
    fn plug(focus: Self::Focus, context: Self::Context) -> Self::Whole;

    /// Returns a reference to the focus.
    fn focus(&self) -> &Self::Focus;

    /// Rebuilds the whole around the current focus.
    fn reconstruct(self) -> Self::Whole {
        let (focus, context) = self.into_parts();
        Self::plug(focus, context)
    }

    /// Replaces the focus with the result of applying `function` to it.
    fn update<F>(self, function: F) -> Self
    where
        F: FnOnce(Self::Focus) -> Self::Focus,
    {
        let (focus, context) = self.into_parts();
        Self::from_parts(function(focus), context)
    }

    /// Replaces the focus with `focus`.
    fn write(self, focus: Self::Focus) -> Self {
        self.update(|_| focus)
    }
}
