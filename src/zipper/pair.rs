//! Zipper over a homogeneous pair.

use super::Zipper;
use crate::error::ShapeMismatch;

/// Which slot of a pair is in focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// The first slot.
    First,
    /// The second slot.
    Second,
}

impl Side {
    /// Returns the other slot.
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

/// The context of a pair zipper: the focused side and the unfocused value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PairContext<A> {
    side: Side,
    other: A,
}

impl<A> PairContext<A> {
    /// Creates a context with `other` in the slot opposite `side`.
    #[inline]
    pub const fn new(side: Side, other: A) -> Self {
        Self { side, other }
    }

    /// Returns the focused side.
    #[inline]
    pub const fn side(&self) -> Side {
        self.side
    }

    /// Returns the unfocused value.
    #[inline]
    pub const fn other(&self) -> &A {
        &self.other
    }
}

/// A zipper focused on one slot of a pair `(A, A)`.
///
/// # Examples
///
/// ```rust
/// use optica::zipper::{PairZipper, Side, Zipper};
///
/// let zipper = PairZipper::focus_second((1, 2));
/// assert_eq!(*zipper.focus(), 2);
/// assert_eq!(zipper.side(), Side::Second);
/// assert_eq!(zipper.write(20).reconstruct(), (1, 20));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PairZipper<A> {
    focus: A,
    context: PairContext<A>,
}

impl<A> PairZipper<A> {
    /// Focuses on the first slot.
    pub fn focus_first((first, second): (A, A)) -> Self {
        Self::from_parts(first, PairContext::new(Side::First, second))
    }

    /// Focuses on the second slot.
    pub fn focus_second((first, second): (A, A)) -> Self {
        Self::from_parts(second, PairContext::new(Side::Second, first))
    }

    /// Returns the focused side.
    #[inline]
    pub const fn side(&self) -> Side {
        self.context.side
    }

    /// Moves the focus to the other slot.
    #[must_use]
    pub fn flip(self) -> Self {
        let PairContext { side, other } = self.context;
        log::trace!("PairZipper: focus moved to {:?}", side.opposite());
        Self::from_parts(other, PairContext::new(side.opposite(), self.focus))
    }
}

impl<A> Zipper for PairZipper<A> {
    type Whole = (A, A);
    type Focus = A;
    type Context = PairContext<A>;

    /// A pair always has a first slot; this never fails.
    fn focus_on(whole: (A, A)) -> Result<Self, ShapeMismatch> {
        Ok(Self::focus_first(whole))
    }

    fn into_parts(self) -> (A, PairContext<A>) {
        (self.focus, self.context)
    }

    fn from_parts(focus: A, context: PairContext<A>) -> Self {
        Self { focus, context }
    }

    fn plug(focus: A, context: PairContext<A>) -> (A, A) {
        match context.side {
            Side::First => (focus, context.other),
            Side::Second => (context.other, focus),
        }
    }

    fn focus(&self) -> &A {
        &self.focus
    }
}
