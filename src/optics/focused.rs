//! Type-preserving focused values.
//!
//! A [`Focused`] value generalizes every zipper in [`crate::zipper`]: instead
//! of a shape-specific context it stores a reconstruction function that turns
//! a replacement focus back into a whole.
//!
//! # Laws
//!
//! **GetPut Law**: rebuilding with the current focus returns the original.
//!
//! ```text
//! let focus = focused.get().clone();
//! focused.set(focus) == whole
//! ```
//!
//! # Composition
//!
//! A *focuser* is a function `S -> Focused<S, A>`. Two focusers compose with
//! [`compose`], but only because the inner reconstruction hands back exactly
//! the `A` the outer reconstruction expects. Changing the focus type somewhere
//! in the chain needs [`Generalized`](super::Generalized) instead.
//!
//! # Example
//!
//! ```
//! use optica::optics::focused;
//!
//! let first_of_first = focused::compose(focused::first, focused::first);
//! let whole = ((1, "inner"), "outer");
//!
//! let target = first_of_first(whole);
//! assert_eq!(*target.get(), 1);
//! assert_eq!(target.modify(|n| n + 41), ((42, "inner"), "outer"));
//! ```

use crate::shape::{NonEmpty, Tree};
use crate::zipper::Zipper;

/// A focus paired with a function that rebuilds the whole around a
/// replacement of the same type.
///
/// # Type Parameters
///
/// - `S`: The whole
/// - `A`: The focus
pub struct Focused<S, A> {
    focus: A,
    rebuild: Box<dyn FnOnce(A) -> S>,
}

impl<S, A> Focused<S, A> {
    /// Creates a focused value from a focus and a reconstruction function.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::Focused;
    ///
    /// let focused = Focused::new(3, |n| (n, "rest"));
    /// assert_eq!(focused.set(4), (4, "rest"));
    /// ```
    pub fn new<R>(focus: A, rebuild: R) -> Self
    where
        R: FnOnce(A) -> S + 'static,
    {
        Self {
            focus,
            rebuild: Box::new(rebuild),
        }
    }

    /// Converts a zipper into a focused value with the same focus.
    ///
    /// The zipper's context is captured by the reconstruction function.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::Focused;
    /// use optica::zipper::{SequenceZipper, Zipper};
    ///
    /// let zipper = SequenceZipper::focus_at(vec![1, 2, 3], 1).unwrap();
    /// let focused = Focused::from_zipper(zipper);
    /// assert_eq!(focused.modify(|n| n * 5), vec![1, 10, 3]);
    /// ```
    pub fn from_zipper<Z>(zipper: Z) -> Self
    where
        Z: Zipper<Whole = S, Focus = A> + 'static,
        Z::Context: 'static,
    {
        let (focus, context) = zipper.into_parts();
        Self::new(focus, move |replacement| Z::plug(replacement, context))
    }

    /// Returns a reference to the focus.
    #[inline]
    pub const fn get(&self) -> &A {
        &self.focus
    }

    /// Applies `function` to the focus and rebuilds the whole.
    pub fn modify<F>(self, function: F) -> S
    where
        F: FnOnce(A) -> A,
    {
        (self.rebuild)(function(self.focus))
    }

    /// Replaces the focus with `value` and rebuilds the whole.
    pub fn set(self, value: A) -> S {
        (self.rebuild)(value)
    }

    /// Splits the focused value into its focus and reconstruction function.
    pub fn into_parts(self) -> (A, Box<dyn FnOnce(A) -> S>) {
        (self.focus, self.rebuild)
    }
}

impl<S, A: std::fmt::Debug> std::fmt::Debug for Focused<S, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Focused")
            .field("focus", &self.focus)
            .finish_non_exhaustive()
    }
}

/// Composes two type-preserving focusers.
///
/// The outer focus becomes the inner whole. The composed reconstruction runs
/// the inner reconstruction and feeds its result, which must be an `A`, to the
/// outer one.
///
/// # Arguments
///
/// * `outer` - Focuses `S` on an `A`
/// * `inner` - Focuses `A` on a `C`
///
/// # Returns
///
/// A focuser of `S` on `C`
pub fn compose<S, A, C, Outer, Inner>(outer: Outer, inner: Inner) -> impl Fn(S) -> Focused<S, C>
where
    Outer: Fn(S) -> Focused<S, A>,
    Inner: Fn(A) -> Focused<A, C>,
    S: 'static,
    A: 'static,
    C: 'static,
{
    move |source| {
        let (middle, rebuild_outer) = outer(source).into_parts();
        let (focus, rebuild_inner) = inner(middle).into_parts();
        Focused::new(focus, move |replacement| {
            rebuild_outer(rebuild_inner(replacement))
        })
    }
}

/// Focuses on the first component of a pair.
pub fn first<A: 'static, X: 'static>((focus, other): (A, X)) -> Focused<(A, X), A> {
    Focused::new(focus, move |replacement| (replacement, other))
}

/// Focuses on the second component of a pair.
pub fn second<X: 'static, A: 'static>((other, focus): (X, A)) -> Focused<(X, A), A> {
    Focused::new(focus, move |replacement| (other, replacement))
}

/// Focuses on the first element of a non-empty sequence.
pub fn head<A: 'static>(sequence: NonEmpty<A>) -> Focused<NonEmpty<A>, A> {
    let (focus, tail) = sequence.into_parts();
    Focused::new(focus, move |replacement| NonEmpty::new(replacement, tail))
}

/// Focuses on the value at the root of a tree.
pub fn root<A: 'static>(tree: Tree<A>) -> Focused<Tree<A>, A> {
    match tree {
        Tree::Leaf(focus) => Focused::new(focus, Tree::Leaf),
        Tree::Branch(focus, subtrees) => {
            Focused::new(focus, move |replacement| Tree::Branch(replacement, subtrees))
        }
    }
}
