//! Standard optics for the shapes this crate knows about.
//!
//! Each optic is a zero-sized unit struct with a generic [`Optic`]
//! implementation, so the same value works for every element type:
//!
//! | Constructor               | Whole            | Focus      | Changes type |
//! |---------------------------|------------------|------------|--------------|
//! | [`pair_first`]            | `(A, X)`         | `A`        | yes          |
//! | [`pair_second`]           | `(X, A)`         | `A`        | yes          |
//! | [`sequence_head`]         | `NonEmpty<A>`    | `A`        | no           |
//! | [`tree_root`]             | `Tree<A>`        | `A`        | no           |
//! | [`first_two_of_triple`]   | `(A, X, Z)`      | `(A, X)`   | yes          |
//!
//! All of them are total: the shape they need is guaranteed by the whole's
//! type. A plain `Vec` has to pass through [`NonEmpty::try_from`] before
//! [`sequence_head`] applies, and that conversion is where an empty sequence
//! is rejected.

use super::lens::Optic;
use crate::shape::{NonEmpty, Tree};
use crate::typeclass::Functor;

/// Focuses on the first component of a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct First;

impl<A, B, X> Optic<(A, X), (B, X), A, B> for First {
    fn apply<F, K>(&self, action: K, (focus, other): (A, X)) -> F::Applied<(B, X)>
    where
        F: Functor,
        K: FnOnce(A) -> F::Applied<B>,
    {
        F::fmap(action(focus), move |replacement| (replacement, other))
    }
}

/// Focuses on the second component of a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Second;

impl<X, A, B> Optic<(X, A), (X, B), A, B> for Second {
    fn apply<F, K>(&self, action: K, (other, focus): (X, A)) -> F::Applied<(X, B)>
    where
        F: Functor,
        K: FnOnce(A) -> F::Applied<B>,
    {
        F::fmap(action(focus), move |replacement| (other, replacement))
    }
}

/// Focuses on the first element of a non-empty sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Head;

impl<A> Optic<NonEmpty<A>, NonEmpty<A>, A, A> for Head {
    fn apply<F, K>(&self, action: K, source: NonEmpty<A>) -> F::Applied<NonEmpty<A>>
    where
        F: Functor,
        K: FnOnce(A) -> F::Applied<A>,
    {
        let (focus, tail) = source.into_parts();
        F::fmap(action(focus), move |replacement| NonEmpty::new(replacement, tail))
    }
}

/// Focuses on the value stored at the root of a tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Root;

impl<A> Optic<Tree<A>, Tree<A>, A, A> for Root {
    fn apply<F, K>(&self, action: K, source: Tree<A>) -> F::Applied<Tree<A>>
    where
        F: Functor,
        K: FnOnce(A) -> F::Applied<A>,
    {
        match source {
            Tree::Leaf(focus) => F::fmap(action(focus), Tree::Leaf),
            Tree::Branch(focus, subtrees) => F::fmap(action(focus), move |replacement| {
                Tree::Branch(replacement, subtrees)
            }),
        }
    }
}

/// Focuses on the first two components of a triple, as a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FirstTwo;

impl<A, X, B, Y, Z> Optic<(A, X, Z), (B, Y, Z), (A, X), (B, Y)> for FirstTwo {
    fn apply<F, K>(&self, action: K, (first, second, third): (A, X, Z)) -> F::Applied<(B, Y, Z)>
    where
        F: Functor,
        K: FnOnce((A, X)) -> F::Applied<(B, Y)>,
    {
        F::fmap(action((first, second)), move |(first, second)| {
            (first, second, third)
        })
    }
}

/// Returns an optic focusing on the first component of a pair.
///
/// # Example
///
/// ```
/// use optica::optics::{Getter, Optic, pair_first};
///
/// assert_eq!(pair_first().get((1, "x")), 1);
/// assert_eq!(pair_first().set(("a", "b"), 3), (3, "b"));
/// ```
#[must_use]
pub const fn pair_first() -> First {
    First
}

/// Returns an optic focusing on the second component of a pair.
#[must_use]
pub const fn pair_second() -> Second {
    Second
}

/// Returns an optic focusing on the first element of a non-empty sequence.
///
/// # Example
///
/// ```
/// use optica::error::ShapeMismatch;
/// use optica::optics::{Getter, sequence_head};
/// use optica::shape::NonEmpty;
///
/// let sequence = NonEmpty::try_from(vec![3, 4, 5])?;
/// assert_eq!(sequence_head().get(sequence), 3);
///
/// assert!(NonEmpty::<i32>::try_from(Vec::new()).is_err());
/// # Ok::<(), ShapeMismatch>(())
/// ```
#[must_use]
pub const fn sequence_head() -> Head {
    Head
}

/// Returns an optic focusing on the value at the root of a tree.
#[must_use]
pub const fn tree_root() -> Root {
    Root
}

/// Returns an optic focusing on the first two components of a triple.
///
/// # Example
///
/// ```
/// use optica::optics::{Getter, Optic, first_two_of_triple};
///
/// assert_eq!(first_two_of_triple().get((1, "x", true)), (1, "x"));
/// assert_eq!(first_two_of_triple().set((1, "x", true), (9, "y")), (9, "y", true));
/// ```
#[must_use]
pub const fn first_two_of_triple() -> FirstTwo {
    FirstTwo
}

static_assertions::assert_impl_all!(First: Copy, Send, Sync);
static_assertions::assert_impl_all!(Second: Copy, Send, Sync);
static_assertions::assert_impl_all!(Head: Copy, Send, Sync);
static_assertions::assert_impl_all!(Root: Copy, Send, Sync);
static_assertions::assert_impl_all!(FirstTwo: Copy, Send, Sync);
static_assertions::assert_impl_all!(
    super::lens::ComposedOptic<Head, First, (i32, i32), (i32, i32)>: Copy, Send, Sync
);
