//! Polymorphic optics: lenses as transformers over any functor.
//!
//! An [`Optic<S, T, A, B>`](Optic) turns an action on the focus,
//! `A -> F<B>`, into an action on the whole, `S -> F<T>`, for *every*
//! [`Functor`] family `F`. The family is picked by whoever applies the optic,
//! never by the optic itself, so an implementation cannot inspect or discard
//! the `F<B>` it receives; all it can do is map its reconstruction over it.
//!
//! Two choices of `F` give the primitive operations:
//!
//! - [`Getter::get`] runs the optic in [`ConstFamily`], whose `fmap` keeps the
//!   payload and skips the reconstruction, so the focus comes back out.
//! - [`Optic::modify`] runs it in [`IdentityFamily`], whose `fmap` applies the
//!   reconstruction to the transformed focus.
//!
//! # Composition
//!
//! Because every optic shares the same calling convention, composing two of
//! them is composing their transformers: the inner optic lifts the action to
//! its whole, and the outer optic lifts that again.
//!
//! ```text
//! compose(outer, inner).lift(action) == outer.lift(inner.lift(action))
//! ```
//!
//! [`ComposedOptic::apply`] is exactly that expression. Composition is
//! associative, and [`identity`] is its unit.
//!
//! # Laws
//!
//! 1. **GetPut Law**: `optic.set(source.clone(), optic.get(source.clone())) == source`
//! 2. **PutGet Law**: `optic.get(optic.set(source, value.clone())) == value`
//! 3. **PutPut Law**: `optic.set(optic.set(source.clone(), v1), v2.clone()) == optic.set(source, v2)`
//!
//! # Example
//!
//! ```
//! use optica::optics::{Getter, Optic, compose, pair_first, sequence_head};
//! use optica::shape::NonEmpty;
//!
//! let first_of_head = compose(sequence_head(), pair_first());
//! let sequence = NonEmpty::try_from(vec![(1, "x"), (2, "y")]).unwrap();
//!
//! assert_eq!(first_of_head.get(sequence.clone()), 1);
//!
//! let updated = first_of_head.modify(sequence, |n: i32| n * 100);
//! assert_eq!(Vec::from(updated), vec![(100, "x"), (2, "y")]);
//! ```

use std::marker::PhantomData;

use crate::typeclass::{Const, ConstFamily, Functor, Identity, IdentityFamily};

/// A composable, possibly type-changing address into a whole.
///
/// # Type Parameters
///
/// - `S`: The source whole
/// - `T`: The whole after the focus is replaced
/// - `A`: The focus read from `S`
/// - `B`: The replacement that yields `T`
///
/// # Implementing
///
/// Only [`Optic::apply`] is required. An implementation splits the source
/// into focus and context, runs the action on the focus, and maps a
/// reconstruction from the context over the result:
///
/// ```
/// use optica::optics::{Getter, Optic};
/// use optica::typeclass::Functor;
///
/// struct Third;
///
/// impl<X, Y, A, B> Optic<(X, Y, A), (X, Y, B), A, B> for Third {
///     fn apply<F, K>(&self, action: K, (x, y, a): (X, Y, A)) -> F::Applied<(X, Y, B)>
///     where
///         F: Functor,
///         K: FnOnce(A) -> F::Applied<B>,
///     {
///         F::fmap(action(a), move |b| (x, y, b))
///     }
/// }
///
/// assert_eq!(Third.get((1, 2, 3)), 3);
/// assert_eq!(Third.set((1, 2, 3), "three"), (1, 2, "three"));
/// ```
pub trait Optic<S, T, A, B> {
    /// Lifts `action` on the focus to the whole, in the functor `F`.
    ///
    /// # Arguments
    ///
    /// * `action` - The effectful action on the focus
    /// * `source` - The whole to focus into
    ///
    /// # Returns
    ///
    /// The rebuilt whole inside `F`
    fn apply<F, K>(&self, action: K, source: S) -> F::Applied<T>
    where
        F: Functor,
        K: FnOnce(A) -> F::Applied<B>;

    /// Returns `apply` partially applied to `action`: a function on wholes.
    fn lift<F, K>(&self, action: K) -> impl FnOnce(S) -> F::Applied<T>
    where
        F: Functor,
        K: FnOnce(A) -> F::Applied<B>,
    {
        move |source| self.apply::<F, K>(action, source)
    }

    /// Applies `function` to the focus and rebuilds the whole.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::{Optic, tree_root};
    /// use optica::shape::Tree;
    ///
    /// assert_eq!(tree_root().modify(Tree::leaf(5), |n: i32| n + 1), Tree::leaf(6));
    /// ```
    fn modify<G>(&self, source: S, function: G) -> T
    where
        G: FnOnce(A) -> B,
    {
        self.apply::<IdentityFamily, _>(|focus| Identity::new(function(focus)), source)
            .into_inner()
    }

    /// Replaces the focus with `value` and rebuilds the whole.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::{Optic, pair_first};
    ///
    /// assert_eq!(pair_first().set(("a", "b"), 3), (3, "b"));
    /// ```
    fn set(&self, source: S, value: B) -> T {
        self.modify(source, |_| value)
    }
}

/// Reading through an optic.
///
/// Reading never rebuilds anything, so only the type-preserving instance of
/// an optic is needed. Blanket-implemented for every `Optic<S, S, A, A>`,
/// which pins the replacement type of polymorphic optics to the focus type.
pub trait Getter<S, A> {
    /// Reads the focus by running the optic in the constant functor.
    fn get(&self, source: S) -> A;
}

impl<S, A, O> Getter<S, A> for O
where
    O: Optic<S, S, A, A> + ?Sized,
{
    fn get(&self, source: S) -> A {
        self.apply::<ConstFamily<A>, _>(Const::<A, A>::new, source)
            .into_inner()
    }
}

/// Two optics chained so that the first one's focus is the second one's
/// whole.
///
/// # Type Parameters
///
/// - `O`: The outer optic
/// - `I`: The inner optic
/// - `A`: The intermediate focus (outer focus, inner source)
/// - `B`: The intermediate replacement (inner result, outer replacement)
///
/// `A` and `B` are fixed by the first use of a composed value, so one value
/// cannot be used both to read and to write with a different type.
pub struct ComposedOptic<O, I, A, B> {
    outer: O,
    inner: I,
    _marker: PhantomData<fn(A) -> B>,
}

impl<O, I, A, B> ComposedOptic<O, I, A, B> {
    /// Creates a new composed optic.
    #[must_use]
    pub const fn new(outer: O, inner: I) -> Self {
        Self {
            outer,
            inner,
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, U, V, O, I> Optic<S, T, U, V> for ComposedOptic<O, I, A, B>
where
    O: Optic<S, T, A, B>,
    I: Optic<A, B, U, V>,
{
    fn apply<F, K>(&self, action: K, source: S) -> F::Applied<T>
    where
        F: Functor,
        K: FnOnce(U) -> F::Applied<V>,
    {
        self.outer.lift::<F, _>(self.inner.lift::<F, K>(action))(source)
    }
}

impl<O: Clone, I: Clone, A, B> Clone for ComposedOptic<O, I, A, B> {
    fn clone(&self) -> Self {
        Self::new(self.outer.clone(), self.inner.clone())
    }
}

impl<O: Copy, I: Copy, A, B> Copy for ComposedOptic<O, I, A, B> {}

impl<O: std::fmt::Debug, I: std::fmt::Debug, A, B> std::fmt::Debug for ComposedOptic<O, I, A, B> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedOptic")
            .field("outer", &self.outer)
            .field("inner", &self.inner)
            .finish()
    }
}

/// Composes two optics.
///
/// # Arguments
///
/// * `outer` - Focuses the whole on an intermediate part
/// * `inner` - Focuses the intermediate part on the final focus
///
/// # Example
///
/// ```
/// use optica::optics::{Getter, Optic, compose, pair_first, pair_second};
///
/// let second_of_first = compose(pair_first(), pair_second());
/// assert_eq!(second_of_first.get(((1, 'b'), 3.0)), 'b');
///
/// let renamed = compose(pair_first(), pair_second()).set(((1, 'b'), 3.0), "bee");
/// assert_eq!(renamed, ((1, "bee"), 3.0));
/// ```
#[must_use]
pub const fn compose<O, I, A, B>(outer: O, inner: I) -> ComposedOptic<O, I, A, B> {
    ComposedOptic::new(outer, inner)
}

/// The optic whose focus is the whole itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IdentityOptic;

impl<S, T> Optic<S, T, S, T> for IdentityOptic {
    fn apply<F, K>(&self, action: K, source: S) -> F::Applied<T>
    where
        F: Functor,
        K: FnOnce(S) -> F::Applied<T>,
    {
        action(source)
    }
}

/// Returns the identity optic, the unit of composition.
#[must_use]
pub const fn identity() -> IdentityOptic {
    IdentityOptic
}
