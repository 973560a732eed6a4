//! Higher-Kinded Type emulation through Generic Associated Types.
//!
//! Rust does not natively support Higher-Kinded Types: a trait cannot take
//! `Option<_>` or `Identity<_>` as an unapplied type constructor. This module
//! works around that with *families*: zero-sized marker types that stand for a
//! type constructor, with a generic associated type that applies it.
//!
//! The family is what lets an optic be generic over "any mappable container"
//! while leaving the choice of container to the caller. An optic method that
//! is generic over `F: Functor` can only ever see `F::Applied<_>` values, so
//! it has no way to inspect or fabricate the payload; it can only thread it
//! through.
//!
//! # Example
//!
//! ```rust
//! use optica::typeclass::{OptionFamily, TypeConstructor};
//!
//! fn empty<F: TypeConstructor>() -> F::Applied<String>
//! where
//!     F::Applied<String>: Default,
//! {
//!     Default::default()
//! }
//!
//! let none: Option<String> = empty::<OptionFamily>();
//! assert_eq!(none, None);
//! ```

use std::marker::PhantomData;

/// A type-level stand-in for a type constructor of one argument.
///
/// Implementors are zero-sized brands; the constructor itself is recovered
/// through [`TypeConstructor::Applied`].
///
/// # Laws
///
/// `Applied<A>` must be fully determined by `A`: a family never inspects the
/// argument it is applied to.
pub trait TypeConstructor {
    /// The type constructor applied to `A`.
    ///
    /// For [`OptionFamily`], `Applied<i32>` is `Option<i32>`.
    type Applied<A>;
}

/// The family of `Option<_>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct OptionFamily;

impl TypeConstructor for OptionFamily {
    type Applied<A> = Option<A>;
}

/// The family of `Result<_, E>`, with the error type held fixed.
pub struct ResultFamily<E>(PhantomData<fn() -> E>);

impl<E> TypeConstructor for ResultFamily<E> {
    type Applied<A> = Result<A, E>;
}

impl<E> Clone for ResultFamily<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for ResultFamily<E> {}

impl<E> Default for ResultFamily<E> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<E> std::fmt::Debug for ResultFamily<E> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("ResultFamily")
    }
}
