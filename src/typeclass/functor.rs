//! Functor type class - mapping over container values.
//!
//! This module provides the `Functor` trait, implemented on type-constructor
//! families (see [`TypeConstructor`]). A functor can have a function applied
//! to its contained value without otherwise altering the container.
//!
//! # Laws
//!
//! All `Functor` implementations must satisfy these laws:
//!
//! ## Identity Law
//!
//! ```text
//! F::fmap(fa, |x| x) == fa
//! ```
//!
//! ## Composition Law
//!
//! ```text
//! F::fmap(F::fmap(fa, f), g) == F::fmap(fa, |x| g(f(x)))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use optica::typeclass::{Functor, OptionFamily};
//!
//! let transformed: Option<String> = OptionFamily::fmap(Some(5), |n: i32| n.to_string());
//! assert_eq!(transformed, Some("5".to_string()));
//!
//! // None is preserved
//! let none: Option<String> = OptionFamily::fmap(None, |n: i32| n.to_string());
//! assert_eq!(none, None);
//! ```

use super::constant::{Const, ConstFamily};
use super::higher::{OptionFamily, ResultFamily, TypeConstructor};
use super::identity::{Identity, IdentityFamily};

/// A type class for containers that can have a function mapped over their contents.
///
/// The function is `FnOnce`: a functor used with an optic holds at most one
/// value, so the function is never needed twice. Multi-element containers
/// would need the function more than once and are not functors in this sense.
pub trait Functor: TypeConstructor {
    /// Applies a function to the value inside the container.
    ///
    /// # Arguments
    ///
    /// * `value` - The container
    /// * `function` - A function that transforms the inner value
    ///
    /// # Returns
    ///
    /// A new container with the transformed value
    fn fmap<A, B, F>(value: Self::Applied<A>, function: F) -> Self::Applied<B>
    where
        F: FnOnce(A) -> B;

    /// Replaces the value inside the container with a constant.
    ///
    /// This is equivalent to `fmap(value, |_| replacement)`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optica::typeclass::{Functor, OptionFamily};
    ///
    /// assert_eq!(OptionFamily::replace(Some(5), "replaced"), Some("replaced"));
    /// assert_eq!(OptionFamily::replace(None::<i32>, "replaced"), None);
    /// ```
    #[inline]
    fn replace<A, B>(value: Self::Applied<A>, replacement: B) -> Self::Applied<B> {
        Self::fmap(value, |_| replacement)
    }
}

impl Functor for IdentityFamily {
    #[inline]
    fn fmap<A, B, F>(value: Identity<A>, function: F) -> Identity<B>
    where
        F: FnOnce(A) -> B,
    {
        Identity::new(function(value.into_inner()))
    }
}

impl<R> Functor for ConstFamily<R> {
    #[inline]
    fn fmap<A, B, F>(value: Const<R, A>, _function: F) -> Const<R, B>
    where
        F: FnOnce(A) -> B,
    {
        value.retag()
    }
}

impl Functor for OptionFamily {
    #[inline]
    fn fmap<A, B, F>(value: Option<A>, function: F) -> Option<B>
    where
        F: FnOnce(A) -> B,
    {
        value.map(function)
    }
}

impl<E> Functor for ResultFamily<E> {
    #[inline]
    fn fmap<A, B, F>(value: Result<A, E>, function: F) -> Result<B, E>
    where
        F: FnOnce(A) -> B,
    {
        value.map(function)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identity_fmap_applies_function() {
        assert_eq!(IdentityFamily::fmap(Identity(5), |n| n + 1), Identity(6));
    }

    #[rstest]
    fn const_fmap_never_calls_function() {
        let mapped: Const<&str, i32> = ConstFamily::fmap(Const::new("payload"), |_: i32| {
            unreachable!("the constant functor ignores its function")
        });
        assert_eq!(mapped.into_inner(), "payload");
    }

    #[rstest]
    #[case(Some(2), Some(4))]
    #[case(None, None)]
    fn option_fmap_doubles(#[case] input: Option<i32>, #[case] expected: Option<i32>) {
        assert_eq!(OptionFamily::fmap(input, |n| n * 2), expected);
    }

    #[rstest]
    fn result_fmap_preserves_error() {
        let failed: Result<i32, String> = Err("boom".to_string());
        assert_eq!(
            ResultFamily::<String>::fmap(failed, |n| n + 1),
            Err("boom".to_string())
        );
    }

    #[rstest]
    fn identity_replace_discards_value() {
        assert_eq!(IdentityFamily::replace(Identity(1), "x"), Identity("x"));
    }
}
