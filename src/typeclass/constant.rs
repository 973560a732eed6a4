//! Constant wrapper type - the constant functor.
//!
//! `Const<R, A>` carries a value of type `R` and only pretends to contain an
//! `A`. Mapping over it ignores the function and keeps the payload untouched.
//! Running an optic in the constant functor is how reads are performed: the
//! focus is smuggled out through the payload while the reconstruction step is
//! skipped entirely.

use std::marker::PhantomData;

use super::TypeConstructor;

/// The constant functor - a payload of type `R` tagged with a phantom `A`.
///
/// # Examples
///
/// ```rust
/// use optica::typeclass::{Const, ConstFamily, Functor};
///
/// let tagged: Const<&str, i32> = Const::new("kept");
/// let mapped: Const<&str, String> = ConstFamily::fmap(tagged, |n: i32| n.to_string());
/// assert_eq!(mapped.into_inner(), "kept");
/// ```
pub struct Const<R, A> {
    value: R,
    _marker: PhantomData<fn() -> A>,
}

impl<R, A> Const<R, A> {
    /// Creates a new `Const` carrying `value`.
    #[inline]
    pub const fn new(value: R) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }

    /// Consumes the `Const` and returns its payload.
    #[inline]
    pub fn into_inner(self) -> R {
        self.value
    }

    /// Returns a reference to the payload.
    #[inline]
    pub const fn as_inner(&self) -> &R {
        &self.value
    }

    /// Changes the phantom type without touching the payload.
    #[inline]
    pub fn retag<B>(self) -> Const<R, B> {
        Const::new(self.value)
    }
}

impl<R: Clone, A> Clone for Const<R, A> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<R: Copy, A> Copy for Const<R, A> {}

impl<R: PartialEq, A> PartialEq for Const<R, A> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<R: Eq, A> Eq for Const<R, A> {}

impl<R: std::fmt::Debug, A> std::fmt::Debug for Const<R, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.debug_tuple("Const").field(&self.value).finish()
    }
}

/// The family of [`Const`] with the payload type `R` held fixed.
pub struct ConstFamily<R>(PhantomData<fn() -> R>);

impl<R> TypeConstructor for ConstFamily<R> {
    type Applied<A> = Const<R, A>;
}

impl<R> Clone for ConstFamily<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for ConstFamily<R> {}

impl<R> Default for ConstFamily<R> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<R> std::fmt::Debug for ConstFamily<R> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter.write_str("ConstFamily")
    }
}
