//! Identity wrapper type - the identity functor.
//!
//! `Identity` is the transparent container: mapping over it applies the
//! function and rewraps the result. Running an optic in the identity functor
//! is how updates are performed.

use super::TypeConstructor;

/// The identity functor - wraps a value without adding any behavior.
///
/// # Examples
///
/// ```rust
/// use optica::typeclass::Identity;
///
/// let wrapped = Identity::new(42);
/// assert_eq!(wrapped.into_inner(), 42);
///
/// // Using the tuple-struct syntax
/// let wrapped = Identity(42);
/// assert_eq!(wrapped.0, 42);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Identity<A>(pub A);

impl<A> Identity<A> {
    /// Creates a new `Identity` wrapping the given value.
    #[inline]
    pub const fn new(value: A) -> Self {
        Self(value)
    }

    /// Consumes the `Identity` and returns the inner value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optica::typeclass::Identity;
    ///
    /// let x = Identity::new(String::from("hello"));
    /// let inner: String = x.into_inner();
    /// assert_eq!(inner, "hello");
    /// ```
    #[inline]
    pub fn into_inner(self) -> A {
        self.0
    }

    /// Returns a reference to the inner value.
    #[inline]
    pub const fn as_inner(&self) -> &A {
        &self.0
    }
}

impl<A> From<A> for Identity<A> {
    fn from(value: A) -> Self {
        Self::new(value)
    }
}

/// The family of [`Identity`].
///
/// # Examples
///
/// ```rust
/// use optica::typeclass::{Functor, Identity, IdentityFamily};
///
/// let doubled = IdentityFamily::fmap(Identity::new(21), |n| n * 2);
/// assert_eq!(doubled, Identity(42));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IdentityFamily;

impl TypeConstructor for IdentityFamily {
    type Applied<A> = Identity<A>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn identity_new_creates_wrapper() {
        let wrapped = Identity::new(42);
        assert_eq!(wrapped.0, 42);
    }

    #[rstest]
    fn identity_as_inner_returns_reference() {
        let wrapped = Identity::new(vec![1, 2, 3]);
        assert_eq!(wrapped.as_inner(), &vec![1, 2, 3]);
    }

    #[rstest]
    fn identity_from_value() {
        let wrapped: Identity<String> = String::from("hello").into();
        assert_eq!(wrapped.into_inner(), "hello");
    }

    #[test]
    fn identity_family_applies_to_identity() {
        fn assert_applied<F: TypeConstructor<Applied<i32> = Identity<i32>>>() {}
        assert_applied::<IdentityFamily>();
    }

    #[rstest]
    #[case(0)]
    #[case(-1)]
    #[case(i32::MIN)]
    #[case(i32::MAX)]
    fn identity_preserves_integer_values(#[case] value: i32) {
        assert_eq!(Identity::new(value).into_inner(), value);
    }
}
