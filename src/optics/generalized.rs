//! Type-changing focused values and focusers.
//!
//! [`Generalized`] relaxes [`Focused`](super::Focused): the reconstruction
//! function may accept a replacement of a different type than the focus, and
//! may produce a whole of a different type than the source.
//!
//! A [`Focuser`] is anything that turns a whole into a `Generalized` value,
//! most commonly a closure. Focusers compose across type changes with
//! [`Focuser::compose`]: the outer focus becomes the inner whole, and the
//! outer reconstruction wraps the inner one.
//!
//! # Laws
//!
//! For type-preserving instances (`T = S`, `B = A`) every focuser must
//! satisfy the lens laws:
//!
//! 1. **GetPut Law**: `focuser.set(source.clone(), focuser.get(source)) == source`
//! 2. **PutGet Law**: `focuser.get(focuser.set(source, value)) == value`
//! 3. **PutPut Law**: `focuser.set(focuser.set(source, v1), v2) == focuser.set(source, v2)`
//!
//! # Example
//!
//! ```
//! use optica::optics::{Focuser, generalized};
//!
//! // Focus on the number inside ((number, label), flag) and turn it into a string.
//! let nested = generalized::first.compose(generalized::first);
//! let whole = ((7, "label"), true);
//!
//! let updated: ((String, &str), bool) = nested.modify(whole, |n: i32| format!("#{n}"));
//! assert_eq!(updated, (("#7".to_string(), "label"), true));
//! ```

use std::marker::PhantomData;

use super::focused::Focused;

/// A focus of type `A` paired with a function that rebuilds a `T` from a
/// replacement of type `B`.
///
/// # Type Parameters
///
/// - `T`: The rebuilt whole
/// - `A`: The current focus
/// - `B`: The replacement accepted by the reconstruction
pub struct Generalized<T, A, B> {
    focus: A,
    rebuild: Box<dyn FnOnce(B) -> T>,
}

impl<T, A, B> Generalized<T, A, B> {
    /// Creates a generalized focused value.
    ///
    /// # Example
    ///
    /// ```
    /// use optica::optics::Generalized;
    ///
    /// let focused = Generalized::new(3, |label: &str| (label, "rest"));
    /// assert_eq!(*focused.get(), 3);
    /// assert_eq!(focused.set("three"), ("three", "rest"));
    /// ```
    pub fn new<R>(focus: A, rebuild: R) -> Self
    where
        R: FnOnce(B) -> T + 'static,
    {
        Self {
            focus,
            rebuild: Box::new(rebuild),
        }
    }

    /// Returns a reference to the focus.
    #[inline]
    pub const fn get(&self) -> &A {
        &self.focus
    }

    /// Applies `function` to the focus and rebuilds the whole.
    pub fn modify<F>(self, function: F) -> T
    where
        F: FnOnce(A) -> B,
    {
        (self.rebuild)(function(self.focus))
    }

    /// Replaces the focus with `value` and rebuilds the whole.
    pub fn set(self, value: B) -> T {
        (self.rebuild)(value)
    }

    /// Splits into the focus and the reconstruction function.
    pub fn into_parts(self) -> (A, Box<dyn FnOnce(B) -> T>) {
        (self.focus, self.rebuild)
    }
}

impl<S, A> From<Focused<S, A>> for Generalized<S, A, A> {
    fn from(focused: Focused<S, A>) -> Self {
        let (focus, rebuild) = focused.into_parts();
        Self { focus, rebuild }
    }
}

impl<T, A: std::fmt::Debug, B> std::fmt::Debug for Generalized<T, A, B> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("Generalized")
            .field("focus", &self.focus)
            .finish_non_exhaustive()
    }
}

/// Turns a whole `S` into a [`Generalized`] value.
///
/// Implemented for every closure `Fn(S) -> Generalized<T, A, B>`.
///
/// # Type Parameters
///
/// - `S`: The source whole
/// - `T`: The rebuilt whole
/// - `A`: The focus read from `S`
/// - `B`: The replacement written to build `T`
pub trait Focuser<S, T, A, B> {
    /// Splits `source` into a focus and a reconstruction function.
    fn focus(&self, source: S) -> Generalized<T, A, B>;

    /// Reads the focus.
    fn get(&self, source: S) -> A {
        self.focus(source).into_parts().0
    }

    /// Applies `function` to the focus and rebuilds.
    fn modify<F>(&self, source: S, function: F) -> T
    where
        F: FnOnce(A) -> B,
    {
        self.focus(source).modify(function)
    }

    /// Replaces the focus and rebuilds.
    fn set(&self, source: S, value: B) -> T {
        self.focus(source).set(value)
    }

    /// Composes this focuser with one that focuses inside its focus.
    ///
    /// # Type Parameters
    ///
    /// - `U`: The inner focus
    /// - `V`: The inner replacement
    /// - `I`: The inner focuser
    fn compose<U, V, I>(self, inner: I) -> ComposedFocuser<Self, I, A, B>
    where
        Self: Sized,
        I: Focuser<A, B, U, V>,
    {
        ComposedFocuser::new(self, inner)
    }
}

impl<S, T, A, B, F> Focuser<S, T, A, B> for F
where
    F: Fn(S) -> Generalized<T, A, B>,
{
    fn focus(&self, source: S) -> Generalized<T, A, B> {
        self(source)
    }
}

/// Two focusers chained so that the first one's focus is the second one's
/// whole.
///
/// # Type Parameters
///
/// - `O`: The outer focuser
/// - `I`: The inner focuser
/// - `A`: The intermediate focus (outer focus, inner source)
/// - `B`: The intermediate replacement (inner result, outer replacement)
pub struct ComposedFocuser<O, I, A, B> {
    outer: O,
    inner: I,
    _marker: PhantomData<fn(A) -> B>,
}

impl<O, I, A, B> ComposedFocuser<O, I, A, B> {
    /// Creates a new composed focuser.
    #[must_use]
    pub const fn new(outer: O, inner: I) -> Self {
        Self {
            outer,
            inner,
            _marker: PhantomData,
        }
    }
}

impl<S, T, A, B, U, V, O, I> Focuser<S, T, U, V> for ComposedFocuser<O, I, A, B>
where
    O: Focuser<S, T, A, B>,
    I: Focuser<A, B, U, V>,
    T: 'static,
    B: 'static,
    V: 'static,
{
    fn focus(&self, source: S) -> Generalized<T, U, V> {
        let (middle, rebuild_outer) = self.outer.focus(source).into_parts();
        let (focus, rebuild_inner) = self.inner.focus(middle).into_parts();
        Generalized::new(focus, move |replacement| {
            rebuild_outer(rebuild_inner(replacement))
        })
    }
}

impl<O: Clone, I: Clone, A, B> Clone for ComposedFocuser<O, I, A, B> {
    fn clone(&self) -> Self {
        Self::new(self.outer.clone(), self.inner.clone())
    }
}

impl<O, I, A, B> std::fmt::Debug for ComposedFocuser<O, I, A, B> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedFocuser")
            .finish_non_exhaustive()
    }
}

/// Focuses on the first component of a pair, allowing its type to change.
pub fn first<A, B: 'static, X: 'static>((focus, other): (A, X)) -> Generalized<(B, X), A, B> {
    Generalized::new(focus, move |replacement| (replacement, other))
}

/// Focuses on the second component of a pair, allowing its type to change.
pub fn second<X: 'static, A, B: 'static>((other, focus): (X, A)) -> Generalized<(X, B), A, B> {
    Generalized::new(focus, move |replacement| (other, replacement))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::focused;
    use rstest::rstest;

    #[rstest]
    fn test_set_changes_type() {
        let focused: Generalized<(String, bool), i32, String> = first((1, true));
        assert_eq!(focused.set("one".to_string()), ("one".to_string(), true));
    }

    #[rstest]
    fn test_from_focused_keeps_behavior() {
        let focused = focused::second((1, 2));
        let generalized = Generalized::from(focused);
        assert_eq!(*generalized.get(), 2);
        assert_eq!(generalized.set(5), (1, 5));
    }

    #[rstest]
    fn test_closure_is_focuser() {
        let swap_first = |(a, b): (i32, char)| Generalized::new(a, move |label: String| (label, b));
        assert_eq!(swap_first.get((3, 'c')), 3);
        assert_eq!(
            swap_first.modify((3, 'c'), |n| n.to_string()),
            ("3".to_string(), 'c')
        );
    }

    #[rstest]
    fn test_compose_changes_type_at_both_levels() {
        fn first_of_first<A, B: 'static, X: 'static, Y: 'static>(
        ) -> impl Focuser<((A, X), Y), ((B, X), Y), A, B> {
            first.compose(first)
        }

        let updated = first_of_first().set(((1, 'x'), 2.5), "replaced");
        assert_eq!(updated, (("replaced", 'x'), 2.5));
    }

    #[rstest]
    fn test_compose_second_then_first() {
        let composed = second.compose(first);
        let whole: (&str, (i32, bool)) = ("name", (4, false));
        let rebuilt: (&str, (Vec<i32>, bool)) = composed.modify(whole, |n: i32| vec![n; 2]);
        assert_eq!(rebuilt, ("name", (vec![4, 4], false)));
    }
}
