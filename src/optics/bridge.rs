//! Conversions between focusers and polymorphic optics.
//!
//! The two representations are interchangeable:
//!
//! - [`to_optic`] wraps a [`Focuser`] so that it can be applied in any
//!   functor: the action runs on the current focus, and the focuser's
//!   reconstruction is mapped over the result.
//! - [`to_focuser`] wraps an [`Optic`] so that it produces [`Generalized`]
//!   values: the focus is read through the optic, and the reconstruction
//!   writes through it.
//!
//! Converting in one direction and back yields a value with the same read and
//! write behavior as the one started from.
//!
//! # Example
//!
//! ```
//! use optica::optics::{Focuser, Generalized, Getter, Optic, pair_second, to_focuser, to_optic};
//!
//! let last_of_triple = |(a, b, c): (i32, i32, i32)| Generalized::new(c, move |c: i32| (a, b, c));
//! let optic = to_optic(last_of_triple);
//! assert_eq!(optic.get((1, 2, 3)), 3);
//! assert_eq!(optic.set((1, 2, 3), 30), (1, 2, 30));
//!
//! let focuser = to_focuser(pair_second());
//! let focused: Generalized<(char, &str), i32, &str> = focuser.focus(('x', 5));
//! assert_eq!(*focused.get(), 5);
//! assert_eq!(focused.set("five"), ('x', "five"));
//! ```

use std::sync::Arc;

use super::generalized::{Focuser, Generalized};
use super::lens::Optic;
use crate::typeclass::{Const, ConstFamily, Functor};

/// A focuser presented as a polymorphic optic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FocuserOptic<Fo> {
    focuser: Fo,
}

impl<Fo> FocuserOptic<Fo> {
    /// Wraps a focuser.
    #[must_use]
    pub const fn new(focuser: Fo) -> Self {
        Self { focuser }
    }

    /// Returns the wrapped focuser.
    pub fn into_inner(self) -> Fo {
        self.focuser
    }
}

impl<S, T, A, B, Fo> Optic<S, T, A, B> for FocuserOptic<Fo>
where
    Fo: Focuser<S, T, A, B>,
{
    fn apply<F, K>(&self, action: K, source: S) -> F::Applied<T>
    where
        F: Functor,
        K: FnOnce(A) -> F::Applied<B>,
    {
        let (focus, rebuild) = self.focuser.focus(source).into_parts();
        F::fmap(action(focus), rebuild)
    }
}

/// A polymorphic optic presented as a focuser.
///
/// Each call to [`Focuser::focus`] reads the focus through the optic and
/// keeps the source so the reconstruction can write through the optic later.
/// The optic is shared between the focuser and every reconstruction it hands
/// out.
pub struct OpticFocuser<O> {
    optic: Arc<O>,
}

impl<O> OpticFocuser<O> {
    /// Wraps an optic.
    #[must_use]
    pub fn new(optic: O) -> Self {
        Self {
            optic: Arc::new(optic),
        }
    }

    /// Returns the wrapped optic, cloning it if a reconstruction still holds
    /// a reference.
    #[must_use]
    pub fn into_inner(self) -> O
    where
        O: Clone,
    {
        Arc::try_unwrap(self.optic).unwrap_or_else(|shared| (*shared).clone())
    }
}

impl<O> Clone for OpticFocuser<O> {
    fn clone(&self) -> Self {
        Self {
            optic: Arc::clone(&self.optic),
        }
    }
}

impl<O: std::fmt::Debug> std::fmt::Debug for OpticFocuser<O> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("OpticFocuser")
            .field("optic", &self.optic)
            .finish()
    }
}

impl<S, T, A, B, O> Focuser<S, T, A, B> for OpticFocuser<O>
where
    O: Optic<S, T, A, B> + 'static,
    S: Clone + 'static,
    T: 'static,
    B: 'static,
{
    fn focus(&self, source: S) -> Generalized<T, A, B> {
        let focus = self
            .optic
            .apply::<ConstFamily<A>, _>(Const::<A, B>::new, source.clone())
            .into_inner();
        let optic = Arc::clone(&self.optic);
        Generalized::new(focus, move |replacement| optic.set(source, replacement))
    }
}

/// Converts a focuser into a polymorphic optic.
#[must_use]
pub const fn to_optic<Fo>(focuser: Fo) -> FocuserOptic<Fo> {
    FocuserOptic::new(focuser)
}

/// Converts a polymorphic optic into a focuser.
#[must_use]
pub fn to_focuser<O>(optic: O) -> OpticFocuser<O> {
    OpticFocuser::new(optic)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optics::generalized;
    use crate::optics::lens::{Getter, compose};
    use crate::typeclass::OptionFamily;
    use rstest::rstest;

    #[rstest]
    fn test_to_optic_get_and_set() {
        assert_eq!(to_optic(generalized::first).get((1, 'a')), 1);
        assert_eq!(to_optic(generalized::first).set((1, 'a'), "one"), ("one", 'a'));
    }

    #[rstest]
    fn test_to_optic_runs_in_caller_functor() {
        let optic = to_optic(generalized::second);
        let positive = |n: i32| (n > 0).then_some(n);
        assert_eq!(
            optic.apply::<OptionFamily, _>(positive, ("x", 3)),
            Some(("x", 3))
        );
        assert_eq!(optic.apply::<OptionFamily, _>(positive, ("x", -3)), None);
    }

    #[rstest]
    fn test_to_focuser_get_and_set() {
        let focuser = to_focuser(compose(
            to_optic(generalized::first),
            to_optic(generalized::second),
        ));
        let whole = ((1, 'b'), "c");
        let focused: Generalized<((i32, String), &str), char, String> = focuser.focus(whole);
        assert_eq!(*focused.get(), 'b');
        assert_eq!(focused.set("bee".to_string()), ((1, "bee".to_string()), "c"));
    }

    #[rstest]
    fn test_into_inner_recovers_optic() {
        let focuser = to_focuser(to_optic(generalized::first::<i32, i32, i32>));
        let optic = focuser.into_inner();
        assert_eq!(optic.get((4, 5)), 4);
    }

    #[rstest]
    fn test_reconstruction_outlives_focuser() {
        let focuser = to_focuser(to_optic(generalized::second::<i32, i32, i32>));
        let focused = focuser.focus((1, 2));
        drop(focuser);
        assert_eq!(focused.set(20), (1, 20));
    }
}
