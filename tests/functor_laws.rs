#![cfg(feature = "typeclass")]
//! Property-based tests for Functor laws.
//!
//! This module verifies that all Functor families satisfy the required laws:
//!
//! - **Identity Law**: `F::fmap(fa, |x| x) == fa`
//! - **Composition Law**: `F::fmap(F::fmap(fa, f), g) == F::fmap(fa, |x| g(f(x)))`
//!
//! Using proptest, we generate random inputs to thoroughly verify these laws
//! across a wide range of values.

use optica::typeclass::{
    Const, ConstFamily, Functor, Identity, IdentityFamily, OptionFamily, ResultFamily,
};
use proptest::prelude::*;

fn function1(n: i32) -> i32 {
    n.wrapping_add(1)
}

fn function2(n: i32) -> i64 {
    i64::from(n) * 2
}

// =============================================================================
// IdentityFamily
// =============================================================================

proptest! {
    /// Identity Law for Identity<i32>
    #[test]
    fn prop_identity_identity_law(value in any::<i32>()) {
        prop_assert_eq!(IdentityFamily::fmap(Identity::new(value), |x| x), Identity::new(value));
    }

    /// Composition Law for Identity<i32>
    #[test]
    fn prop_identity_composition_law(value in any::<i32>()) {
        let left = IdentityFamily::fmap(IdentityFamily::fmap(Identity::new(value), function1), function2);
        let right = IdentityFamily::fmap(Identity::new(value), |x| function2(function1(x)));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// ConstFamily
// =============================================================================

proptest! {
    /// Identity Law for Const<String, i32>
    #[test]
    fn prop_const_identity_law(payload in ".*") {
        let value: Const<String, i32> = Const::new(payload.clone());
        let mapped: Const<String, i32> = ConstFamily::fmap(value, |x: i32| x);
        prop_assert_eq!(mapped.into_inner(), payload);
    }

    /// Composition Law for Const<String, i32>
    #[test]
    fn prop_const_composition_law(payload in ".*") {
        let start = || Const::<String, i32>::new(payload.clone());
        let left: Const<String, i64> = ConstFamily::fmap(ConstFamily::fmap(start(), function1), function2);
        let right: Const<String, i64> = ConstFamily::fmap(start(), |x| function2(function1(x)));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// OptionFamily
// =============================================================================

proptest! {
    /// Identity Law for Option<i32>
    #[test]
    fn prop_option_identity_law(value in any::<Option<i32>>()) {
        prop_assert_eq!(OptionFamily::fmap(value, |x| x), value);
    }

    /// Composition Law for Option<i32>
    #[test]
    fn prop_option_composition_law(value in any::<Option<i32>>()) {
        let left = OptionFamily::fmap(OptionFamily::fmap(value, function1), function2);
        let right = OptionFamily::fmap(value, |x| function2(function1(x)));
        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// ResultFamily
// =============================================================================

fn result_strategy() -> impl Strategy<Value = Result<i32, String>> {
    prop_oneof![any::<i32>().prop_map(Ok), ".*".prop_map(Err)]
}

proptest! {
    /// Identity Law for Result<i32, String>
    #[test]
    fn prop_result_identity_law(value in result_strategy()) {
        prop_assert_eq!(ResultFamily::<String>::fmap(value.clone(), |x| x), value);
    }

    /// Composition Law for Result<i32, String>
    #[test]
    fn prop_result_composition_law(value in result_strategy()) {
        let left = ResultFamily::<String>::fmap(
            ResultFamily::<String>::fmap(value.clone(), function1),
            function2,
        );
        let right = ResultFamily::<String>::fmap(value, |x| function2(function1(x)));
        prop_assert_eq!(left, right);
    }
}
