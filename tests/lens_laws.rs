#![cfg(feature = "optics")]
//! Property-based tests for the lens laws of polymorphic optics.
//!
//! This module verifies that the standard optics, their compositions and the
//! identity optic satisfy the required laws:
//!
//! - **GetPut Law**: `optic.set(source.clone(), optic.get(source.clone())) == source`
//! - **PutGet Law**: `optic.get(optic.set(source, value.clone())) == value`
//! - **PutPut Law**: `optic.set(optic.set(source.clone(), v1), v2.clone()) == optic.set(source, v2)`
//!
//! It also checks that composition is associative and that the identity optic
//! is its unit.

use optica::optics::{
    Generalized, Getter, Optic, compose, first_two_of_triple, focused, generalized, identity,
    pair_first, pair_second, sequence_head, to_optic, tree_root,
};
use optica::shape::{NonEmpty, Tree};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn tree_strategy() -> impl Strategy<Value = Tree<i32>> {
    any::<i32>().prop_map(Tree::leaf).prop_recursive(4, 32, 2, |inner| {
        (any::<i32>(), inner.clone(), inner)
            .prop_map(|(value, left, right)| Tree::branch(value, left, right))
    })
}

fn non_empty_strategy<T: Strategy>(element: T) -> impl Strategy<Value = NonEmpty<T::Value>> {
    prop::collection::vec(element, 1..8).prop_map(|elements| {
        NonEmpty::try_from(elements).expect("generated sequences are non-empty")
    })
}

// =============================================================================
// Law Checks
// =============================================================================

fn get_put<O, S, A>(optic: &O, source: S) -> S
where
    O: Optic<S, S, A, A>,
    S: Clone,
{
    let focus = optic.get(source.clone());
    optic.set(source, focus)
}

fn put_get<O, S, A>(optic: &O, source: S, value: A) -> A
where
    O: Optic<S, S, A, A>,
{
    optic.get(optic.set(source, value))
}

fn put_put<O, S, A>(optic: &O, source: S, first: A, second: A) -> (S, S)
where
    O: Optic<S, S, A, A>,
    S: Clone,
    A: Clone,
{
    let twice = optic.set(optic.set(source.clone(), first), second.clone());
    let once = optic.set(source, second);
    (twice, once)
}

fn read_write<O, S, A>(optic: &O, source: S, value: A) -> (A, S)
where
    O: Optic<S, S, A, A>,
    S: Clone,
{
    (optic.get(source.clone()), optic.set(source, value))
}

macro_rules! optic_laws {
    ($name:ident, $optic:expr, $source:expr, $value:expr) => {
        paste::paste! {
            proptest! {
                /// GetPut Law: writing back what was read yields the original
                #[test]
                fn [<prop_ $name _get_put_law>](source in $source) {
                    prop_assert_eq!(get_put(&$optic, source.clone()), source);
                }

                /// PutGet Law: reading after a write yields the written value
                #[test]
                fn [<prop_ $name _put_get_law>](source in $source, value in $value) {
                    prop_assert_eq!(put_get(&$optic, source, value.clone()), value);
                }

                /// PutPut Law: the second of two writes wins
                #[test]
                fn [<prop_ $name _put_put_law>](
                    source in $source,
                    first in $value,
                    second in $value
                ) {
                    let (twice, once) = put_put(&$optic, source, first, second);
                    prop_assert_eq!(twice, once);
                }
            }
        }
    };
}

// =============================================================================
// Standard Optics
// =============================================================================

optic_laws!(pair_first, pair_first(), any::<(i32, String)>(), any::<i32>());
optic_laws!(pair_second, pair_second(), any::<(String, i32)>(), any::<i32>());
optic_laws!(
    sequence_head,
    sequence_head(),
    non_empty_strategy(any::<i32>()),
    any::<i32>()
);
optic_laws!(tree_root, tree_root(), tree_strategy(), any::<i32>());
optic_laws!(
    first_two_of_triple,
    first_two_of_triple(),
    any::<(i32, String, bool)>(),
    any::<(i32, String)>()
);
optic_laws!(identity, identity(), any::<(i32, bool)>(), any::<(i32, bool)>());

// =============================================================================
// Composed And Bridged Optics
// =============================================================================

optic_laws!(
    head_then_first,
    compose(sequence_head(), pair_first()),
    non_empty_strategy(any::<(i32, String)>()),
    any::<i32>()
);
optic_laws!(
    first_then_second,
    compose(pair_first(), pair_second()),
    any::<((i32, u8), char)>(),
    any::<u8>()
);
optic_laws!(
    root_then_first_two,
    compose(tree_root(), first_two_of_triple()),
    any::<(i32, i32, i32)>().prop_map(Tree::leaf),
    any::<(i32, i32)>()
);
optic_laws!(
    bridged_first,
    to_optic(generalized::first),
    any::<(i32, String)>(),
    any::<i32>()
);
optic_laws!(
    bridged_root,
    to_optic(|tree: Tree<i32>| Generalized::from(focused::root(tree))),
    tree_strategy(),
    any::<i32>()
);

// =============================================================================
// Composition
// =============================================================================

proptest! {
    /// Associativity: regrouping a chain of three optics changes nothing
    #[test]
    fn prop_compose_is_associative(
        source in any::<(((i32, i32), i32), i32)>(),
        value in any::<i32>()
    ) {
        let left = compose(compose(pair_first(), pair_first()), pair_second());
        let right = compose(pair_first(), compose(pair_first(), pair_second()));
        prop_assert_eq!(read_write(&left, source, value), read_write(&right, source, value));
    }

    /// Associativity holds for type-changing updates as well
    #[test]
    fn prop_compose_is_associative_when_changing_type(
        source in any::<(((i32, bool), char), u8)>()
    ) {
        let describe = |flag: bool| if flag { "yes" } else { "no" };
        let left = compose(compose(pair_first(), pair_first()), pair_second());
        let right = compose(pair_first(), compose(pair_first(), pair_second()));
        prop_assert_eq!(left.modify(source, describe), right.modify(source, describe));
    }

    /// Associativity holds through a type-preserving optic
    #[test]
    fn prop_compose_is_associative_through_head(
        source in non_empty_strategy(any::<((i32, bool), char)>())
    ) {
        let left = compose(compose(sequence_head(), pair_first()), pair_first());
        let right = compose(sequence_head(), compose(pair_first(), pair_first()));
        prop_assert_eq!(
            left.modify(source.clone(), |n: i32| n.wrapping_mul(3)),
            right.modify(source, |n: i32| n.wrapping_mul(3))
        );
    }

    /// Identity is a left and right unit of composition
    #[test]
    fn prop_identity_is_unit(source in any::<(i32, String)>(), value in any::<i32>()) {
        let expected = read_write(&pair_first(), source.clone(), value);
        prop_assert_eq!(
            read_write(&compose(identity(), pair_first()), source.clone(), value),
            expected.clone()
        );
        prop_assert_eq!(
            read_write(&compose(pair_first(), identity()), source, value),
            expected
        );
    }

    /// Composed type-changing writes agree with nested hand-written updates
    #[test]
    fn prop_composed_set_changes_type(source in any::<((i32, bool), char)>(), label in ".*") {
        let ((number, _), letter) = source;
        let updated = compose(pair_first(), pair_second()).set(source, label.clone());
        prop_assert_eq!(updated, ((number, label), letter));
    }
}
