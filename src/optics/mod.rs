//! Optics for immutable data manipulation.
//!
//! An optic is a composable address into part of a larger immutable value.
//! This module offers three representations of the same idea, from the most
//! restricted to the most general:
//!
//! 1. [`Focused`]: a focus and a function rebuilding the whole from a
//!    replacement of the same type. Focusers returning `Focused` values
//!    compose with [`focused::compose`].
//! 2. [`Generalized`]: the replacement may have a different type, and so may
//!    the rebuilt whole. [`Focuser`]s returning `Generalized` values compose
//!    with [`Focuser::compose`] across any type change.
//! 3. [`Optic`]: a transformer from actions on the focus to actions on the
//!    whole, polymorphic in the [`Functor`](crate::typeclass::Functor) the
//!    action runs in. Reading and updating are two choices of functor, and
//!    [`compose`] is plain function composition.
//!
//! [`to_optic`] and [`to_focuser`] convert between the last two.
//!
//! # Laws
//!
//! Every type-preserving instance of every representation satisfies:
//!
//! 1. **GetPut Law**: `set(source.clone(), get(source.clone())) == source`
//! 2. **PutGet Law**: `get(set(source, value.clone())) == value`
//! 3. **PutPut Law**: `set(set(source.clone(), v1), v2.clone()) == set(source, v2)`
//!
//! # Standard optics
//!
//! - [`pair_first`], [`pair_second`]: components of a pair
//! - [`sequence_head`]: first element of a [`NonEmpty`](crate::shape::NonEmpty)
//! - [`tree_root`]: value at the root of a [`Tree`](crate::shape::Tree)
//! - [`first_two_of_triple`]: the first two components of a triple, as a pair
//!
//! # Example
//!
//! ```
//! use optica::optics::{Getter, Optic, compose, pair_first, pair_second};
//!
//! let config = (("localhost", 8080), "debug");
//! let port = compose(pair_first(), pair_second());
//!
//! assert_eq!(port.get(config), 8080);
//!
//! let updated = port.modify(config, |port: u16| port + 1);
//! assert_eq!(updated, (("localhost", 8081), "debug"));
//!
//! // The intermediate types of a composed optic are fixed by its first use,
//! // so a type-changing write gets a fresh composition.
//! let described = compose(pair_first(), pair_second()).set(config, "eighty-eighty");
//! assert_eq!(described, (("localhost", "eighty-eighty"), "debug"));
//! ```

mod bridge;
pub mod focused;
pub mod generalized;
mod lens;
mod standard_optics;

pub use focused::Focused;

pub use generalized::ComposedFocuser;
pub use generalized::Focuser;
pub use generalized::Generalized;

pub use lens::ComposedOptic;
pub use lens::Getter;
pub use lens::IdentityOptic;
pub use lens::Optic;
pub use lens::compose;
pub use lens::identity;

pub use bridge::FocuserOptic;
pub use bridge::OpticFocuser;
pub use bridge::to_focuser;
pub use bridge::to_optic;

pub use standard_optics::First;
pub use standard_optics::FirstTwo;
pub use standard_optics::Head;
pub use standard_optics::Root;
pub use standard_optics::Second;
pub use standard_optics::first_two_of_triple;
pub use standard_optics::pair_first;
pub use standard_optics::pair_second;
pub use standard_optics::sequence_head;
pub use standard_optics::tree_root;
