//! Type class traits backing the polymorphic optic.
//!
//! - [`TypeConstructor`]: a family standing for a type constructor
//! - [`Functor`]: families whose applied type can be mapped over
//! - [`Identity`]: the transparent container, used to update through an optic
//! - [`Const`]: the value-preserving container, used to read through an optic
//!
//! ## Higher-Kinded Types Emulation
//!
//! Rust does not have native support for higher-kinded types (HKT). This
//! library uses Generic Associated Types (GAT) on zero-sized family types to
//! emulate them, which is enough to express an optic that works for every
//! functor the caller cares to pick.
//!
//! # Examples
//!
//! ```rust
//! use optica::typeclass::{Const, ConstFamily, Functor, Identity, IdentityFamily};
//!
//! // The identity functor applies the function.
//! assert_eq!(IdentityFamily::fmap(Identity(2), |n| n * 10), Identity(20));
//!
//! // The constant functor keeps its payload.
//! let kept: Const<i32, String> = ConstFamily::fmap(Const::new(2), |n: i32| n.to_string());
//! assert_eq!(kept.into_inner(), 2);
//! ```

mod constant;
mod functor;
mod higher;
mod identity;

pub use constant::{Const, ConstFamily};
pub use functor::Functor;
pub use higher::{OptionFamily, ResultFamily, TypeConstructor};
pub use identity::{Identity, IdentityFamily};
