//! # optica
//!
//! Functional references for immutable data: zippers, focused values and
//! polymorphic optics.
//!
//! ## Overview
//!
//! The crate builds the same idea, addressing part of a larger value so it can
//! be read and rebuilt, at increasing levels of generality:
//!
//! - **Zippers**: a focus plus a shape-specific context, for pairs, sequences
//!   and binary trees
//! - **Focused values**: a focus plus a reconstruction function, composable
//!   as long as types are preserved
//! - **Generalized focusers**: reconstruction may change types; composition is
//!   unrestricted
//! - **Polymorphic optics**: transformers over any functor, where reading and
//!   updating are choices of functor and composition is function composition
//!
//! ## Feature Flags
//!
//! - `typeclass`: Type constructor families and `Functor`
//! - `zipper`: Zippers over pairs, sequences and trees
//! - `optics`: Focused values, focusers and polymorphic optics
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use optica::prelude::*;
//!
//! let sequence = NonEmpty::try_from(vec![(1, "x"), (2, "y")])?;
//! let first_of_head = compose(sequence_head(), pair_first());
//!
//! assert_eq!(first_of_head.get(sequence), 1);
//! # Ok::<(), optica::error::ShapeMismatch>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use optica::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::*;
    pub use crate::shape::*;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "zipper")]
    pub use crate::zipper::*;

    #[cfg(feature = "optics")]
    pub use crate::optics::*;
}

pub mod error;
pub mod shape;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "zipper")]
pub mod zipper;

#[cfg(feature = "optics")]
pub mod optics;
