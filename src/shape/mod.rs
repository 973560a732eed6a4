//! Data shapes that optics and zippers focus into.
//!
//! Pairs and triples are plain tuples. The two shapes defined here are the
//! ones the standard library has no exact counterpart for:
//!
//! - [`Tree`]: a binary tree carrying a value at every node
//! - [`NonEmpty`]: a sequence known to have a first element

mod non_empty;
mod tree;

pub use non_empty::NonEmpty;
pub use tree::{Subtrees, Tree};
