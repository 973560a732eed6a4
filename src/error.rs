//! Error types for optics and zippers.
//!
//! Every accessor in this crate has a structural precondition: a zipper over
//! a sequence needs at least one element, moving down a tree needs a branch,
//! and so on. When an operation is invoked on a value that does not have the
//! expected shape, it fails with [`ShapeMismatch`]. There is no recovery or
//! default substitution; the error is surfaced to the direct caller.

/// Represents an operation applied to a value of the wrong structural shape.
///
/// # Examples
///
/// ```rust
/// use optica::error::ShapeMismatch;
///
/// let error = ShapeMismatch::new("SequenceZipper::focus_on", "a non-empty sequence");
/// assert_eq!(
///     format!("{}", error),
///     "SequenceZipper::focus_on: shape mismatch, expected a non-empty sequence"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShapeMismatch {
    /// The name of the operation that rejected its input.
    pub operation: &'static str,
    /// A description of the shape the operation requires.
    pub expected: &'static str,
}

impl ShapeMismatch {
    /// Creates a new `ShapeMismatch` and records it at debug level.
    ///
    /// # Arguments
    ///
    /// * `operation` - The operation that rejected its input
    /// * `expected` - The shape that operation requires
    pub fn new(operation: &'static str, expected: &'static str) -> Self {
        log::debug!("{operation}: rejected input, expected {expected}");
        Self {
            operation,
            expected,
        }
    }
}

impl std::fmt::Display for ShapeMismatch {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "{}: shape mismatch, expected {}",
            self.operation, self.expected
        )
    }
}

impl std::error::Error for ShapeMismatch {}

/// Represents errors that can occur when applying optics.
///
/// Shape mismatch is the only failure an optic or zipper can produce.
/// Composition never introduces a new kind: a composed accessor fails exactly
/// when one of its parts would fail on the corresponding intermediate value.
///
/// # Examples
///
/// ```rust
/// use optica::error::{OpticError, ShapeMismatch};
///
/// let error: OpticError = ShapeMismatch::new("TreeZipper::up", "a non-root focus").into();
/// assert_eq!(format!("{}", error), "TreeZipper::up: shape mismatch, expected a non-root focus");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpticError {
    /// The value did not have the shape the accessor requires.
    ShapeMismatch(ShapeMismatch),
}

impl std::fmt::Display for OpticError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ShapeMismatch(error) => write!(formatter, "{error}"),
        }
    }
}

impl std::error::Error for OpticError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ShapeMismatch(error) => Some(error),
        }
    }
}

impl From<ShapeMismatch> for OpticError {
    fn from(error: ShapeMismatch) -> Self {
        Self::ShapeMismatch(error)
    }
}
