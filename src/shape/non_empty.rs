//! Sequences with at least one element.

use crate::error::ShapeMismatch;

/// A sequence that statically has a first element.
///
/// Accessors that need a head, such as the sequence-head optic, are total on
/// `NonEmpty`. The runtime check happens once, when a `Vec` is converted.
///
/// # Examples
///
/// ```rust
/// use optica::shape::NonEmpty;
///
/// let sequence = NonEmpty::try_from(vec![1, 2, 3]).unwrap();
/// assert_eq!(*sequence.head(), 1);
/// assert_eq!(sequence.tail(), &[2, 3]);
///
/// assert!(NonEmpty::<i32>::try_from(Vec::new()).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NonEmpty<A> {
    head: A,
    tail: Vec<A>,
}

impl<A> NonEmpty<A> {
    /// Creates a sequence from its first element and the rest.
    #[inline]
    pub const fn new(head: A, tail: Vec<A>) -> Self {
        Self { head, tail }
    }

    /// Creates a sequence with exactly one element.
    #[inline]
    pub const fn singleton(head: A) -> Self {
        Self::new(head, Vec::new())
    }

    /// Returns the first element.
    #[inline]
    pub const fn head(&self) -> &A {
        &self.head
    }

    /// Returns every element after the first.
    #[inline]
    pub fn tail(&self) -> &[A] {
        &self.tail
    }

    /// Returns the number of elements, which is never zero.
    #[inline]
    pub fn len(&self) -> usize {
        self.tail.len() + 1
    }

    /// Always `false`; provided for parity with other collections.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Splits the sequence into its head and tail.
    #[inline]
    pub fn into_parts(self) -> (A, Vec<A>) {
        (self.head, self.tail)
    }
}

impl<A> TryFrom<Vec<A>> for NonEmpty<A> {
    type Error = ShapeMismatch;

    fn try_from(elements: Vec<A>) -> Result<Self, Self::Error> {
        let mut elements = elements.into_iter();
        let head = elements
            .next()
            .ok_or_else(|| ShapeMismatch::new("NonEmpty::try_from", "a non-empty sequence"))?;
        Ok(Self::new(head, elements.collect()))
    }
}

impl<A> From<NonEmpty<A>> for Vec<A> {
    fn from(sequence: NonEmpty<A>) -> Self {
        let (head, tail) = sequence.into_parts();
        std::iter::once(head).chain(tail).collect()
    }
}
