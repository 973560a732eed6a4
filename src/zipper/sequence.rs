//! Zipper over a sequence.

use super::Zipper;
use crate::error::ShapeMismatch;

/// The context of a sequence zipper: the elements before and after the focus.
///
/// The suffix is stored nearest-element-last so that moving right is a pop.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SequenceContext<A> {
    prefix: Vec<A>,
    reversed_suffix: Vec<A>,
}

impl<A> SequenceContext<A> {
    /// Creates a context from an ordered prefix and an ordered suffix.
    pub fn new(prefix: Vec<A>, suffix: Vec<A>) -> Self {
        let mut reversed_suffix = suffix;
        reversed_suffix.reverse();
        Self {
            prefix,
            reversed_suffix,
        }
    }

    /// Returns the elements before the focus, in order.
    #[inline]
    pub fn prefix(&self) -> &[A] {
        &self.prefix
    }

    /// Returns the elements after the focus, in order.
    pub fn suffix(&self) -> impl DoubleEndedIterator<Item = &A> + ExactSizeIterator {
        self.reversed_suffix.iter().rev()
    }
}

/// A zipper focused on one element of a sequence.
///
/// # Examples
///
/// ```rust
/// use optica::zipper::{SequenceZipper, Zipper};
///
/// let zipper = SequenceZipper::focus_at(vec!['a', 'b', 'c'], 2).unwrap();
/// assert_eq!(*zipper.focus(), 'c');
/// assert_eq!(zipper.index(), 2);
///
/// let zipper = zipper.left().unwrap().write('B');
/// assert_eq!(zipper.reconstruct(), vec!['a', 'B', 'c']);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SequenceZipper<A> {
    focus: A,
    context: SequenceContext<A>,
}

impl<A> SequenceZipper<A> {
    /// Focuses on the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeMismatch`] if `index` is out of range.
    pub fn focus_at(whole: Vec<A>, index: usize) -> Result<Self, ShapeMismatch> {
        let mut elements = whole.into_iter();
        let prefix: Vec<A> = elements.by_ref().take(index).collect();
        let Some(focus) = elements.next() else {
            return Err(ShapeMismatch::new(
                "SequenceZipper::focus_at",
                "an index within the sequence",
            ));
        };
        let mut reversed_suffix: Vec<A> = elements.collect();
        reversed_suffix.reverse();
        Ok(Self::from_parts(
            focus,
            SequenceContext {
                prefix,
                reversed_suffix,
            },
        ))
    }

    /// Returns the position of the focus in the sequence.
    #[inline]
    pub fn index(&self) -> usize {
        self.context.prefix.len()
    }

    /// Returns `true` if there is an element before the focus.
    #[inline]
    pub fn has_left(&self) -> bool {
        !self.context.prefix.is_empty()
    }

    /// Returns `true` if there is an element after the focus.
    #[inline]
    pub fn has_right(&self) -> bool {
        !self.context.reversed_suffix.is_empty()
    }

    /// Moves the focus one element towards the start.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeMismatch`] if the focus is the first element.
    pub fn left(self) -> Result<Self, ShapeMismatch> {
        let Self { focus, context } = self;
        let SequenceContext {
            mut prefix,
            mut reversed_suffix,
        } = context;
        let next = prefix
            .pop()
            .ok_or_else(|| ShapeMismatch::new("SequenceZipper::left", "an element before the focus"))?;
        reversed_suffix.push(focus);
        log::trace!("SequenceZipper: focus moved left to {}", prefix.len());
        Ok(Self::from_parts(
            next,
            SequenceContext {
                prefix,
                reversed_suffix,
            },
        ))
    }

    /// Moves the focus one element towards the end.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeMismatch`] if the focus is the last element.
    pub fn right(self) -> Result<Self, ShapeMismatch> {
        let Self { focus, context } = self;
        let SequenceContext {
            mut prefix,
            mut reversed_suffix,
        } = context;
        let next = reversed_suffix
            .pop()
            .ok_or_else(|| ShapeMismatch::new("SequenceZipper::right", "an element after the focus"))?;
        prefix.push(focus);
        log::trace!("SequenceZipper: focus moved right to {}", prefix.len());
        Ok(Self::from_parts(
            next,
            SequenceContext {
                prefix,
                reversed_suffix,
            },
        ))
    }
}

impl<A> Zipper for SequenceZipper<A> {
    type Whole = Vec<A>;
    type Focus = A;
    type Context = SequenceContext<A>;

    /// Focuses on the head of the sequence.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeMismatch`] if the sequence is empty.
    fn focus_on(whole: Vec<A>) -> Result<Self, ShapeMismatch> {
        if whole.is_empty() {
            return Err(ShapeMismatch::new(
                "SequenceZipper::focus_on",
                "a non-empty sequence",
            ));
        }
        Self::focus_at(whole, 0)
    }

    fn into_parts(self) -> (A, SequenceContext<A>) {
        (self.focus, self.context)
    }

    fn from_parts(focus: A, context: SequenceContext<A>) -> Self {
        Self { focus, context }
    }

    fn plug(focus: A, context: SequenceContext<A>) -> Vec<A> {
        let SequenceContext {
            mut prefix,
            reversed_suffix,
        } = context;
        prefix.reserve(reversed_suffix.len() + 1);
        prefix.push(focus);
        prefix.extend(reversed_suffix.into_iter().rev());
        prefix
    }

    fn focus(&self) -> &A {
        &self.focus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_focus_on_empty_is_shape_mismatch() {
        let result = SequenceZipper::<i32>::focus_on(Vec::new());
        assert_eq!(
            result.unwrap_err(),
            ShapeMismatch::new("SequenceZipper::focus_on", "a non-empty sequence")
        );
    }

    #[rstest]
    fn test_focus_on_reads_head() {
        let zipper = SequenceZipper::focus_on(vec![7, 8, 9]).unwrap();
        assert_eq!(*zipper.focus(), 7);
        assert_eq!(zipper.index(), 0);
        assert!(!zipper.has_left());
        assert!(zipper.has_right());
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(3)]
    fn test_focus_at_splits_context(#[case] index: usize) {
        let elements = vec![10, 11, 12, 13];
        let zipper = SequenceZipper::focus_at(elements.clone(), index).unwrap();
        let (focus, context) = zipper.into_parts();
        assert_eq!(focus, elements[index]);
        assert_eq!(context.prefix(), &elements[..index]);
        assert_eq!(
            context.suffix().copied().collect::<Vec<_>>(),
            elements[index + 1..].to_vec()
        );
    }

    #[rstest]
    #[case(vec![1, 2], 2)]
    #[case(vec![1, 2], 9)]
    #[case(Vec::new(), 0)]
    fn test_focus_at_out_of_range(#[case] elements: Vec<i32>, #[case] index: usize) {
        assert_eq!(
            SequenceZipper::focus_at(elements, index).unwrap_err(),
            ShapeMismatch::new("SequenceZipper::focus_at", "an index within the sequence")
        );
    }

    #[rstest]
    fn test_right_at_end_fails() {
        let zipper = SequenceZipper::focus_at(vec![1, 2], 1).unwrap();
        assert_eq!(
            zipper.right().unwrap_err(),
            ShapeMismatch::new("SequenceZipper::right", "an element after the focus")
        );
    }

    #[rstest]
    fn test_left_at_start_fails() {
        let zipper = SequenceZipper::focus_on(vec![1]).unwrap();
        assert!(zipper.left().is_err());
    }

    #[rstest]
    fn test_walk_and_update() {
        let zipper = SequenceZipper::focus_on(vec![1, 2, 3, 4]).unwrap();
        let zipper = zipper.right().unwrap().right().unwrap().update(|n| n * 100);
        let zipper = zipper.left().unwrap().update(|n| -n);
        assert_eq!(zipper.reconstruct(), vec![1, -2, 300, 4]);
    }

    #[rstest]
    fn test_context_new_keeps_order() {
        let context = SequenceContext::new(vec![1, 2], vec![4, 5]);
        assert_eq!(SequenceZipper::plug(3, context), vec![1, 2, 3, 4, 5]);
    }
}
