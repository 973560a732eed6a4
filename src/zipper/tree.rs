//! Zipper over a binary tree.

use super::Zipper;
use crate::error::ShapeMismatch;
use crate::shape::Tree;

/// Which child was taken when descending from a branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The left child.
    Left,
    /// The right child.
    Right,
}

/// One step of the path from the root down to the focus.
///
/// Records everything about the parent branch except the child that was
/// descended into.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TreeStep<A> {
    direction: Direction,
    value: A,
    sibling: Tree<A>,
}

impl<A> TreeStep<A> {
    /// Creates a step that descended `direction` from a branch holding
    /// `value`, leaving `sibling` behind.
    #[inline]
    pub const fn new(direction: Direction, value: A, sibling: Tree<A>) -> Self {
        Self {
            direction,
            value,
            sibling,
        }
    }

    /// Returns the direction taken.
    #[inline]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Returns the parent branch's value.
    #[inline]
    pub const fn value(&self) -> &A {
        &self.value
    }

    /// Returns the subtree that was not descended into.
    #[inline]
    pub const fn sibling(&self) -> &Tree<A> {
        &self.sibling
    }

    /// Rebuilds the parent branch around `child`.
    pub fn rebuild(self, child: Tree<A>) -> Tree<A> {
        match self.direction {
            Direction::Left => Tree::branch(self.value, child, self.sibling),
            Direction::Right => Tree::branch(self.value, self.sibling, child),
        }
    }
}

/// The context of a tree zipper: the path from the root to the focus.
///
/// An empty path is the terminal context: the focus is the root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TreeContext<A> {
    path: Vec<TreeStep<A>>,
}

impl<A> TreeContext<A> {
    /// Returns the terminal context.
    #[inline]
    pub const fn root() -> Self {
        Self { path: Vec::new() }
    }

    /// Creates a context from steps ordered root first.
    #[inline]
    pub const fn from_path(path: Vec<TreeStep<A>>) -> Self {
        Self { path }
    }

    /// Returns `true` for the terminal context.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.path.is_empty()
    }

    /// Returns the number of steps between the root and the focus.
    #[inline]
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    /// Returns the steps, root first.
    #[inline]
    pub fn path(&self) -> &[TreeStep<A>] {
        &self.path
    }
}

impl<A> Default for TreeContext<A> {
    fn default() -> Self {
        Self::root()
    }
}

/// A zipper focused on one subtree of a [`Tree`].
///
/// # Examples
///
/// ```rust
/// use optica::shape::Tree;
/// use optica::zipper::{TreeZipper, Zipper};
///
/// let tree = Tree::branch(1, Tree::leaf(2), Tree::leaf(3));
/// let zipper = TreeZipper::focus_on(tree).unwrap().down_right().unwrap();
/// assert_eq!(*zipper.focus(), Tree::leaf(3));
///
/// let rebuilt = zipper.write(Tree::leaf(30)).reconstruct();
/// assert_eq!(rebuilt, Tree::branch(1, Tree::leaf(2), Tree::leaf(30)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TreeZipper<A> {
    focus: Tree<A>,
    context: TreeContext<A>,
}

impl<A> TreeZipper<A> {
    /// Returns `true` if the focus is the root of the whole tree.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.context.is_root()
    }

    /// Returns the number of steps between the root and the focus.
    #[inline]
    pub fn depth(&self) -> usize {
        self.context.depth()
    }

    /// Moves the focus to the left child.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeMismatch`] if the focus is a leaf.
    pub fn down_left(self) -> Result<Self, ShapeMismatch> {
        self.down(Direction::Left, "TreeZipper::down_left")
    }

    /// Moves the focus to the right child.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeMismatch`] if the focus is a leaf.
    pub fn down_right(self) -> Result<Self, ShapeMismatch> {
        self.down(Direction::Right, "TreeZipper::down_right")
    }

    /// Moves the focus to the parent.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeMismatch`] if the focus is already the root.
    pub fn up(self) -> Result<Self, ShapeMismatch> {
        let Self { focus, mut context } = self;
        let step = context
            .path
            .pop()
            .ok_or_else(|| ShapeMismatch::new("TreeZipper::up", "a focus below the root"))?;
        log::trace!("TreeZipper: focus moved up to depth {}", context.depth());
        Ok(Self::from_parts(step.rebuild(focus), context))
    }

    fn down(self, direction: Direction, operation: &'static str) -> Result<Self, ShapeMismatch> {
        let Self { focus, mut context } = self;
        let (value, Some((left, right))) = focus.into_parts() else {
            return Err(ShapeMismatch::new(operation, "a branch"));
        };
        let (child, sibling) = match direction {
            Direction::Left => (left, right),
            Direction::Right => (right, left),
        };
        context.path.push(TreeStep::new(direction, value, sibling));
        log::trace!("TreeZipper: focus moved {direction:?} to depth {}", context.depth());
        Ok(Self::from_parts(child, context))
    }
}

impl<A> Zipper for TreeZipper<A> {
    type Whole = Tree<A>;
    type Focus = Tree<A>;
    type Context = TreeContext<A>;

    /// Focuses on the root; every tree has one.
    fn focus_on(whole: Tree<A>) -> Result<Self, ShapeMismatch> {
        Ok(Self::from_parts(whole, TreeContext::root()))
    }

    fn into_parts(self) -> (Tree<A>, TreeContext<A>) {
        (self.focus, self.context)
    }

    fn from_parts(focus: Tree<A>, context: TreeContext<A>) -> Self {
        Self { focus, context }
    }

    /// Folds the path from the focus back up to the root.
    fn plug(focus: Tree<A>, context: TreeContext<A>) -> Tree<A> {
        context
            .path
            .into_iter()
            .rev()
            .fold(focus, |child, step| step.rebuild(child))
    }

    fn focus(&self) -> &Tree<A> {
        &self.focus
    }
}
