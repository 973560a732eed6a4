//! Immutable binary tree.

use std::fmt;

/// A binary tree with a value at every node.
///
/// Each branch exclusively owns its two subtrees, so a tree has no sharing
/// and no cycles.
///
/// # Examples
///
/// ```rust
/// use optica::shape::Tree;
///
/// let tree = Tree::branch(5, Tree::leaf(1), Tree::leaf(2));
/// assert_eq!(*tree.value(), 5);
/// assert_eq!(tree.size(), 3);
/// assert_eq!(tree.depth(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Tree<A> {
    /// A node without children.
    Leaf(A),
    /// A node with a value and two children.
    Branch(A, Subtrees<A>),
}

/// The two children of a [`Tree::Branch`].
///
/// Dropping a `Subtrees` frees every descendant with an explicit stack, so
/// trees of any depth can be dropped.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Subtrees<A> {
    // `None` only once the pair has been moved out during a consuming call.
    pair: Option<Box<(Tree<A>, Tree<A>)>>,
}

impl<A> Subtrees<A> {
    fn new(left: Tree<A>, right: Tree<A>) -> Self {
        Self {
            pair: Some(Box::new((left, right))),
        }
    }

    /// Returns the left and right subtrees.
    pub fn pair(&self) -> Option<(&Tree<A>, &Tree<A>)> {
        self.pair.as_deref().map(|(left, right)| (left, right))
    }

    fn take_pair(&mut self) -> Option<(Tree<A>, Tree<A>)> {
        self.pair.take().map(|pair| *pair)
    }

    /// Moves the left and right subtrees out.
    pub fn into_pair(mut self) -> Option<(Tree<A>, Tree<A>)> {
        self.take_pair()
    }
}

impl<A> Drop for Subtrees<A> {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        if let Some((left, right)) = self.take_pair() {
            pending.push(left);
            pending.push(right);
        }
        while let Some(node) = pending.pop() {
            if let Tree::Branch(_, mut subtrees) = node
                && let Some((left, right)) = subtrees.take_pair()
            {
                pending.push(left);
                pending.push(right);
            }
        }
    }
}

impl<A: fmt::Debug> fmt::Debug for Subtrees<A> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = formatter.debug_tuple("Subtrees");
        if let Some((left, right)) = self.pair() {
            tuple.field(left).field(right);
        }
        tuple.finish()
    }
}

impl<A> Tree<A> {
    /// Creates a leaf.
    #[inline]
    pub const fn leaf(value: A) -> Self {
        Self::Leaf(value)
    }

    /// Creates a branch from a value and two subtrees.
    #[inline]
    pub fn branch(value: A, left: Self, right: Self) -> Self {
        Self::Branch(value, Subtrees::new(left, right))
    }

    /// Returns the value stored at this node.
    #[inline]
    pub const fn value(&self) -> &A {
        match self {
            Self::Leaf(value) | Self::Branch(value, _) => value,
        }
    }

    /// Returns `true` if this node has no children.
    #[inline]
    pub const fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf(_))
    }

    /// Returns the left subtree, or `None` for a leaf.
    pub fn left(&self) -> Option<&Self> {
        self.children().map(|(left, _)| left)
    }

    /// Returns the right subtree, or `None` for a leaf.
    pub fn right(&self) -> Option<&Self> {
        self.children().map(|(_, right)| right)
    }

    /// Returns both subtrees, or `None` for a leaf.
    pub fn children(&self) -> Option<(&Self, &Self)> {
        match self {
            Self::Leaf(_) => None,
            Self::Branch(_, subtrees) => subtrees.pair(),
        }
    }

    /// Splits the node into its value and, for a branch, its two subtrees.
    pub fn into_parts(self) -> (A, Option<(Self, Self)>) {
        match self {
            Self::Leaf(value) => (value, None),
            Self::Branch(value, subtrees) => (value, subtrees.into_pair()),
        }
    }

    /// Returns the number of nodes in the tree.
    pub fn size(&self) -> usize {
        let mut pending = vec![self];
        let mut count = 0;
        while let Some(node) = pending.pop() {
            count += 1;
            if let Some((left, right)) = node.children() {
                pending.push(left);
                pending.push(right);
            }
        }
        count
    }

    /// Returns the number of nodes on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        let mut pending = vec![(self, 1)];
        let mut deepest = 0;
        while let Some((node, level)) = pending.pop() {
            deepest = deepest.max(level);
            if let Some((left, right)) = node.children() {
                pending.push((left, level + 1));
                pending.push((right, level + 1));
            }
        }
        deepest
    }
}
