//! A mutable AVL tree. Each node owns its children and caches the height of its subtree, and
//! every insert or delete rebalances the nodes on its path on the way back up.
//!
//! # Examples
//!
//! ```
//! use ordered_containers::AvlTree;
//!
//! let mut tree = AvlTree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! assert!(tree.insert(1));
//! assert!(tree.contains(&1));
//!
//! // Values are distinct, so inserting again does nothing.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.len(), 1);
//!
//! // Deleting reports whether the value was there.
//! assert!(tree.delete(&1));
//! assert!(!tree.delete(&1));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use log::{debug, trace};

use crate::container::{boxed, DisplayTag, Kind, NodeView, OrderedContainer};
use crate::error::InvariantViolation;
use crate::iter::{Branch, InOrder};

/// A height-balanced Binary Search Tree of distinct values.
#[derive(Clone)]
pub struct AvlTree<T> {
    root: Tree<T>,
    len: usize,
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for AvlTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> AvlTree<T> {
    /// Generates a new, empty `AvlTree`.
    pub fn new() -> Self {
        Self {
            root: Tree::Leaf,
            len: 0,
        }
    }

    /// How many values are stored.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The number of levels in the tree. An empty tree has a height of 0.
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// Stores `value` unless an equal value is already present. Returns whether the tree grew.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordered_containers::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// for x in [10, 20, 30] {
    ///     tree.insert(x);
    /// }
    ///
    /// // Inserting in ascending order rotated 20 up to the root.
    /// assert_eq!(*tree.root().unwrap().value(), 20);
    /// ```
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let (root, inserted) = mem::take(&mut self.root).insert(value);
        self.root = root;
        if inserted {
            self.len += 1;
        } else {
            debug!("avl: rejected duplicate value");
        }
        inserted
    }

    /// Removes `value` from the tree, returning whether it was present.
    pub fn delete(&mut self, value: &T) -> bool
    where
        T: Ord,
    {
        let (root, found) = mem::take(&mut self.root).delete(value);
        self.root = root;
        if found {
            self.len -= 1;
        } else {
            debug!("avl: value to delete was not found");
        }
        found
    }

    /// Whether `value` is stored.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut tree = &self.root;
        while let Tree::Node(n) = tree {
            tree = match value.cmp(&n.value) {
                Ordering::Less => &n.left,
                Ordering::Equal => return true,
                Ordering::Greater => &n.right,
            };
        }
        false
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        self.root = Tree::Leaf;
        self.len = 0;
    }

    /// Iterates over the values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter(InOrder::new(self.root(), self.len))
    }

    /// A view of the root node, or `None` if the tree is empty.
    pub fn root(&self) -> Option<AvlView<'_, T>> {
        self.root.node().map(|node| AvlView { node })
    }

    /// Checks ordering, cached heights, balance factors, and the size count.
    pub fn validate(&self) -> Result<(), InvariantViolation>
    where
        T: Ord,
    {
        let mut values = self.iter();
        if let Some(mut prev) = values.next() {
            for value in values {
                if prev >= value {
                    return Err(InvariantViolation::OutOfOrder);
                }
                prev = value;
            }
        }

        let (_, reachable) = self.root.check_heights()?;
        if reachable != self.len {
            return Err(InvariantViolation::SizeMismatch {
                recorded: self.len,
                reachable,
            });
        }
        Ok(())
    }
}

enum Tree<T> {
    /// The empty position below a node.
    Leaf,
    Node(Box<Node<T>>),
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::Leaf
    }
}

impl<T: Clone> Clone for Tree<T> {
    fn clone(&self) -> Self {
        match self {
            Self::Leaf => Self::Leaf,
            Self::Node(n) => Self::Node(n.clone()),
        }
    }
}

impl<T> Tree<T> {
    fn node(&self) -> Option<&Node<T>> {
        match self {
            Self::Leaf => None,
            Self::Node(n) => Some(n),
        }
    }

    fn height(&self) -> usize {
        self.node().map_or(0, |n| n.height)
    }

    fn balance_factor(&self) -> isize {
        self.node().map_or(0, Node::balance_factor)
    }

    fn insert(self, value: T) -> (Self, bool)
    where
        T: Ord,
    {
        match self {
            Self::Leaf => (Self::Node(Node::new_boxed(value)), true),
            Self::Node(n) => {
                let (n, inserted) = n.insert(value);
                (Self::Node(n), inserted)
            }
        }
    }

    fn delete(self, value: &T) -> (Self, bool)
    where
        T: Ord,
    {
        match self {
            Self::Leaf => (Self::Leaf, false),
            Self::Node(n) => n.delete(value),
        }
    }

    /// Applies a rotation to the node in this position. Only called on positions `balance` knows
    /// to be occupied.
    fn rotate(&mut self, rotation: fn(Box<Node<T>>) -> Box<Node<T>>) {
        match mem::take(self) {
            Self::Node(n) => *self = Self::Node(rotation(n)),
            Self::Leaf => unreachable!("`balance` only rotates the heavier child."),
        }
    }

    /// Returns the height of this subtree and how many nodes it holds, or the first node whose
    /// cached height or balance is wrong.
    fn check_heights(&self) -> Result<(usize, usize), InvariantViolation> {
        let Self::Node(n) = self else {
            return Ok((0, 0));
        };
        let (left_height, left_count) = n.left.check_heights()?;
        let (right_height, right_count) = n.right.check_heights()?;
        let actual = left_height.max(right_height) + 1;
        if n.height != actual {
            return Err(InvariantViolation::HeightMismatch {
                stored: n.height,
                actual,
            });
        }
        let diff = left_height.abs_diff(right_height);
        if diff > 1 {
            return Err(InvariantViolation::Unbalanced(diff));
        }
        Ok((actual, left_count + right_count + 1))
    }
}

/// A `Node` owns a value and two children (either of which may be a [`Tree::Leaf`]).
#[derive(Clone)]
struct Node<T> {
    value: T,
    left: Tree<T>,
    right: Tree<T>,

    /// How many levels are in the subtree rooted at this node.
    /// A node with no children has a height of 1.
    height: usize,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: Tree::Leaf,
            right: Tree::Leaf,
            height: 1,
        })
    }

    fn fix_height(&mut self) {
        self.height = self.left.height().max(self.right.height()) + 1;
    }

    /// Positive when the left subtree is taller.
    fn balance_factor(&self) -> isize {
        self.left.height() as isize - self.right.height() as isize
    }

    fn insert(mut self: Box<Self>, value: T) -> (Box<Self>, bool)
    where
        T: Ord,
    {
        let inserted = match value.cmp(&self.value) {
            Ordering::Less => {
                let (left, inserted) = mem::take(&mut self.left).insert(value);
                self.left = left;
                inserted
            }
            Ordering::Equal => return (self, false),
            Ordering::Greater => {
                let (right, inserted) = mem::take(&mut self.right).insert(value);
                self.right = right;
                inserted
            }
        };
        (self.balance(), inserted)
    }

    fn delete(mut self: Box<Self>, value: &T) -> (Tree<T>, bool)
    where
        T: Ord,
    {
        let found = match value.cmp(&self.value) {
            Ordering::Less => {
                let (left, found) = mem::take(&mut self.left).delete(value);
                self.left = left;
                found
            }
            Ordering::Equal => {
                return match (mem::take(&mut self.left), mem::take(&mut self.right)) {
                    (Tree::Leaf, child) | (child, Tree::Leaf) => (child, true),

                    // With two children, the in-order successor (the smallest node of the right
                    // subtree) takes this node's place.
                    (left, Tree::Node(right)) => {
                        let (right, successor) = right.take_min();
                        self.value = successor;
                        self.left = left;
                        self.right = right;
                        (Tree::Node(self.balance()), true)
                    }
                };
            }
            Ordering::Greater => {
                let (right, found) = mem::take(&mut self.right).delete(value);
                self.right = right;
                found
            }
        };
        (Tree::Node(self.balance()), found)
    }

    /// Returns the smallest value of this subtree along with the rebalanced subtree left behind.
    fn take_min(mut self: Box<Self>) -> (Tree<T>, T) {
        match mem::take(&mut self.left) {
            Tree::Leaf => {
                let Node { value, right, .. } = *self;
                (right, value)
            }
            Tree::Node(left) => {
                let (left, min) = left.take_min();
                self.left = left;
                (Tree::Node(self.balance()), min)
            }
        }
    }

    /// Rotates the right child up to become the root of this subtree. The right child's left
    /// subtree is handed over to become this node's right subtree.
    ///
    /// ```text
    ///   old_root                 new_root
    ///    /    \                   /    \
    ///   x   new_root  rotate -> old_root  z
    ///         /  \               /  \
    ///        y    z             x    y
    /// ```
    fn rotate_left(mut self: Box<Self>) -> Box<Self> {
        let mut new_root = match mem::take(&mut self.right) {
            Tree::Node(n) => n,
            // We only rotate left when the right subtree is taller than the left subtree.
            Tree::Leaf => unreachable!("`balance` saw right child taller than left child."),
        };
        trace!("avl: rotating left");

        self.right = mem::take(&mut new_root.left);
        self.fix_height();
        new_root.left = Tree::Node(self);
        new_root.fix_height();
        new_root
    }

    /// Mirror image of [`rotate_left`][Node::rotate_left].
    fn rotate_right(mut self: Box<Self>) -> Box<Self> {
        let mut new_root = match mem::take(&mut self.left) {
            Tree::Node(n) => n,
            Tree::Leaf => unreachable!("`balance` saw left child taller than right child."),
        };
        trace!("avl: rotating right");

        self.left = mem::take(&mut new_root.right);
        self.fix_height();
        new_root.right = Tree::Node(self);
        new_root.fix_height();
        new_root
    }

    /// Recomputes this node's height and rotates if its children differ in height by two.
    ///
    /// See https://en.wikipedia.org/wiki/AVL_tree#Rebalancing for terminology.
    fn balance(mut self: Box<Self>) -> Box<Self> {
        self.fix_height();
        let balanced = match self.balance_factor() {
            f if f > 1 => {
                if self.left.balance_factor() < 0 {
                    self.left.rotate(Node::rotate_left);
                }
                self.rotate_right()
            }
            f if f < -1 => {
                if self.right.balance_factor() > 0 {
                    self.right.rotate(Node::rotate_right);
                }
                self.rotate_left()
            }
            _ => self,
        };

        // In debug builds, after balancing, assert that we've restored/maintained the AVL
        // invariant.
        if cfg!(debug_assertions) {
            let left_height = balanced.left.height();
            let right_height = balanced.right.height();
            assert_eq!(balanced.height, left_height.max(right_height) + 1);
            assert!(left_height.abs_diff(right_height) <= 1);
        }
        balanced
    }
}

/// A borrowed view of one node of an [`AvlTree`].
pub struct AvlView<'a, T> {
    node: &'a Node<T>,
}

impl<T> Clone for AvlView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for AvlView<'_, T> {}

impl<'a, T> AvlView<'a, T> {
    /// The value stored at this node.
    pub fn value(&self) -> &'a T {
        &self.node.value
    }

    /// The left child, if there is one.
    pub fn left(&self) -> Option<Self> {
        self.node.left.node().map(|node| Self { node })
    }

    /// The right child, if there is one.
    pub fn right(&self) -> Option<Self> {
        self.node.right.node().map(|node| Self { node })
    }

    /// Height of the subtree rooted here.
    pub fn height(&self) -> usize {
        self.node.height
    }
}

impl<'a, T> Branch<'a, T> for AvlView<'a, T> {
    fn left(self) -> Option<Self> {
        AvlView::left(&self)
    }

    fn right(self) -> Option<Self> {
        AvlView::right(&self)
    }

    fn value(self) -> &'a T {
        AvlView::value(&self)
    }
}

impl<T> NodeView<T> for AvlView<'_, T> {
    fn value(&self) -> &T {
        AvlView::value(self)
    }

    fn left(&self) -> Option<Box<dyn NodeView<T> + '_>> {
        AvlView::left(self).map(boxed)
    }

    fn right(&self) -> Option<Box<dyn NodeView<T> + '_>> {
        AvlView::right(self).map(boxed)
    }

    fn color_tag(&self) -> DisplayTag {
        DisplayTag::Green
    }
}

/// Ascending iterator over an [`AvlTree`], created by [`AvlTree::iter`].
pub struct Iter<'a, T>(InOrder<'a, T, AvlView<'a, T>>);

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, T> IntoIterator for &'a AvlTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Ord> FromIterator<T> for AvlTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for AvlTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> OrderedContainer<T> for AvlTree<T> {
    fn insert(&mut self, value: T) -> bool {
        AvlTree::insert(self, value)
    }

    fn delete(&mut self, value: &T) -> bool {
        AvlTree::delete(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        AvlTree::contains(self, value)
    }

    fn clear(&mut self) {
        AvlTree::clear(self)
    }

    fn size(&self) -> usize {
        self.len
    }

    fn ordered_sequence(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.iter())
    }

    fn kind(&self) -> Kind {
        Kind::Avl
    }

    fn display_tag(&self) -> DisplayTag {
        DisplayTag::Green
    }

    fn root_view(&self) -> Option<Box<dyn NodeView<T> + '_>> {
        self.root().map(boxed)
    }

    fn validate(&self) -> Result<(), InvariantViolation> {
        AvlTree::validate(self)
    }
}
