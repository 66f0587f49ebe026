//! A Red-Black tree whose nodes live in a single `Vec` arena and refer to each other by index.
//!
//! Children are owned through the `left`/`right` indices reachable from the root. The `parent`
//! index is a back-reference used for rotations and fixups; it always names the node whose
//! `left` or `right` slot holds the child.
//!
//! The arena stays dense: removing a node moves the last node into its slot and re-points the
//! moved node's neighbors.
//!
//! # Examples
//!
//! ```
//! use ordered_containers::{DisplayTag, RedBlackTree};
//!
//! let mut tree = RedBlackTree::new();
//! for x in [10, 20, 30] {
//!     tree.insert(x);
//! }
//!
//! let root = tree.root().unwrap();
//! assert_eq!(*root.value(), 20);
//! assert_eq!(root.color(), DisplayTag::Black);
//! assert_eq!(root.left().unwrap().color(), DisplayTag::Red);
//! assert_eq!(root.right().unwrap().color(), DisplayTag::Red);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use log::{debug, trace};

use crate::container::{boxed, DisplayTag, Kind, NodeView, OrderedContainer};
use crate::error::InvariantViolation;
use crate::iter::{Branch, InOrder};

/// Position of a node in the arena.
type NodeId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Red,
    Black,
}

/// Which child slot of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Left,
    Right,
}

impl Side {
    fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

#[derive(Clone)]
struct Node<T> {
    value: T,
    color: Color,
    parent: Option<NodeId>,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

/// A color-balanced Binary Search Tree of distinct values.
#[derive(Clone)]
pub struct RedBlackTree<T> {
    nodes: Vec<Node<T>>,
    root: Option<NodeId>,
}

impl<T> Default for RedBlackTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for RedBlackTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<T> RedBlackTree<T> {
    /// Generates a new, empty `RedBlackTree`.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }

    /// How many values are stored.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The number of levels in the tree. An empty tree has a height of 0.
    pub fn height(&self) -> usize {
        fn height<T>(view: Option<RedBlackView<'_, T>>) -> usize {
            view.map_or(0, |v| height(v.left()).max(height(v.right())) + 1)
        }
        height(self.root())
    }

    /// Stores `value` unless an equal value is already present. Returns whether the tree grew.
    ///
    /// The new node starts red under the position an ordinary descent finds for it, then
    /// `fix_insert` removes any red-red pair that created.
    pub fn insert(&mut self, value: T) -> bool
    where
        T: Ord,
    {
        let mut parent = None;
        let mut cursor = self.root;
        while let Some(id) = cursor {
            let side = match value.cmp(&self.nodes[id].value) {
                Ordering::Less => Side::Left,
                Ordering::Equal => {
                    debug!("red-black: rejected duplicate value");
                    return false;
                }
                Ordering::Greater => Side::Right,
            };
            parent = Some((id, side));
            cursor = self.child(id, side);
        }

        let id = self.nodes.len();
        self.nodes.push(Node {
            value,
            color: Color::Red,
            parent: parent.map(|(p, _)| p),
            left: None,
            right: None,
        });
        match parent {
            Some((p, side)) => self.set_child(p, side, Some(id)),
            None => self.root = Some(id),
        }
        self.fix_insert(id);
        true
    }

    /// Removes `value` from the tree, returning whether it was present.
    ///
    /// A node with two children swaps values with its in-order successor, and the successor's
    /// node (which has no left child) is the one physically removed. Removing a black node
    /// leaves its position one black short, which `fix_delete` repairs.
    pub fn delete(&mut self, value: &T) -> bool
    where
        T: Ord,
    {
        let Some(mut target) = self.find(value) else {
            debug!("red-black: value to delete was not found");
            return false;
        };

        if let (Some(_), Some(right)) = (self.nodes[target].left, self.nodes[target].right) {
            let successor = self.minimum(right);
            self.swap_values(target, successor);
            target = successor;
        }

        let Node {
            left,
            right,
            parent,
            color,
            ..
        } = self.nodes[target];
        let child = left.or(right);
        self.replace_child(parent, target, child);
        if let Some(child) = child {
            self.nodes[child].parent = parent;
        }

        // `target` is unlinked now, so the fixup can't see it.
        if color == Color::Black {
            self.fix_delete(child, parent);
        }
        self.release(target);
        true
    }

    /// Whether `value` is stored.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        self.find(value).is_some()
    }

    /// Removes every value.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Iterates over the values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter(InOrder::new(self.root(), self.len()))
    }

    /// A view of the root node, or `None` if the tree is empty.
    pub fn root(&self) -> Option<RedBlackView<'_, T>> {
        self.root.map(|id| RedBlackView { tree: self, id })
    }

    /// Checks ordering, parent links, the coloring rules, and the size count.
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

        if self.color(self.root) == Color::Red {
            return Err(InvariantViolation::RedRoot);
        }
        let mut reachable = 0;
        self.check_subtree(self.root, None, &mut reachable)?;
        if reachable != self.nodes.len() {
            return Err(InvariantViolation::SizeMismatch {
                recorded: self.nodes.len(),
                reachable,
            });
        }
        Ok(())
    }

    /// Returns the black height of the subtree at `id`, counting the empty positions below it
    /// as one black level.
    fn check_subtree(
        &self,
        id: Option<NodeId>,
        parent: Option<NodeId>,
        reachable: &mut usize,
    ) -> Result<usize, InvariantViolation> {
        let Some(id) = id else {
            return Ok(1);
        };
        let node = &self.nodes[id];
        *reachable += 1;
        if node.parent != parent {
            return Err(InvariantViolation::BrokenParent);
        }
        if node.color == Color::Red
            && (self.color(node.left) == Color::Red || self.color(node.right) == Color::Red)
        {
            return Err(InvariantViolation::RedRed);
        }

        let left = self.check_subtree(node.left, Some(id), reachable)?;
        let right = self.check_subtree(node.right, Some(id), reachable)?;
        if left != right {
            return Err(InvariantViolation::BlackHeight { left, right });
        }
        Ok(left + usize::from(node.color == Color::Black))
    }

    fn find(&self, value: &T) -> Option<NodeId>
    where
        T: Ord,
    {
        let mut cursor = self.root;
        while let Some(id) = cursor {
            cursor = match value.cmp(&self.nodes[id].value) {
                Ordering::Less => self.nodes[id].left,
                Ordering::Equal => return Some(id),
                Ordering::Greater => self.nodes[id].right,
            };
        }
        None
    }

    fn minimum(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.nodes[id].left {
            id = left;
        }
        id
    }

    /// Empty positions count as black.
    fn color(&self, id: Option<NodeId>) -> Color {
        id.map_or(Color::Black, |id| self.nodes[id].color)
    }

    fn is_red(&self, id: Option<NodeId>) -> bool {
        self.color(id) == Color::Red
    }

    fn child(&self, id: NodeId, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.nodes[id].left,
            Side::Right => self.nodes[id].right,
        }
    }

    fn set_child(&mut self, id: NodeId, side: Side, child: Option<NodeId>) {
        match side {
            Side::Left => self.nodes[id].left = child,
            Side::Right => self.nodes[id].right = child,
        }
    }

    /// Which slot of `parent` holds `child`.
    fn side_of(&self, parent: NodeId, child: Option<NodeId>) -> Side {
        if self.nodes[parent].left == child {
            Side::Left
        } else {
            Side::Right
        }
    }

    /// Points whatever held `old` (its parent's slot, or the root) at `new`. Does not touch
    /// `new`'s parent index.
    fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            Some(p) => {
                let side = self.side_of(p, Some(old));
                self.set_child(p, side, new);
            }
            None => self.root = new,
        }
    }

    fn swap_values(&mut self, a: NodeId, b: NodeId) {
        let (lo, hi) = (a.min(b), a.max(b));
        let (head, tail) = self.nodes.split_at_mut(hi);
        mem::swap(&mut head[lo].value, &mut tail[0].value);
    }

    /// Rotates `id` down towards `side`, lifting its child on the opposite side into its place.
    /// A left rotation is `rotate(id, Side::Left)`.
    ///
    /// ```text
    ///      parent                  parent
    ///        |                       |
    ///       id                      rises
    ///      /  \     rotate left    /    \
    ///     x   rises      ->       id     z
    ///         /  \               /  \
    ///        y    z             x    y
    /// ```
    ///
    /// ## Panics
    ///
    /// When `id` has no child on the opposite side.
    fn rotate(&mut self, id: NodeId, side: Side) {
        trace!("red-black: rotating {side:?}");
        let rises = self
            .child(id, side.opposite())
            .expect("Rotating requires a child to lift.");

        let handed_over = self.child(rises, side);
        self.set_child(id, side.opposite(), handed_over);
        if let Some(h) = handed_over {
            self.nodes[h].parent = Some(id);
        }

        let parent = self.nodes[id].parent;
        self.nodes[rises].parent = parent;
        self.replace_child(parent, id, Some(rises));

        self.set_child(rises, side, Some(id));
        self.nodes[id].parent = Some(rises);
    }

    /// Walks up from a freshly inserted red node while its parent is red as well.
    fn fix_insert(&mut self, mut node: NodeId) {
        while let Some(parent) = self.nodes[node].parent.filter(|&p| self.is_red(Some(p))) {
            let grandparent = self.nodes[parent]
                .parent
                .expect("A red node is never the root.");
            let side = self.side_of(grandparent, Some(parent));
            let uncle = self.child(grandparent, side.opposite());

            if let Some(uncle) = uncle.filter(|&u| self.is_red(Some(u))) {
                // Push the grandparent's blackness down one level and look for a new violation
                // two levels up.
                trace!("red-black: recoloring under a red uncle");
                self.nodes[parent].color = Color::Black;
                self.nodes[uncle].color = Color::Black;
                self.nodes[grandparent].color = Color::Red;
                node = grandparent;
                continue;
            }

            // Straighten a zig-zag so the red pair leans the same way as the parent.
            if self.child(parent, side.opposite()) == Some(node) {
                node = parent;
                self.rotate(node, side);
            }
            let parent = self.nodes[node].parent.expect("Rotation kept the parent.");
            let grandparent = self.nodes[parent]
                .parent
                .expect("Rotation kept the grandparent.");
            self.nodes[parent].color = Color::Black;
            self.nodes[grandparent].color = Color::Red;
            self.rotate(grandparent, side.opposite());
        }

        if let Some(root) = self.root {
            self.nodes[root].color = Color::Black;
        }
    }

    /// Repairs a position (`node`, possibly empty, under `parent`) whose paths carry one black
    /// node fewer than its sibling's.
    fn fix_delete(&mut self, mut node: Option<NodeId>, mut parent: Option<NodeId>) {
        while node != self.root && !self.is_red(node) {
            let Some(p) = parent else {
                break;
            };
            let side = self.side_of(p, node);
            let mut sibling = self
                .child(p, side.opposite())
                .expect("A position missing a black node always has a sibling.");

            if self.is_red(Some(sibling)) {
                trace!("red-black: rotating a red sibling into place");
                self.nodes[sibling].color = Color::Black;
                self.nodes[p].color = Color::Red;
                self.rotate(p, side);
                sibling = self
                    .child(p, side.opposite())
                    .expect("A red sibling's child becomes the new sibling.");
            }

            let near = self.child(sibling, side);
            let far = self.child(sibling, side.opposite());
            if !self.is_red(near) && !self.is_red(far) {
                // Take one black from both sides and push the deficit up to the parent.
                self.nodes[sibling].color = Color::Red;
                node = Some(p);
                parent = self.nodes[p].parent;
                continue;
            }

            if !self.is_red(far) {
                let near = near.expect("`near` is red so it exists.");
                self.nodes[near].color = Color::Black;
                self.nodes[sibling].color = Color::Red;
                self.rotate(sibling, side.opposite());
                sibling = self
                    .child(p, side.opposite())
                    .expect("The near nephew became the sibling.");
            }

            self.nodes[sibling].color = self.nodes[p].color;
            self.nodes[p].color = Color::Black;
            if let Some(far) = self.child(sibling, side.opposite()) {
                self.nodes[far].color = Color::Black;
            }
            self.rotate(p, side);
            node = self.root;
            parent = None;
        }

        if let Some(node) = node {
            self.nodes[node].color = Color::Black;
        }
    }

    /// Removes an unlinked node from the arena and drops its value. The last node in the arena
    /// moves into the freed slot, so its parent's child index (or the root) and its children's
    /// parent indices are re-pointed.
    fn release(&mut self, id: NodeId) {
        self.nodes.swap_remove(id);
        let moved_from = self.nodes.len();
        if id < moved_from {
            let Node {
                parent,
                left,
                right,
                ..
            } = self.nodes[id];
            match parent {
                Some(p) => {
                    let side = self.side_of(p, Some(moved_from));
                    self.set_child(p, side, Some(id));
                }
                None => self.root = Some(id),
            }
            for child in [left, right].into_iter().flatten() {
                self.nodes[child].parent = Some(id);
            }
        }
    }
}

/// A borrowed view of one node of a [`RedBlackTree`].
pub struct RedBlackView<'a, T> {
    tree: &'a RedBlackTree<T>,
    id: NodeId,
}

impl<T> Clone for RedBlackView<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for RedBlackView<'_, T> {}

impl<'a, T> RedBlackView<'a, T> {
    fn node(&self) -> &'a Node<T> {
        &self.tree.nodes[self.id]
    }

    /// The value stored at this node.
    pub fn value(&self) -> &'a T {
        &self.node().value
    }

    /// The left child, if there is one.
    pub fn left(&self) -> Option<Self> {
        self.node().left.map(|id| Self { id, ..*self })
    }

    /// The right child, if there is one.
    pub fn right(&self) -> Option<Self> {
        self.node().right.map(|id| Self { id, ..*self })
    }

    /// The node's color, as [`DisplayTag::Red`] or [`DisplayTag::Black`].
    pub fn color(&self) -> DisplayTag {
        match self.node().color {
            Color::Red => DisplayTag::Red,
            Color::Black => DisplayTag::Black,
        }
    }
}

impl<'a, T> Branch<'a, T> for RedBlackView<'a, T> {
    fn left(self) -> Option<Self> {
        RedBlackView::left(&self)
    }

    fn right(self) -> Option<Self> {
        RedBlackView::right(&self)
    }

    fn value(self) -> &'a T {
        RedBlackView::value(&self)
    }
}

impl<T> NodeView<T> for RedBlackView<'_, T> {
    fn value(&self) -> &T {
        RedBlackView::value(self)
    }

    fn left(&self) -> Option<Box<dyn NodeView<T> + '_>> {
        RedBlackView::left(self).map(boxed)
    }

    fn right(&self) -> Option<Box<dyn NodeView<T> + '_>> {
        RedBlackView::right(self).map(boxed)
    }

    fn color_tag(&self) -> DisplayTag {
        self.color()
    }
}

/// Ascending iterator over a [`RedBlackTree`], created by [`RedBlackTree::iter`].
pub struct Iter<'a, T>(InOrder<'a, T, RedBlackView<'a, T>>);

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<'a, T> IntoIterator for &'a RedBlackTree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Ord> FromIterator<T> for RedBlackTree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

impl<T: Ord> Extend<T> for RedBlackTree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> OrderedContainer<T> for RedBlackTree<T> {
    fn insert(&mut self, value: T) -> bool {
        RedBlackTree::insert(self, value)
    }

    fn delete(&mut self, value: &T) -> bool {
        RedBlackTree::delete(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        RedBlackTree::contains(self, value)
    }

    fn clear(&mut self) {
        RedBlackTree::clear(self)
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn ordered_sequence(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.iter())
    }

    fn kind(&self) -> Kind {
        Kind::RedBlack
    }

    fn display_tag(&self) -> DisplayTag {
        DisplayTag::Blue
    }

    fn root_view(&self) -> Option<Box<dyn NodeView<T> + '_>> {
        self.root().map(boxed)
    }

    fn validate(&self) -> Result<(), InvariantViolation> {
        RedBlackTree::validate(self)
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use super::*;

    /// The value and color of a node, for compact assertions.
    fn describe<T: Copy>(view: Option<RedBlackView<'_, T>>) -> Option<(T, DisplayTag)> {
        view.map(|v| (*v.value(), v.color()))
    }

    fn values(tree: &RedBlackTree<i32>) -> Vec<i32> {
        tree.iter().copied().collect()
    }

    #[test]
    fn ascending_inserts_rotate_at_grandparent() {
        let mut tree = RedBlackTree::new();
        for x in [10, 20, 30] {
            tree.insert(x);
        }

        let root = tree.root();
        assert_eq!(describe(root), Some((20, DisplayTag::Black)));
        assert_eq!(
            describe(root.and_then(|r| r.left())),
            Some((10, DisplayTag::Red))
        );
        assert_eq!(
            describe(root.and_then(|r| r.right())),
            Some((30, DisplayTag::Red))
        );
    }

    #[test]
    fn zig_zag_insert_double_rotates() {
        let mut tree = RedBlackTree::new();
        for x in [30, 10, 20] {
            tree.insert(x);
        }

        let root = tree.root();
        assert_eq!(describe(root), Some((20, DisplayTag::Black)));
        assert_eq!(
            describe(root.and_then(|r| r.left())),
            Some((10, DisplayTag::Red))
        );
        assert_eq!(tree.validate(), Ok(()));
    }

    #[test]
    fn red_uncle_recolors() {
        let mut tree = RedBlackTree::new();
        for x in [10, 5, 15, 1] {
            tree.insert(x);
        }

        let root = tree.root();
        assert_eq!(describe(root), Some((10, DisplayTag::Black)));
        let five = root.and_then(|r| r.left());
        assert_eq!(describe(five), Some((5, DisplayTag::Black)));
        assert_eq!(
            describe(root.and_then(|r| r.right())),
            Some((15, DisplayTag::Black))
        );
        assert_eq!(
            describe(five.and_then(|n| n.left())),
            Some((1, DisplayTag::Red))
        );
    }

    #[test]
    fn duplicate_insert_is_ignored() {
        let mut tree: RedBlackTree<i32> = [5, 3, 8].into_iter().collect();

        assert!(!tree.insert(8));
        assert_eq!(tree.len(), 3);
        assert_eq!(values(&tree), [3, 5, 8]);
        assert_eq!(tree.validate(), Ok(()));
    }

    #[test]
    fn delete_red_leaf() {
        let mut tree: RedBlackTree<i32> = [10, 20, 30].into_iter().collect();

        assert!(tree.delete(&10));
        assert_eq!(describe(tree.root()), Some((20, DisplayTag::Black)));
        assert_eq!(
            describe(tree.root().and_then(|r| r.right())),
            Some((30, DisplayTag::Red))
        );
        assert_eq!(tree.validate(), Ok(()));
    }

    #[test]
    fn delete_root_with_two_children_uses_successor() {
        let mut tree: RedBlackTree<i32> = [10, 20, 30].into_iter().collect();

        assert!(tree.delete(&20));
        assert_eq!(describe(tree.root()), Some((30, DisplayTag::Black)));
        assert_eq!(
            describe(tree.root().and_then(|r| r.left())),
            Some((10, DisplayTag::Red))
        );
        assert!(tree.root().and_then(|r| r.right()).is_none());
        assert_eq!(tree.validate(), Ok(()));
    }

    #[test]
    fn delete_black_leaf_rotates_through_far_nephew() {
        let mut tree: RedBlackTree<i32> = [10, 5, 15, 1].into_iter().collect();

        assert!(tree.delete(&15));

        let root = tree.root();
        assert_eq!(describe(root), Some((5, DisplayTag::Black)));
        assert_eq!(
            describe(root.and_then(|r| r.left())),
            Some((1, DisplayTag::Black))
        );
        assert_eq!(
            describe(root.and_then(|r| r.right())),
            Some((10, DisplayTag::Black))
        );
        assert_eq!(tree.validate(), Ok(()));
    }

    #[test]
    fn delete_missing_value() {
        let mut tree: RedBlackTree<i32> = (0..10).collect();

        assert!(!tree.delete(&42));
        assert_eq!(tree.len(), 10);
        assert_eq!(values(&tree), (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn release_repoints_moved_node() {
        // Values went in ascending order so value `x` sits in slot `x`. Each delete moves the
        // node in the last slot into the freed one.
        let mut tree: RedBlackTree<i32> = (0..16).collect();
        for x in [3, 0, 15, 7] {
            assert!(tree.delete(&x));
            assert_eq!(tree.validate(), Ok(()));
        }
        assert_eq!(values(&tree), [1, 2, 4, 5, 6, 8, 9, 10, 11, 12, 13, 14]);
    }

    #[test]
    fn delete_drops_removed_value() {
        let shared = Rc::new(5);
        let mut tree = RedBlackTree::new();
        for x in [3, 8, 1] {
            tree.insert(Rc::new(x));
        }
        tree.insert(Rc::clone(&shared));
        assert_eq!(Rc::strong_count(&shared), 2);

        assert!(tree.delete(&shared));
        assert_eq!(Rc::strong_count(&shared), 1);
        assert_eq!(tree.len(), 3);
    }

    #[test]
    fn delete_everything() {
        let mut tree: RedBlackTree<i32> = (0..64).collect();
        for x in (0..64).rev().step_by(2).chain((0..64).step_by(2)) {
            assert!(tree.delete(&x));
            assert_eq!(tree.validate(), Ok(()));
        }

        assert!(tree.is_empty());
        assert!(tree.root().is_none());
    }

    #[test]
    fn height_stays_logarithmic() {
        let tree: RedBlackTree<i32> = (0..1024).collect();

        // A Red-Black tree with n nodes is at most 2 lg(n + 1) tall.
        assert!(tree.height() <= 20);
        assert_eq!(tree.validate(), Ok(()));
    }

    #[test]
    fn validate_catches_red_root() {
        let mut tree: RedBlackTree<i32> = [1].into_iter().collect();
        tree.nodes[0].color = Color::Red;

        assert_eq!(tree.validate(), Err(InvariantViolation::RedRoot));
    }
}
