//! Errors reported by the containers.
//!
//! Absent values and duplicate inserts are ordinary outcomes and are reported with `bool`s.
//! The types here cover the two things that can genuinely go wrong: a host asking for a
//! container kind that doesn't exist, and a structure whose invariants have been broken.

/// A structural invariant that [`validate`][crate::OrderedContainer::validate] found broken.
///
/// Seeing one of these means there is a bug in the container, never in the caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum InvariantViolation {
    /// An in-order walk of a tree produced two values that weren't strictly ascending.
    #[error("values are not in strictly ascending order")]
    OutOfOrder,
    /// An AVL node stores a height that doesn't match its children.
    #[error("node stores height {stored} but its subtree has height {actual}")]
    HeightMismatch {
        /// The height kept on the node.
        stored: usize,
        /// The height recomputed from the node's children.
        actual: usize,
    },
    /// An AVL node's children differ in height by more than one.
    #[error("children differ in height by {0}")]
    Unbalanced(usize),
    /// The root of a Red-Black tree is red.
    #[error("the root is red")]
    RedRoot,
    /// A red Red-Black node has a red child.
    #[error("a red node has a red child")]
    RedRed,
    /// Two paths from the same Red-Black node reach an empty position through a different
    /// number of black nodes.
    #[error("black heights {left} and {right} differ between siblings")]
    BlackHeight {
        /// Black height of the left subtree.
        left: usize,
        /// Black height of the right subtree.
        right: usize,
    },
    /// A Red-Black child's parent index doesn't point back at the node owning it.
    #[error("a child's parent link does not point at its owner")]
    BrokenParent,
    /// A heap element at `index` is ordered wrongly against its parent.
    #[error("heap element at index {index} beats its parent")]
    HeapOrder {
        /// Position of the offending child in storage order.
        index: usize,
    },
    /// The cached size disagrees with the number of reachable values.
    #[error("size is {recorded} but {reachable} values are reachable")]
    SizeMismatch {
        /// The size the container reports.
        recorded: usize,
        /// The number of values actually reachable from the root.
        reachable: usize,
    },
}

/// Returned when parsing a [`Kind`][crate::Kind] from a name that doesn't match any container.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown container kind `{0}`")]
pub struct ParseKindError(
    /// The name that didn't match.
    pub String,
);
