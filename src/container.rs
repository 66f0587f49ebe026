//! The capability set shared by every container in this crate, and the read-only node view a
//! visualizer walks to draw one.
//!
//! # Examples
//!
//! ```
//! use ordered_containers::{Kind, OrderedContainer};
//!
//! let mut container = "rbt".parse::<Kind>().unwrap().build::<i32>();
//! for x in [10, 20, 30] {
//!     container.insert(x);
//! }
//!
//! let root = container.root_view().unwrap();
//! assert_eq!(*root.value(), 20);
//! assert_eq!(root.color_tag().as_str(), "BLACK");
//! assert_eq!(container.kind().name(), "RBT");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::{InvariantViolation, ParseKindError};
use crate::{AvlTree, MaxHeap, MinHeap, RedBlackTree};

/// A borrowed, lazily-evaluated view of one node in a container.
///
/// Children are computed on demand from the container's storage; nothing is materialized ahead
/// of time. A view borrows the container so it can't outlive it or observe a mutation.
pub trait NodeView<T> {
    /// The value stored at this node.
    fn value(&self) -> &T;

    /// The left child, if there is one.
    fn left(&self) -> Option<Box<dyn NodeView<T> + '_>>;

    /// The right child, if there is one.
    fn right(&self) -> Option<Box<dyn NodeView<T> + '_>>;

    /// The display category of this node. Red-Black nodes report their actual color, every
    /// other node reports its container's [`display_tag`][OrderedContainer::display_tag].
    fn color_tag(&self) -> DisplayTag;
}

/// Erases a concrete view into the trait object handed to renderers.
pub(crate) fn boxed<'a, T, V>(view: V) -> Box<dyn NodeView<T> + 'a>
where
    V: NodeView<T> + 'a,
{
    Box::new(view)
}

/// An ordered, mutable container of distinct (trees) or repeatable (heaps) values.
pub trait OrderedContainer<T: Ord> {
    /// Stores `value`, returning whether anything was added. Trees reject values they already
    /// hold, heaps never do.
    fn insert(&mut self, value: T) -> bool;

    /// Removes one occurrence of `value`, returning whether it was found.
    fn delete(&mut self, value: &T) -> bool;

    /// Whether `value` is stored.
    fn contains(&self, value: &T) -> bool;

    /// Empties the container.
    fn clear(&mut self);

    /// How many values are stored.
    fn size(&self) -> usize;

    /// Whether nothing is stored.
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Enumerates the stored values. Trees produce them in ascending order, heaps in storage
    /// order (which only guarantees that parents beat their children).
    fn ordered_sequence(&self) -> Box<dyn Iterator<Item = &T> + '_>;

    /// Which container this is.
    fn kind(&self) -> Kind;

    /// The container-wide display category for a renderer.
    fn display_tag(&self) -> DisplayTag;

    /// A view of the root node, or `None` when empty.
    fn root_view(&self) -> Option<Box<dyn NodeView<T> + '_>>;

    /// Checks every structural invariant, returning the first broken one.
    fn validate(&self) -> Result<(), InvariantViolation>;
}

/// The four containers this crate provides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// [`AvlTree`]
    Avl,
    /// [`RedBlackTree`]
    RedBlack,
    /// [`MinHeap`]
    MinHeap,
    /// [`MaxHeap`]
    MaxHeap,
}

impl Kind {
    /// Every kind, in declaration order.
    pub const ALL: [Kind; 4] = [Kind::Avl, Kind::RedBlack, Kind::MinHeap, Kind::MaxHeap];

    /// The descriptive name shown to users.
    pub fn name(self) -> &'static str {
        match self {
            Self::Avl => "AVL",
            Self::RedBlack => "RBT",
            Self::MinHeap => "Minimum Heap",
            Self::MaxHeap => "Maximum Heap",
        }
    }

    /// Builds an empty container of this kind behind a trait object.
    pub fn build<T>(self) -> Box<dyn OrderedContainer<T>>
    where
        T: Ord + 'static,
    {
        match self {
            Self::Avl => Box::new(AvlTree::new()),
            Self::RedBlack => Box::new(RedBlackTree::new()),
            Self::MinHeap => Box::new(MinHeap::new()),
            Self::MaxHeap => Box::new(MaxHeap::new()),
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Kind {
    type Err = ParseKindError;

    /// Accepts the descriptive [`name`][Kind::name] or a short alias, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "avl" => Ok(Self::Avl),
            "rbt" | "red-black" | "redblack" => Ok(Self::RedBlack),
            "minimum heap" | "min-heap" | "minheap" => Ok(Self::MinHeap),
            "maximum heap" | "max-heap" | "maxheap" => Ok(Self::MaxHeap),
            _ => Err(ParseKindError(s.to_string())),
        }
    }
}

/// An opaque category label a renderer maps to a color. It carries no structural meaning except
/// on Red-Black nodes, where `Red` and `Black` are the node's actual color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayTag {
    /// AVL trees and their nodes.
    Green,
    /// Red-Black trees as a whole, and min-heaps and their nodes.
    Blue,
    /// Max-heaps and their nodes.
    Plum,
    /// A red Red-Black node.
    Red,
    /// A black Red-Black node.
    Black,
}

impl DisplayTag {
    /// The upper-case name of the tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Green => "GREEN",
            Self::Blue => "BLUE",
            Self::Plum => "PLUM",
            Self::Red => "RED",
            Self::Black => "BLACK",
        }
    }
}

impl fmt::Display for DisplayTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
