//! This crate exposes four ordered, mutable containers behind one shared capability set, along
//! with a read-only node view a visualizer can walk to draw them.
//!
//! ## Binary Search Trees
//!
//! A Binary Search Tree stores values in `Node`s with up to two children. For every `Node`, all
//! the `Node`s in its left subtree hold smaller values and all the `Node`s in its right subtree
//! hold larger values. Searching takes `O(height)`, and visiting the left subtree, then the node,
//! then the right subtree yields the values in sorted order.
//!
//! Both trees here keep their height at `O(lg N)` by restructuring themselves on every insert and
//! delete:
//!
//! - [`AvlTree`] keeps the heights of every node's two subtrees within one of each other.
//! - [`RedBlackTree`] colors every node red or black, never lets a red node have a red child, and
//!   keeps the number of black nodes on every path down from a node the same.
//!
//! Trees hold distinct values. Inserting a value that's already present does nothing.
//!
//! ## Heaps
//!
//! [`MinHeap`] and [`MaxHeap`] store values in a dense array read as a complete binary tree, and
//! only promise that every parent beats its children. They keep duplicates, and searching for a
//! value is a linear scan.
//!
//! ## Shared interface
//!
//! Every container implements [`OrderedContainer`], so a host can pick one at runtime with
//! [`Kind::build`]. [`OrderedContainer::root_view`] returns a [`NodeView`] computed lazily from
//! the container's own storage.
//!
//! The crate logs rotations, recolorings and sifts at `trace` level through the [`log`] facade,
//! and installs no logger of its own.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod avl;
pub mod container;
pub mod error;
pub mod heap;
mod iter;
pub mod red_black;


pub use avl::AvlTree;
pub use container::{DisplayTag, Kind, NodeView, OrderedContainer};
pub use error::{InvariantViolation, ParseKindError};
pub use heap::{Heap, MaxHeap, MinHeap};
pub use red_black::RedBlackTree;
