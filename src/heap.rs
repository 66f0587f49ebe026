//! Binary heaps stored as a dense `Vec` read as a complete binary tree: the parent of `i` is
//! `(i - 1) / 2` and its children are `2i + 1` and `2i + 2`.
//!
//! [`MinHeap`] and [`MaxHeap`] are the same [`Heap`] with a different [`Direction`]. Only the
//! parent/child relation is ordered, so [`Heap::iter`] yields storage order rather than sorted
//! order.
//!
//! # Examples
//!
//! ```
//! use ordered_containers::{MaxHeap, MinHeap};
//!
//! let max: MaxHeap<_> = [5, 3, 8].into_iter().collect();
//! assert_eq!(max.peek(), Some(&8));
//! assert_eq!(max.as_slice(), [8, 3, 5]);
//!
//! let mut min: MinHeap<_> = [5, 3, 8].into_iter().collect();
//! assert_eq!(min.peek(), Some(&3));
//!
//! // Heaps keep duplicates.
//! min.insert(3);
//! assert_eq!(min.len(), 4);
//! assert!(min.delete(&3));
//! assert!(min.contains(&3));
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::slice;

use log::{debug, trace};

use crate::container::{boxed, DisplayTag, Kind, NodeView, OrderedContainer};
use crate::error::InvariantViolation;

/// Which end of the order a heap keeps on top.
pub trait Direction {
    /// The kind reported by heaps with this direction.
    const KIND: Kind;

    /// The display tag of heaps with this direction, and of each of their nodes.
    const DISPLAY_TAG: DisplayTag;

    /// Whether `a` belongs above `b`. Equal values never beat each other.
    fn beats<T: Ord>(a: &T, b: &T) -> bool;
}

/// Smallest value on top.
#[derive(Debug, Clone, Copy, Default)]
pub struct Min;

/// Largest value on top.
#[derive(Debug, Clone, Copy, Default)]
pub struct Max;

impl Direction for Min {
    const KIND: Kind = Kind::MinHeap;
    const DISPLAY_TAG: DisplayTag = DisplayTag::Blue;

    fn beats<T: Ord>(a: &T, b: &T) -> bool {
        a < b
    }
}

impl Direction for Max {
    const KIND: Kind = Kind::MaxHeap;
    const DISPLAY_TAG: DisplayTag = DisplayTag::Plum;

    fn beats<T: Ord>(a: &T, b: &T) -> bool {
        a > b
    }
}

/// A heap with the smallest value at the root.
pub type MinHeap<T> = Heap<T, Min>;

/// A heap with the largest value at the root.
pub type MaxHeap<T> = Heap<T, Max>;

fn parent(i: usize) -> usize {
    (i - 1) / 2
}

fn left_child(i: usize) -> usize {
    2 * i + 1
}

fn right_child(i: usize) -> usize {
    2 * i + 2
}

/// An array-backed binary heap ordered by `D`.
pub struct Heap<T, D> {
    data: Vec<T>,
    _direction: PhantomData<D>,
}

impl<T, D> Default for Heap<T, D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, D> Clone for Heap<T, D> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            _direction: PhantomData,
        }
    }
}

impl<T: fmt::Debug, D> fmt::Debug for Heap<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(&self.data).finish()
    }
}

impl<T, D> Heap<T, D> {
    /// Generates a new, empty heap.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Generates an empty heap with room for `capacity` values before reallocating.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            _direction: PhantomData,
        }
    }

    /// How many values are stored, counting duplicates.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether nothing is stored.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The value on top, if any.
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// The values in storage order.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates over the values in storage order.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Removes every value, keeping the allocation.
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// A view of the top value, or `None` if the heap is empty.
    pub fn root(&self) -> Option<HeapView<'_, T, D>> {
        HeapView::at(&self.data, 0)
    }
}

impl<T: Ord, D: Direction> Heap<T, D> {
    /// Appends `value` and sifts it up to its place. Always returns `true`.
    pub fn insert(&mut self, value: T) -> bool {
        self.data.push(value);
        self.sift_up(self.data.len() - 1);
        true
    }

    /// Removes one copy of `value`, returning whether it was found. Finding it is a linear scan.
    pub fn delete(&mut self, value: &T) -> bool {
        let Some(index) = self.data.iter().position(|v| v == value) else {
            debug!("heap: value to delete was not found");
            return false;
        };

        self.data.swap_remove(index);
        // The former last value now sits at `index`. It came from another branch, so it may beat
        // its new parent or lose to its new children.
        if index < self.data.len() {
            let index = self.sift_up(index);
            self.sift_down(index);
        }
        true
    }

    /// Whether `value` is stored. This is a linear scan.
    pub fn contains(&self, value: &T) -> bool {
        self.data.contains(value)
    }

    /// Checks that no value beats its parent.
    pub fn validate(&self) -> Result<(), InvariantViolation> {
        match (1..self.data.len()).find(|&i| D::beats(&self.data[i], &self.data[parent(i)])) {
            Some(index) => Err(InvariantViolation::HeapOrder { index }),
            None => Ok(()),
        }
    }

    /// Swaps the value at `index` with its parent while it beats it. Returns where it stopped.
    fn sift_up(&mut self, mut index: usize) -> usize {
        while index > 0 {
            let p = parent(index);
            if !D::beats(&self.data[index], &self.data[p]) {
                break;
            }
            trace!("heap: sifting up from {index} to {p}");
            self.data.swap(index, p);
            index = p;
        }
        index
    }

    /// Swaps the value at `index` with whichever child beats both it and its sibling, until no
    /// child does. A missing child never wins.
    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let mut top = index;
            for child in [left_child(index), right_child(index)] {
                if child < len && D::beats(&self.data[child], &self.data[top]) {
                    top = child;
                }
            }
            if top == index {
                break;
            }
            trace!("heap: sifting down from {index} to {top}");
            self.data.swap(index, top);
            index = top;
        }
    }
}

/// A borrowed view of one position of a [`Heap`]. Children are computed from the index on
/// demand and only exist while they're inside the heap.
pub struct HeapView<'a, T, D> {
    data: &'a [T],
    index: usize,
    _direction: PhantomData<D>,
}

impl<T, D> Clone for HeapView<'_, T, D> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T, D> Copy for HeapView<'_, T, D> {}

impl<'a, T, D> HeapView<'a, T, D> {
    fn at(data: &'a [T], index: usize) -> Option<Self> {
        (index < data.len()).then(|| Self {
            data,
            index,
            _direction: PhantomData,
        })
    }

    /// The value stored at this position.
    pub fn value(&self) -> &'a T {
        &self.data[self.index]
    }

    /// The left child, if there is one.
    pub fn left(&self) -> Option<Self> {
        Self::at(self.data, left_child(self.index))
    }

    /// The right child, if there is one.
    pub fn right(&self) -> Option<Self> {
        Self::at(self.data, right_child(self.index))
    }

    /// This position in storage order.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl<T, D: Direction> NodeView<T> for HeapView<'_, T, D> {
    fn value(&self) -> &T {
        HeapView::value(self)
    }

    fn left(&self) -> Option<Box<dyn NodeView<T> + '_>> {
        HeapView::left(self).map(boxed)
    }

    fn right(&self) -> Option<Box<dyn NodeView<T> + '_>> {
        HeapView::right(self).map(boxed)
    }

    fn color_tag(&self) -> DisplayTag {
        D::DISPLAY_TAG
    }
}

impl<'a, T, D> IntoIterator for &'a Heap<T, D> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Ord, D: Direction> FromIterator<T> for Heap<T, D> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut heap = Self::new();
        heap.extend(iter);
        heap
    }
}

impl<T: Ord, D: Direction> Extend<T> for Heap<T, D> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord, D: Direction> OrderedContainer<T> for Heap<T, D> {
    fn insert(&mut self, value: T) -> bool {
        Heap::insert(self, value)
    }

    fn delete(&mut self, value: &T) -> bool {
        Heap::delete(self, value)
    }

    fn contains(&self, value: &T) -> bool {
        Heap::contains(self, value)
    }

    fn clear(&mut self) {
        Heap::clear(self)
    }

    fn size(&self) -> usize {
        self.len()
    }

    fn ordered_sequence(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.iter())
    }

    fn kind(&self) -> Kind {
        D::KIND
    }

    fn display_tag(&self) -> DisplayTag {
        D::DISPLAY_TAG
    }

    fn root_view(&self) -> Option<Box<dyn NodeView<T> + '_>> {
        self.root().map(boxed)
    }

    fn validate(&self) -> Result<(), InvariantViolation> {
        Heap::validate(self)
    }
}
