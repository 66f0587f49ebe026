//! In-order traversal shared by the two trees.

use std::marker::PhantomData;

/// A cheap handle to a tree node that can step to its children.
pub(crate) trait Branch<'a, T: 'a>: Copy {
    fn left(self) -> Option<Self>;
    fn right(self) -> Option<Self>;
    fn value(self) -> &'a T;
}

/// Walks a tree in order using an explicit stack so deep trees can't overflow the call stack.
/// The stack holds the path of nodes whose left subtree is being visited.
pub(crate) struct InOrder<'a, T, B> {
    stack: Vec<B>,
    remaining: usize,
    _values: PhantomData<&'a T>,
}

impl<'a, T: 'a, B: Branch<'a, T>> InOrder<'a, T, B> {
    pub(crate) fn new(root: Option<B>, len: usize) -> Self {
        let mut iter = Self {
            stack: Vec::new(),
            remaining: len,
            _values: PhantomData,
        };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut branch: Option<B>) {
        while let Some(b) = branch {
            self.stack.push(b);
            branch = b.left();
        }
    }
}

impl<'a, T: 'a, B: Branch<'a, T>> Iterator for InOrder<'a, T, B> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let branch = self.stack.pop()?;
        self.push_left_spine(branch.right());
        self.remaining = self.remaining.saturating_sub(1);
        Some(branch.value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}
