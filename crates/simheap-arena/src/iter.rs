//! Lazy, read-only traversal of an allocation's elements.
//!
//! [`ValueIter`] is the borrowed view handed to display code: a cursor
//! advancing over an index-bounded slice, yielding elements by value in
//! index order. Indexed loops and cursor-style advancing are the same
//! traversal; this type is the one presentation of it. Traversal is
//! restartable by asking the arena for a fresh iterator.

/// Cursor over the elements of one allocation.
///
/// Created by [`crate::ManualArena::iter`]. Borrows the arena for its
/// lifetime, so the allocation cannot be released mid-traversal.
#[must_use]
pub struct ValueIter<'a, T> {
    /// The allocation's elements, bounds fixed at creation.
    values: &'a [T],
    /// Next element to yield.
    cursor: usize,
}

impl<'a, T> ValueIter<'a, T> {
    /// Create an iterator over an allocation's elements.
    pub(crate) fn new(values: &'a [T]) -> Self {
        Self { values, cursor: 0 }
    }
}

impl<T: Copy> Iterator for ValueIter<'_, T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let value = self.values.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.values.len() - self.cursor;
        (remaining, Some(remaining))
    }
}

impl<T: Copy> ExactSizeIterator for ValueIter<'_, T> {}
