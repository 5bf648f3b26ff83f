//! Forward-only cursors over sorted ranges.

use std::iter::FusedIterator;

/// A single-pass, forward-only producer of elements in ascending order.
///
/// Once [`next`](Cursor::next) returns `None` the cursor is exhausted and
/// keeps returning `None`. A cursor is tied to one traversal; open a new one
/// from the range to start over.
pub trait Cursor<T> {
    /// Returns the next element, or `None` once the cursor is exhausted.
    fn next(&mut self) -> Option<T>;

    /// Writes as many elements as fit into `buffer` and returns how many
    /// were written.
    ///
    /// A return value smaller than `buffer.len()` means the cursor is
    /// exhausted. The elements written are exactly those repeated calls to
    /// [`next`](Cursor::next) would have produced.
    fn fill(&mut self, buffer: &mut [T]) -> usize {
        let mut written = 0;
        for slot in buffer.iter_mut() {
            match self.next() {
                Some(element) => *slot = element,
                None => break,
            }
            written += 1;
        }
        written
    }
}

/// A boxed cursor borrowing from the range it was opened on.
pub type BoxCursor<'a, T> = Box<dyn Cursor<T> + 'a>;

impl<T, C: Cursor<T> + ?Sized> Cursor<T> for Box<C> {
    #[inline]
    fn next(&mut self) -> Option<T> {
        (**self).next()
    }

    #[inline]
    fn fill(&mut self, buffer: &mut [T]) -> usize {
        (**self).fill(buffer)
    }
}

/// Adapts a [`Cursor`] into a standard [`Iterator`].
pub struct Iter<'a, T> {
    cursor: BoxCursor<'a, T>,
}

impl<'a, T> Iter<'a, T> {
    /// Wraps an open cursor.
    #[inline]
    #[must_use]
    pub fn new(cursor: BoxCursor<'a, T>) -> Self {
        Self { cursor }
    }
}

impl<T> Iterator for Iter<'_, T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next()
    }
}

impl<T> FusedIterator for Iter<'_, T> {}
