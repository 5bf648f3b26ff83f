//! The empty range sentinel.

use std::sync::Arc;

use super::{BoxCursor, Cursor, Element, Order, Range, RangeRef, SortedRange};

/// The range with no elements.
///
/// `EmptyRange` is zero-sized and implements [`SortedRange`] for every
/// element type: its bounds are `None`, its limit is `0`, partitioning it
/// yields two empty ranges and its cursor is exhausted from the start.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyRange;

/// Returns a handle to the empty range.
///
/// # Examples
///
/// ```rust
/// use sorted_ranges::range::{Range, RangeRef, SortedRange, empty};
///
/// let range: RangeRef<i32> = empty();
/// assert_eq!(range.limit(), 0);
/// assert_eq!(range.first(), None);
/// ```
#[inline]
#[must_use]
pub fn empty<T: Element>() -> RangeRef<T> {
    Arc::new(EmptyRange)
}

impl<T> Range<T> for EmptyRange {
    #[inline]
    fn first(&self) -> Option<&T> {
        None
    }

    #[inline]
    fn last(&self) -> Option<&T> {
        None
    }
}

impl<T: Element> SortedRange<T> for EmptyRange {
    #[inline]
    fn limit(&self) -> usize {
        0
    }

    fn partition(self: Arc<Self>, _pivot: &T, _order: Order) -> (RangeRef<T>, RangeRef<T>) {
        (self.clone(), self)
    }

    fn open(&self) -> BoxCursor<'_, T> {
        Box::new(EmptyCursor)
    }
}

struct EmptyCursor;

impl<T> Cursor<T> for EmptyCursor {
    #[inline]
    fn next(&mut self) -> Option<T> {
        None
    }

    #[inline]
    fn fill(&mut self, _buffer: &mut [T]) -> usize {
        0
    }
}
