//! A sorted range made of non-overlapping segments.
//!
//! Iteration across disjoint segments needs no comparisons: the cursor drains
//! one segment after the other. This is what makes the structural merge
//! cheap compared to an element-by-element merge.

use std::fmt;
use std::iter;
use std::sync::Arc;

use smallvec::SmallVec;
use tracing::trace;

use super::flatten::flatten;
use crate::range::{BoxCursor, Cursor, Element, Order, Range, RangeRef, SortedRange, empty};

/// Number of segments a composite stores inline before spilling to the heap.
pub const SEGMENT_INLINE_CAPACITY: usize = 4;

/// The segment list of a [`DisjointRanges`].
pub type Segments<T> = SmallVec<[RangeRef<T>; SEGMENT_INLINE_CAPACITY]>;

/// Message constant for panic when a segment without bounds reaches partition.
pub(crate) const MISSING_SEGMENT_BOUND_PANIC_MESSAGE: &str =
    "non-empty segment of a disjoint composite has no bound";

/// A sorted range over an ordered list of mutually disjoint segments.
///
/// # Invariants
///
/// - Every element of a segment is strictly before every element of the
///   following segment.
/// - `first()` is the first segment's first element and `last()` is the
///   last segment's last element.
/// - No segment is itself a `DisjointRanges`.
///
/// `limit()` is the sum of the segment limits, so it is exact only when every
/// segment's limit is exact. A segment merged under
/// [`TiePolicy::Deduplicate`](super::TiePolicy::Deduplicate) makes it an upper bound.
///
/// Composites are only built by [`merge`](super::merge) and by partitioning;
/// they are never modified once built.
pub struct DisjointRanges<T> {
    first: T,
    last: T,
    limit: usize,
    segments: Segments<T>,
}

impl<T: Element> DisjointRanges<T> {
    /// Creates a composite with explicit bounds over already flat segments.
    pub(crate) fn new(first: T, last: T, segments: Segments<T>) -> Self {
        debug_assert!(segments.len() >= 2, "a composite needs at least two segments");
        debug_assert!(
            segments.iter().all(|segment| segment.segments().is_none()),
            "composite segments must be flat"
        );
        debug_assert!(
            segments
                .windows(2)
                .all(|pair| segment_last(&pair[0]) < segment_first(&pair[1])),
            "composite segments must be disjoint and ascending"
        );

        let limit = segments.iter().map(|segment| segment.limit()).sum();
        Self {
            first,
            last,
            limit,
            segments,
        }
    }

    /// Creates a composite whose bounds are taken from its segments.
    fn from_segments(segments: Segments<T>) -> Self {
        let first = segments
            .first()
            .map(segment_first)
            .cloned()
            .unwrap_or_else(|| panic!("{}", MISSING_SEGMENT_BOUND_PANIC_MESSAGE));
        let last = segments
            .last()
            .map(segment_last)
            .cloned()
            .unwrap_or_else(|| panic!("{}", MISSING_SEGMENT_BOUND_PANIC_MESSAGE));
        Self::new(first, last, segments)
    }
}

/// Builds the smallest range equivalent to a run of ascending, disjoint parts.
///
/// Empty parts are dropped and nested composites are flattened. No parts
/// yield the empty range and a single part is returned bare.
pub(crate) fn assemble<T, I>(parts: I) -> RangeRef<T>
where
    T: Element,
    I: IntoIterator<Item = RangeRef<T>>,
{
    let mut segments = flatten(parts.into_iter().filter(|part| !part.is_empty()));
    match segments.len() {
        0 => empty(),
        1 => segments.swap_remove(0),
        _ => Arc::new(DisjointRanges::from_segments(segments)),
    }
}

fn segment_first<T: Element>(segment: &RangeRef<T>) -> &T {
    segment
        .first()
        .unwrap_or_else(|| panic!("{}", MISSING_SEGMENT_BOUND_PANIC_MESSAGE))
}

fn segment_last<T: Element>(segment: &RangeRef<T>) -> &T {
    segment
        .last()
        .unwrap_or_else(|| panic!("{}", MISSING_SEGMENT_BOUND_PANIC_MESSAGE))
}

impl<T> Range<T> for DisjointRanges<T> {
    #[inline]
    fn first(&self) -> Option<&T> {
        Some(&self.first)
    }

    #[inline]
    fn last(&self) -> Option<&T> {
        Some(&self.last)
    }
}

impl<T: Element> SortedRange<T> for DisjointRanges<T> {
    #[inline]
    fn limit(&self) -> usize {
        self.limit
    }

    fn partition(self: Arc<Self>, pivot: &T, order: Order) -> (RangeRef<T>, RangeRef<T>) {
        if !order.holds(&self.first, pivot) {
            return (empty(), self);
        }

        for (index, segment) in self.segments.iter().enumerate() {
            if order.holds(segment_last(segment), pivot) {
                continue;
            }

            if !order.holds(segment_first(segment), pivot) {
                trace!(index, segments = self.segments.len(), "split at segment boundary");
                let left = assemble(self.segments[..index].iter().cloned());
                let right = assemble(self.segments[index..].iter().cloned());
                return (left, right);
            }

            trace!(index, segments = self.segments.len(), "split inside segment");
            let (inner_left, inner_right) = Arc::clone(segment).partition(pivot, order);
            let left = assemble(
                self.segments[..index]
                    .iter()
                    .cloned()
                    .chain(iter::once(inner_left)),
            );
            let right = assemble(
                iter::once(inner_right).chain(self.segments[index + 1..].iter().cloned()),
            );
            return (left, right);
        }

        (self, empty())
    }

    fn open(&self) -> BoxCursor<'_, T> {
        Box::new(DisjointCursor::new(&self.segments))
    }

    fn segments(&self) -> Option<&[RangeRef<T>]> {
        Some(self.segments.as_slice())
    }
}

impl<T: fmt::Debug> fmt::Debug for DisjointRanges<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("DisjointRanges")
            .field("first", &self.first)
            .field("last", &self.last)
            .field("segments", &self.segments)
            .finish()
    }
}

/// Cursor over a [`DisjointRanges`], walking its segments in order.
pub struct DisjointCursor<'a, T> {
    segments: &'a [RangeRef<T>],
    next: usize,
    cursor: Option<BoxCursor<'a, T>>,
}

impl<'a, T: Element> DisjointCursor<'a, T> {
    fn new(segments: &'a [RangeRef<T>]) -> Self {
        Self {
            segments,
            next: 0,
            cursor: segments.first().map(|segment| segment.open()),
        }
    }

    fn advance(&mut self) {
        self.next += 1;
        self.cursor = self.segments.get(self.next).map(|segment| segment.open());
    }
}

impl<T: Element> Cursor<T> for DisjointCursor<'_, T> {
    fn next(&mut self) -> Option<T> {
        while let Some(cursor) = self.cursor.as_mut() {
            if let Some(element) = cursor.next() {
                return Some(element);
            }
            self.advance();
        }
        None
    }

    fn fill(&mut self, buffer: &mut [T]) -> usize {
        let mut written = 0;
        while written < buffer.len() {
            let Some(cursor) = self.cursor.as_mut() else {
                break;
            };
            written += cursor.fill(&mut buffer[written..]);
            if written < buffer.len() {
                self.advance();
            }
        }
        written
    }
}
