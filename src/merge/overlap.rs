//! Element-wise merging of ranges known to interleave.
//!
//! The structural merge only hands the genuinely overlapping middle region of
//! two ranges to an [`OverlapMerge`] primitive. How tied elements are
//! combined is decided here, never by the structural merge.
//!
//! [`Interleave`] is the primitive used by default. It builds a lazy
//! [`MergeableRange`] whose cursor performs a two-way merge with one peeked
//! head per operand.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

use super::merge_with;
use crate::range::{BoxCursor, Cursor, Element, Order, Range, RangeRef, SortedRange, empty};

/// Combines two ranges that are known to interleave.
///
/// The returned range must have the bounds `(first, last)` and produce the
/// combined elements of `x` and `y` in ascending order.
pub trait OverlapMerge<T: Element>: fmt::Debug + Send + Sync {
    /// Merges `x` and `y` into a range bounded by `first` and `last`.
    fn overlap_merge(&self, first: T, last: T, x: RangeRef<T>, y: RangeRef<T>) -> RangeRef<T>;
}

/// How [`Interleave`] resolves elements of both operands that compare equal.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TiePolicy {
    /// Emit both elements, the left operand's first.
    #[default]
    Retain,
    /// Emit the right operand's element and drop the left one.
    Deduplicate,
}

/// The default overlap-merge primitive.
///
/// # Examples
///
/// ```rust
/// use sorted_ranges::merge::{Interleave, TiePolicy, merge_with};
/// use sorted_ranges::range::SliceRange;
///
/// let a = SliceRange::from_sorted_vec(vec![1, 2, 3]).into_shared();
/// let b = SliceRange::from_sorted_vec(vec![2, 3, 4]).into_shared();
///
/// let retained = merge_with(&Interleave::default(), a.clone(), b.clone());
/// assert_eq!(retained.to_vec(), vec![1, 2, 2, 3, 3, 4]);
///
/// let deduplicated = merge_with(&Interleave::new(TiePolicy::Deduplicate), a, b);
/// assert_eq!(deduplicated.to_vec(), vec![1, 2, 3, 4]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Interleave {
    policy: TiePolicy,
}

impl Interleave {
    /// Creates the primitive with the given tie policy.
    #[inline]
    #[must_use]
    pub const fn new(policy: TiePolicy) -> Self {
        Self { policy }
    }

    /// Returns the tie policy.
    #[inline]
    #[must_use]
    pub const fn policy(self) -> TiePolicy {
        self.policy
    }
}

impl<T: Element> OverlapMerge<T> for Interleave {
    fn overlap_merge(&self, first: T, last: T, x: RangeRef<T>, y: RangeRef<T>) -> RangeRef<T> {
        Arc::new(MergeableRange {
            first,
            last,
            x,
            y,
            primitive: *self,
        })
    }
}

/// A lazy two-way merge of two interleaving ranges.
///
/// `limit()` is the sum of both operands' limits; under
/// [`TiePolicy::Deduplicate`] it is an upper bound.
pub struct MergeableRange<T> {
    first: T,
    last: T,
    x: RangeRef<T>,
    y: RangeRef<T>,
    primitive: Interleave,
}

impl<T> Range<T> for MergeableRange<T> {
    #[inline]
    fn first(&self) -> Option<&T> {
        Some(&self.first)
    }

    #[inline]
    fn last(&self) -> Option<&T> {
        Some(&self.last)
    }
}

impl<T: Element> SortedRange<T> for MergeableRange<T> {
    fn limit(&self) -> usize {
        self.x.limit() + self.y.limit()
    }

    fn partition(self: Arc<Self>, pivot: &T, order: Order) -> (RangeRef<T>, RangeRef<T>) {
        if !order.holds(&self.first, pivot) {
            return (empty(), self);
        }
        if order.holds(&self.last, pivot) {
            return (self, empty());
        }

        let (x_left, x_right) = Arc::clone(&self.x).partition(pivot, order);
        let (y_left, y_right) = Arc::clone(&self.y).partition(pivot, order);
        (
            merge_with(&self.primitive, x_left, y_left),
            merge_with(&self.primitive, x_right, y_right),
        )
    }

    fn open(&self) -> BoxCursor<'_, T> {
        let mut x = self.x.open();
        let mut y = self.y.open();
        Box::new(MergeCursor {
            x_head: x.next(),
            y_head: y.next(),
            x,
            y,
            policy: self.primitive.policy(),
        })
    }
}

impl<T: fmt::Debug> fmt::Debug for MergeableRange<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("MergeableRange")
            .field("first", &self.first)
            .field("last", &self.last)
            .field("x", &self.x)
            .field("y", &self.y)
            .field("policy", &self.primitive.policy())
            .finish()
    }
}

struct MergeCursor<'a, T> {
    x: BoxCursor<'a, T>,
    y: BoxCursor<'a, T>,
    x_head: Option<T>,
    y_head: Option<T>,
    policy: TiePolicy,
}

impl<T: Ord> Cursor<T> for MergeCursor<'_, T> {
    fn next(&mut self) -> Option<T> {
        match (self.x_head.take(), self.y_head.take()) {
            (None, None) => None,
            (Some(x), None) => {
                self.x_head = self.x.next();
                Some(x)
            }
            (None, Some(y)) => {
                self.y_head = self.y.next();
                Some(y)
            }
            (Some(x), Some(y)) => match (x.cmp(&y), self.policy) {
                (Ordering::Less, _) | (Ordering::Equal, TiePolicy::Retain) => {
                    self.y_head = Some(y);
                    self.x_head = self.x.next();
                    Some(x)
                }
                (Ordering::Greater, _) => {
                    self.x_head = Some(x);
                    self.y_head = self.y.next();
                    Some(y)
                }
                (Ordering::Equal, TiePolicy::Deduplicate) => {
                    self.x_head = self.x.next();
                    self.y_head = self.y.next();
                    Some(y)
                }
            },
        }
    }

    fn fill(&mut self, buffer: &mut [T]) -> usize {
        let mut written = 0;
        while written < buffer.len() {
            let rest = &mut buffer[written..];
            if self.y_head.is_none() {
                return written + drain(&mut self.x_head, &mut self.x, rest);
            }
            if self.x_head.is_none() {
                return written + drain(&mut self.y_head, &mut self.y, rest);
            }
            match self.next() {
                Some(element) => {
                    rest[0] = element;
                    written += 1;
                }
                None => break,
            }
        }
        written
    }
}

/// Copies the remainder of a single operand into a non-empty buffer.
fn drain<T>(head: &mut Option<T>, cursor: &mut BoxCursor<'_, T>, buffer: &mut [T]) -> usize {
    let Some(element) = head.take() else {
        return 0;
    };
    buffer[0] = element;
    let written = 1 + cursor.fill(&mut buffer[1..]);
    if written == buffer.len() {
        *head = cursor.next();
    }
    written
}
