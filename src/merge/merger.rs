//! The structural merge of two sorted ranges.

use std::sync::Arc;

use smallvec::smallvec;
use tracing::{debug, trace};

use super::disjoint::{DisjointRanges, Segments};
use super::flatten::flatten;
use super::overlap::{Interleave, OverlapMerge, TiePolicy};
use super::select::{select_first, select_last};
use crate::range::{Element, Order, RangeRef, empty};

/// Message constant for panic when a non-empty range reports no bound.
const MISSING_BOUND_PANIC_MESSAGE: &str = "non-empty range reached merge without a bound";

/// Message constant for panic when the overlapping case loses every part.
const NO_PARTS_PANIC_MESSAGE: &str =
    "merge of two non-empty ranges produced no non-empty parts; partition is defective";

/// Merges two sorted ranges with the default [`Interleave`] primitive.
///
/// The result produces the elements of both ranges in ascending order.
/// Regions where the ranges do not interleave are kept as they are; only
/// the overlapping middle region is merged element by element, and lazily.
///
/// # Examples
///
/// ```rust
/// use sorted_ranges::merge::merge;
/// use sorted_ranges::range::{SliceRange, SortedRange};
///
/// let a = SliceRange::from_sorted_vec(vec![1, 2, 3]).into_shared();
/// let b = SliceRange::from_sorted_vec(vec![10, 11, 12]).into_shared();
///
/// let merged = merge(a, b);
/// assert_eq!(merged.limit(), 6);
/// assert_eq!(merged.to_vec(), vec![1, 2, 3, 10, 11, 12]);
/// ```
pub fn merge<T: Element>(a: RangeRef<T>, b: RangeRef<T>) -> RangeRef<T> {
    merge_with(&Interleave::default(), a, b)
}

/// Merges any number of sorted ranges with the default primitive.
///
/// # Examples
///
/// ```rust
/// use sorted_ranges::merge::merge_all;
/// use sorted_ranges::range::SliceRange;
///
/// let runs = [vec![5, 9], vec![1, 2], vec![3, 7]]
///     .into_iter()
///     .map(|run| SliceRange::from_sorted_vec(run).into_shared());
///
/// assert_eq!(merge_all(runs).to_vec(), vec![1, 2, 3, 5, 7, 9]);
/// ```
pub fn merge_all<T, I>(ranges: I) -> RangeRef<T>
where
    T: Element,
    I: IntoIterator<Item = RangeRef<T>>,
{
    Merger::new(Interleave::default()).merge_all(ranges)
}

/// Merges two sorted ranges, resolving overlap with `primitive`.
///
/// # Panics
///
/// Panics if an input violates the [`SortedRange`](crate::range::SortedRange)
/// contract, for example a non-empty range without bounds. These are
/// defects, not recoverable conditions.
pub fn merge_with<T, M>(primitive: &M, a: RangeRef<T>, b: RangeRef<T>) -> RangeRef<T>
where
    T: Element,
    M: OverlapMerge<T> + ?Sized,
{
    if a.is_empty() {
        trace!(limit = b.limit(), "left operand empty");
        return b;
    }
    if b.is_empty() {
        trace!(limit = a.limit(), "right operand empty");
        return a;
    }

    let a_first = bound(a.first().cloned());
    let a_last = bound(a.last().cloned());
    let b_first = bound(b.first().cloned());
    let b_last = bound(b.last().cloned());

    if a_last < b_first {
        debug!(a_limit = a.limit(), b_limit = b.limit(), "merging disjoint ranges");
        let last = bound(select_last(&*a, &*b));
        return Arc::new(DisjointRanges::new(a_first, last, flatten([a, b])));
    }
    if b_last < a_first {
        debug!(a_limit = a.limit(), b_limit = b.limit(), "merging disjoint ranges, swapped");
        let last = bound(select_last(&*b, &*a));
        return Arc::new(DisjointRanges::new(b_first, last, flatten([b, a])));
    }

    debug!(a_limit = a.limit(), b_limit = b.limit(), "merging overlapping ranges");
    let bound_first = bound(select_first(&*a, &*b));
    let bound_last = bound(select_last(&*a, &*b));

    let (before, a_overlap) = a.partition(&b_first, Order::StrictlyBefore);
    let (b_overlap, after) = b.partition(&a_last, Order::BeforeOrEqual);

    let middle = if a_overlap.is_empty() {
        b_overlap
    } else if b_overlap.is_empty() {
        a_overlap
    } else {
        let first = bound(select_first(&*a_overlap, &*b_overlap));
        let last = bound(select_last(&*a_overlap, &*b_overlap));
        primitive.overlap_merge(first, last, a_overlap, b_overlap)
    };

    let mut parts: Segments<T> = smallvec![before, middle, after];
    parts.retain(|part| !part.is_empty());
    trace!(parts = parts.len(), "assembled merge parts");

    match parts.len() {
        0 => panic!("{}", NO_PARTS_PANIC_MESSAGE),
        1 => parts.swap_remove(0),
        _ => Arc::new(DisjointRanges::new(bound_first, bound_last, flatten(parts))),
    }
}

fn bound<T>(value: Option<T>) -> T {
    value.unwrap_or_else(|| panic!("{}", MISSING_BOUND_PANIC_MESSAGE))
}

/// A reusable merge configuration holding the overlap-merge primitive.
///
/// # Examples
///
/// ```rust
/// use sorted_ranges::merge::{Merger, TiePolicy};
/// use sorted_ranges::range::SliceRange;
///
/// let merger = Merger::with_policy(TiePolicy::Deduplicate);
/// let a = SliceRange::from_sorted_vec(vec![1, 2, 3]).into_shared();
/// let b = SliceRange::from_sorted_vec(vec![3, 4]).into_shared();
///
/// assert_eq!(merger.merge(a, b).to_vec(), vec![1, 2, 3, 4]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Merger<M = Interleave> {
    primitive: M,
}

impl Merger<Interleave> {
    /// Creates a merger using [`Interleave`] with the given tie policy.
    #[inline]
    #[must_use]
    pub const fn with_policy(policy: TiePolicy) -> Self {
        Self::new(Interleave::new(policy))
    }
}

impl<M> Merger<M> {
    /// Creates a merger around an overlap-merge primitive.
    #[inline]
    #[must_use]
    pub const fn new(primitive: M) -> Self {
        Self { primitive }
    }

    /// Returns the overlap-merge primitive.
    #[inline]
    #[must_use]
    pub const fn primitive(&self) -> &M {
        &self.primitive
    }

    /// Merges two ranges. See [`merge_with`].
    pub fn merge<T: Element>(&self, a: RangeRef<T>, b: RangeRef<T>) -> RangeRef<T>
    where
        M: OverlapMerge<T>,
    {
        merge_with(&self.primitive, a, b)
    }

    /// Merges any number of ranges, folding from the empty range.
    pub fn merge_all<T, I>(&self, ranges: I) -> RangeRef<T>
    where
        T: Element,
        M: OverlapMerge<T>,
        I: IntoIterator<Item = RangeRef<T>>,
    {
        ranges
            .into_iter()
            .fold(empty(), |merged, range| self.merge(merged, range))
    }
}
