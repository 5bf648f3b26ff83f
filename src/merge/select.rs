//! Bound selection across two ranges.

use crate::range::Range;

/// Returns the lesser of `a.first()` and `b.first()`.
///
/// An empty operand defers to the other one; ties are broken toward `b`.
///
/// # Examples
///
/// ```rust
/// use sorted_ranges::merge::select_first;
/// use sorted_ranges::range::{EmptyRange, SliceRange};
///
/// let a = SliceRange::from_sorted_vec(vec![3, 4]);
/// let b = SliceRange::from_sorted_vec(vec![1, 9]);
/// assert_eq!(select_first(&a, &b), Some(1));
/// assert_eq!(select_first(&EmptyRange, &a), Some(3));
/// ```
pub fn select_first<T, A, B>(a: &A, b: &B) -> Option<T>
where
    T: Ord + Clone,
    A: Range<T> + ?Sized,
    B: Range<T> + ?Sized,
{
    match (a.first(), b.first()) {
        (Some(a_first), Some(b_first)) if a_first < b_first => Some(a_first.clone()),
        (Some(a_first), None) => Some(a_first.clone()),
        (_, b_first) => b_first.cloned(),
    }
}

/// Returns the greater of `a.last()` and `b.last()`.
///
/// An empty operand defers to the other one; ties are broken toward `b`.
///
/// # Examples
///
/// ```rust
/// use sorted_ranges::merge::select_last;
/// use sorted_ranges::range::{EmptyRange, SliceRange};
///
/// let a = SliceRange::from_sorted_vec(vec![3, 4]);
/// let b = SliceRange::from_sorted_vec(vec![1, 9]);
/// assert_eq!(select_last(&a, &b), Some(9));
/// assert_eq!(select_last(&a, &EmptyRange), Some(4));
/// ```
pub fn select_last<T, A, B>(a: &A, b: &B) -> Option<T>
where
    T: Ord + Clone,
    A: Range<T> + ?Sized,
    B: Range<T> + ?Sized,
{
    match (a.last(), b.last()) {
        (Some(a_last), Some(b_last)) if b_last < a_last => Some(a_last.clone()),
        (Some(a_last), None) => Some(a_last.clone()),
        (_, b_last) => b_last.cloned(),
    }
}
