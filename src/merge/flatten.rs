//! Normalisation of nested composites into one flat segment list.

use super::disjoint::Segments;
use crate::range::{Element, RangeRef};

/// Replaces every disjoint composite in `parts` by its own segments.
///
/// Order is preserved and the replacement is applied recursively, so the
/// result never contains a composite. Parts that are not composites are
/// kept as they are.
///
/// # Examples
///
/// ```rust
/// use sorted_ranges::merge::{flatten, merge};
/// use sorted_ranges::range::SliceRange;
///
/// let a = SliceRange::from_sorted_vec(vec![1, 2]).into_shared();
/// let b = SliceRange::from_sorted_vec(vec![5, 6]).into_shared();
/// let c = SliceRange::from_sorted_vec(vec![9]).into_shared();
///
/// let segments = flatten([merge(a, b), c]);
/// assert_eq!(segments.len(), 3);
/// ```
pub fn flatten<T, I>(parts: I) -> Segments<T>
where
    T: Element,
    I: IntoIterator<Item = RangeRef<T>>,
{
    let mut flat = Segments::new();
    for part in parts {
        flatten_into(part, &mut flat);
    }
    flat
}

fn flatten_into<T: Element>(part: RangeRef<T>, flat: &mut Segments<T>) {
    match part.segments() {
        Some(segments) => {
            for segment in segments {
                flatten_into(segment.clone(), flat);
            }
        }
        None => flat.push(part),
    }
}
