//! Structural merging of sorted ranges.
//!
//! This module combines two sorted ranges into one without materializing
//! the merged sequence:
//!
//! - [`merge`]: the entry point, using the default [`Interleave`] primitive
//! - [`merge_with`]: the same algorithm with a caller-supplied [`OverlapMerge`]
//! - [`merge_all`] and [`Merger`]: folding many sources, with configuration
//! - [`DisjointRanges`]: the composite of non-overlapping segments
//! - [`flatten`], [`select_first`], [`select_last`]: helpers of the algorithm
//!
//! # Algorithm
//!
//! ```text
//!   a:  [ before ][ a_overlap ]
//!   b:            [ b_overlap ][ after ]
//!
//!   result: DisjointRanges[ before, merge(a_overlap, b_overlap), after ]
//! ```
//!
//! `a` is partitioned at `b.first()` with [`Order::StrictlyBefore`] and `b`
//! at `a.last()` with [`Order::BeforeOrEqual`]. The outer parts do not
//! interleave with anything and stay as they are; only the middle region
//! goes through the overlap-merge primitive. Inputs that do not overlap at
//! all become a two-segment composite directly.
//!
//! [`Order::StrictlyBefore`]: crate::range::Order::StrictlyBefore
//! [`Order::BeforeOrEqual`]: crate::range::Order::BeforeOrEqual
//!
//! # Examples
//!
//! ```rust
//! use sorted_ranges::merge::merge;
//! use sorted_ranges::range::{SliceRange, SortedRange};
//!
//! let a = SliceRange::from_sorted_vec(vec![1, 3, 5]).into_shared();
//! let b = SliceRange::from_sorted_vec(vec![2, 4, 6]).into_shared();
//! let c = SliceRange::from_sorted_vec(vec![10, 11]).into_shared();
//!
//! let merged = merge(merge(a, b), c);
//! assert_eq!(merged.to_vec(), vec![1, 2, 3, 4, 5, 6, 10, 11]);
//!
//! // Nested composites are flattened.
//! let segments = merged.segments().unwrap_or_default();
//! assert!(segments.iter().all(|segment| segment.segments().is_none()));
//! ```

mod disjoint;
mod flatten;
mod merger;
mod overlap;
mod select;

pub use disjoint::DisjointCursor;
pub use disjoint::DisjointRanges;
pub use disjoint::SEGMENT_INLINE_CAPACITY;
pub use disjoint::Segments;
pub use flatten::flatten;
pub use merger::Merger;
pub use merger::merge;
pub use merger::merge_all;
pub use merger::merge_with;
pub use overlap::Interleave;
pub use overlap::MergeableRange;
pub use overlap::OverlapMerge;
pub use overlap::TiePolicy;
pub use select::select_first;
pub use select::select_last;
