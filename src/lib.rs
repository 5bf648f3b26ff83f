//! # sorted-ranges
//!
//! An algebra of sorted, bounded ranges of ordered elements.
//!
//! ## Overview
//!
//! Systems that combine several sorted sources (sorted runs, time-ordered
//! segments, index shards) into one ordered view usually pay for an
//! element-by-element merge up front. This crate merges *structurally*
//! instead: two ranges are split at their overlap boundaries, the disjoint
//! outer parts are kept as they are, and only the genuinely interleaving
//! middle part is handed to an element-wise merge primitive. The result is a
//! range that is consumed lazily through a [`Cursor`](range::Cursor).
//!
//! - **Ranges**: the [`SortedRange`](range::SortedRange) contract, the
//!   [`EmptyRange`](range::EmptyRange) sentinel and the
//!   [`SliceRange`](range::SliceRange) primitive backed by shared storage
//! - **Merging**: [`merge`](merge::merge), the
//!   [`DisjointRanges`](merge::DisjointRanges) composite and the default
//!   [`Interleave`](merge::Interleave) overlap primitive
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize`/`Deserialize` for [`SliceRange`](range::SliceRange)
//!
//! ## Example
//!
//! ```rust
//! use sorted_ranges::prelude::*;
//!
//! let a = SliceRange::from_sorted_vec(vec![1, 3, 5]).into_shared();
//! let b = SliceRange::from_sorted_vec(vec![2, 4, 6]).into_shared();
//!
//! let merged = merge(a, b);
//! assert_eq!(merged.to_vec(), vec![1, 2, 3, 4, 5, 6]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// ```rust
/// use sorted_ranges::prelude::*;
/// ```
pub mod prelude {
    pub use crate::merge::*;
    pub use crate::range::*;
}

pub mod merge;
pub mod range;
