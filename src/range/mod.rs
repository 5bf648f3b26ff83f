//! The sorted range contract and its primitive implementations.
//!
//! A sorted range is an immutable, bounded collection of elements that can
//! report its bounds, split itself at a pivot and open a lazy [`Cursor`]
//! over its elements in ascending order:
//!
//! - [`Range`]: the bounds of a range
//! - [`SortedRange`]: bounds plus cardinality, partitioning and traversal
//! - [`EmptyRange`]: the shared empty sentinel
//! - [`SliceRange`]: a window over shared, sorted storage
//!
//! Ranges are passed around as [`RangeRef`] handles (`Arc<dyn SortedRange<T>>`).
//! Every operation returns new handles; a published range is never mutated,
//! so any number of cursors may be opened over the same range, including
//! from different threads.
//!
//! # Examples
//!
//! ```rust
//! use sorted_ranges::range::{Order, SliceRange, SortedRange};
//!
//! let range = SliceRange::from_sorted_vec(vec![1, 3, 5]).into_shared();
//!
//! let (left, right) = range.clone().partition(&3, Order::StrictlyBefore);
//! assert_eq!(left.to_vec(), vec![1]);
//! assert_eq!(right.to_vec(), vec![3, 5]);
//!
//! let (left, right) = range.partition(&3, Order::BeforeOrEqual);
//! assert_eq!(left.to_vec(), vec![1, 3]);
//! assert_eq!(right.to_vec(), vec![5]);
//! ```

mod cursor;
mod empty;
mod error;
mod order;
mod slice;

pub use cursor::BoxCursor;
pub use cursor::Cursor;
pub use cursor::Iter;
pub use empty::EmptyRange;
pub use empty::empty;
pub use error::UnsortedInputError;
pub use order::Order;
pub use slice::SliceCursor;
pub use slice::SliceRange;

use std::fmt;
use std::sync::Arc;

/// An opaque, totally ordered value that ranges are made of.
///
/// Implemented for every type with the required capabilities; two elements
/// are equal under the order iff neither is less than the other.
pub trait Element: Ord + Clone + fmt::Debug + Send + Sync + 'static {}

impl<T: Ord + Clone + fmt::Debug + Send + Sync + 'static> Element for T {}

/// The bounds of a range.
pub trait Range<T> {
    /// Returns the least element, or `None` if the range is empty.
    fn first(&self) -> Option<&T>;

    /// Returns the greatest element, or `None` if the range is empty.
    fn last(&self) -> Option<&T>;
}

/// A shared handle to any sorted range.
pub type RangeRef<T> = Arc<dyn SortedRange<T>>;

/// A bounded range that produces its elements in ascending order.
///
/// # Contract
///
/// - `limit()` is an upper bound on the number of elements the range
///   produces; `0` means the range is empty.
/// - `partition(pivot, order)` returns `(left, right)` where `left` holds
///   exactly the elements `e` for which `order.holds(e, pivot)` and `right`
///   holds the rest, both in their original relative order.
/// - `open()` returns a fresh cursor over all elements in ascending order.
///
/// Implementations must be immutable once shared.
pub trait SortedRange<T>: Range<T> + fmt::Debug + Send + Sync {
    /// Returns an upper bound on the number of elements.
    fn limit(&self) -> usize;

    /// Splits the range at `pivot` under `order`.
    ///
    /// Takes the handle by value so that implementations can return the
    /// range itself when it falls entirely on one side.
    fn partition(self: Arc<Self>, pivot: &T, order: Order) -> (RangeRef<T>, RangeRef<T>);

    /// Opens a cursor over the elements in ascending order.
    fn open(&self) -> BoxCursor<'_, T>;

    /// Returns the segments of a disjoint composite, or `None` for any
    /// other range.
    fn segments(&self) -> Option<&[RangeRef<T>]> {
        None
    }
}

impl<T: Element> dyn SortedRange<T> {
    /// Returns `true` if the range can produce no elements.
    pub fn is_empty(&self) -> bool {
        self.limit() == 0
    }

    /// Returns a standard iterator over a freshly opened cursor.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.open())
    }

    /// Collects every element of the range into a `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        let mut elements = Vec::with_capacity(self.limit());
        elements.extend(self.iter());
        elements
    }
}

static_assertions::assert_impl_all!(RangeRef<i32>: Send, Sync, Clone);
static_assertions::assert_impl_all!(SliceRange<String>: Send, Sync, Clone);
