//! A sorted range over shared, contiguous storage.
//!
//! [`SliceRange`] is a window `[start, end)` into an `Arc<[T]>` of sorted
//! elements. Partitioning is a binary search and produces two windows over
//! the same storage, so splitting a range never copies its elements.
//!
//! # Time Complexity
//!
//! | Operation   | Complexity |
//! |-------------|------------|
//! | `first`     | O(1)       |
//! | `last`      | O(1)       |
//! | `limit`     | O(1)       |
//! | `partition` | O(log n)   |
//! | `open`      | O(1)       |

use std::fmt;
use std::sync::Arc;

use super::{
    BoxCursor, Cursor, Element, Order, Range, RangeRef, SortedRange, UnsortedInputError, empty,
};

/// Message constant for panic when `from_sorted_vec` receives invalid input.
const SORTED_INVARIANT_PANIC_MESSAGE: &str =
    "from_sorted_vec requires elements in non-decreasing order";

/// A window over shared, sorted storage.
///
/// # Examples
///
/// ```rust
/// use sorted_ranges::range::{Range, SliceRange};
///
/// let range = SliceRange::from_sorted_vec(vec![2, 4, 6]);
/// assert_eq!(range.first(), Some(&2));
/// assert_eq!(range.last(), Some(&6));
/// assert_eq!(range.len(), 3);
/// ```
pub struct SliceRange<T> {
    elements: Arc<[T]>,
    start: usize,
    end: usize,
}

impl<T> SliceRange<T> {
    /// Creates a range from a `Vec` already sorted in non-decreasing order.
    ///
    /// # Preconditions
    ///
    /// The vector must be sorted. In debug builds this is validated with
    /// `debug_assert!`; in release builds unsorted input yields a range that
    /// partitions incorrectly (a logic error, not memory unsafety).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_ranges::range::SliceRange;
    ///
    /// let range = SliceRange::from_sorted_vec(vec![1, 1, 2]);
    /// assert_eq!(range.as_slice(), &[1, 1, 2]);
    /// ```
    #[must_use]
    pub fn from_sorted_vec(vec: Vec<T>) -> Self
    where
        T: Ord,
    {
        debug_assert!(
            first_unsorted_index(&vec).is_none(),
            "{}",
            SORTED_INVARIANT_PANIC_MESSAGE
        );
        Self::from_vec_unchecked(vec)
    }

    /// Creates a range from a `Vec`, rejecting input that is not sorted.
    ///
    /// # Errors
    ///
    /// Returns [`UnsortedInputError`] naming the first element that is less
    /// than its predecessor.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_ranges::range::SliceRange;
    ///
    /// assert!(SliceRange::try_from_vec(vec![1, 2, 3]).is_ok());
    /// assert!(SliceRange::try_from_vec(vec![3, 2, 1]).is_err());
    /// ```
    pub fn try_from_vec(vec: Vec<T>) -> Result<Self, UnsortedInputError>
    where
        T: Ord,
    {
        match first_unsorted_index(&vec) {
            Some(index) => Err(UnsortedInputError { index }),
            None => Ok(Self::from_vec_unchecked(vec)),
        }
    }

    fn from_vec_unchecked(vec: Vec<T>) -> Self {
        let end = vec.len();
        Self {
            elements: Arc::from(vec),
            start: 0,
            end,
        }
    }

    fn window(&self, start: usize, end: usize) -> Self {
        Self {
            elements: Arc::clone(&self.elements),
            start,
            end,
        }
    }

    /// Returns the number of elements in the window.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` if the window holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the elements of the window.
    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.elements[self.start..self.end]
    }

    /// Converts the range into a shared [`RangeRef`] handle.
    #[must_use]
    pub fn into_shared(self) -> RangeRef<T>
    where
        T: Element,
    {
        Arc::new(self)
    }
}

fn first_unsorted_index<T: Ord>(slice: &[T]) -> Option<usize> {
    slice
        .windows(2)
        .position(|window| window[1] < window[0])
        .map(|position| position + 1)
}

impl<T> Clone for SliceRange<T> {
    fn clone(&self) -> Self {
        self.window(self.start, self.end)
    }
}

impl<T: Ord> FromIterator<T> for SliceRange<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut elements: Vec<T> = iter.into_iter().collect();
        elements.sort();
        Self::from_vec_unchecked(elements)
    }
}

impl<T: PartialEq> PartialEq for SliceRange<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for SliceRange<T> {}

impl<T: fmt::Debug> fmt::Debug for SliceRange<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("SliceRange")?;
        formatter.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T> Range<T> for SliceRange<T> {
    #[inline]
    fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    #[inline]
    fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }
}

impl<T: Element> SortedRange<T> for SliceRange<T> {
    #[inline]
    fn limit(&self) -> usize {
        self.len()
    }

    fn partition(self: Arc<Self>, pivot: &T, order: Order) -> (RangeRef<T>, RangeRef<T>) {
        let split = self
            .as_slice()
            .partition_point(|element| order.holds(element, pivot));

        if split == 0 {
            (empty(), self)
        } else if split == self.len() {
            (self, empty())
        } else {
            let middle = self.start + split;
            let left = self.window(self.start, middle);
            let right = self.window(middle, self.end);
            (Arc::new(left), Arc::new(right))
        }
    }

    fn open(&self) -> BoxCursor<'_, T> {
        Box::new(SliceCursor {
            remaining: self.as_slice(),
        })
    }
}

/// Cursor over a [`SliceRange`].
pub struct SliceCursor<'a, T> {
    remaining: &'a [T],
}

impl<T: Clone> Cursor<T> for SliceCursor<'_, T> {
    #[inline]
    fn next(&mut self) -> Option<T> {
        let (element, rest) = self.remaining.split_first()?;
        self.remaining = rest;
        Some(element.clone())
    }

    fn fill(&mut self, buffer: &mut [T]) -> usize {
        let count = buffer.len().min(self.remaining.len());
        let (chunk, rest) = self.remaining.split_at(count);
        buffer[..count].clone_from_slice(chunk);
        self.remaining = rest;
        count
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for SliceRange<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in self.as_slice() {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SliceRangeVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for SliceRangeVisitor<T>
where
    T: serde::Deserialize<'de> + Ord,
{
    type Value = SliceRange<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sorted sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        const MAX_PREALLOCATE: usize = 4096;
        let capacity = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATE);
        let mut elements = Vec::with_capacity(capacity);
        while let Some(element) = seq.next_element()? {
            elements.push(element);
        }
        SliceRange::try_from_vec(elements).map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for SliceRange<T>
where
    T: serde::Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SliceRangeVisitor {
            marker: std::marker::PhantomData,
        })
    }
}

// =============================================================================
// Tests
// =============================================================================


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_serialize_window() {
        let range = SliceRange::from_sorted_vec(vec![1, 2, 3]).window(1, 3);
        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, "[2,3]");
    }

    #[rstest]
    fn test_deserialize_sorted_sequence() {
        let range: SliceRange<i32> = serde_json::from_str("[1,2,3]").unwrap();
        assert_eq!(range.as_slice(), &[1, 2, 3]);
    }

    #[rstest]
    fn test_deserialize_rejects_unsorted_sequence() {
        let result: Result<SliceRange<i32>, _> = serde_json::from_str("[3,1]");
        let message = result.unwrap_err().to_string();
        assert!(message.contains("index 1"));
    }
}
