//! Error types for range construction.

/// Represents an attempt to build a sorted range from out-of-order input.
///
/// # Examples
///
/// ```rust
/// use sorted_ranges::range::{SliceRange, UnsortedInputError};
///
/// let error = SliceRange::try_from_vec(vec![1, 3, 2]).unwrap_err();
/// assert_eq!(error, UnsortedInputError { index: 2 });
/// assert_eq!(
///     format!("{}", error),
///     "element at index 2 is less than its predecessor; input must be sorted in non-decreasing order"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsortedInputError {
    /// The index of the first element that is less than its predecessor.
    pub index: usize,
}

impl std::fmt::Display for UnsortedInputError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            formatter,
            "element at index {} is less than its predecessor; input must be sorted in non-decreasing order",
            self.index
        )
    }
}

impl std::error::Error for UnsortedInputError {}
