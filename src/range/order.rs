//! The before-relations used to parameterize partitioning.

/// A before-relation between two elements.
///
/// # Examples
///
/// ```rust
/// use sorted_ranges::range::Order;
///
/// assert!(Order::StrictlyBefore.holds(&1, &2));
/// assert!(!Order::StrictlyBefore.holds(&2, &2));
/// assert!(Order::BeforeOrEqual.holds(&2, &2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Order {
    /// `a < b`.
    StrictlyBefore,
    /// `a <= b`.
    BeforeOrEqual,
}

impl Order {
    /// Returns `true` if `left` is before `right` under this relation.
    #[inline]
    #[must_use]
    pub fn holds<T: Ord + ?Sized>(self, left: &T, right: &T) -> bool {
        match self {
            Self::StrictlyBefore => left < right,
            Self::BeforeOrEqual => left <= right,
        }
    }
}
