//! Property-based tests for structural merging.
//!
//! This module verifies that merged and partitioned ranges satisfy the
//! algebraic laws of sorted ranges using proptest.

use proptest::prelude::*;
use sorted_ranges::merge::{merge, merge_all};
use sorted_ranges::range::{Cursor, Order, RangeRef, SliceRange, empty};

// =============================================================================
// Strategy for generating test data
// =============================================================================

fn arbitrary_run() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(-40i32..40, 0..12).prop_map(|mut run| {
        run.sort_unstable();
        run
    })
}

fn arbitrary_runs() -> impl Strategy<Value = Vec<Vec<i32>>> {
    prop::collection::vec(arbitrary_run(), 1..5)
}

fn arbitrary_order() -> impl Strategy<Value = Order> {
    prop_oneof![Just(Order::StrictlyBefore), Just(Order::BeforeOrEqual)]
}

fn build(runs: &[Vec<i32>]) -> RangeRef<i32> {
    merge_all(
        runs.iter()
            .map(|run| SliceRange::from_sorted_vec(run.clone()).into_shared()),
    )
}

fn sorted_union(runs: &[Vec<i32>]) -> Vec<i32> {
    let mut elements: Vec<i32> = runs.iter().flatten().copied().collect();
    elements.sort_unstable();
    elements
}

fn drain_with_fill(range: &RangeRef<i32>, size: usize) -> Vec<i32> {
    let mut cursor = range.open();
    let mut buffer = vec![0; size];
    let mut elements = Vec::new();
    loop {
        let written = cursor.fill(&mut buffer);
        elements.extend_from_slice(&buffer[..written]);
        if written < size {
            return elements;
        }
    }
}

/// Checks disjointness, flatness and bounds of every composite reachable
/// through `range`.
fn check_structure(range: &RangeRef<i32>) -> Result<(), TestCaseError> {
    let elements = range.to_vec();
    prop_assert_eq!(range.first(), elements.first());
    prop_assert_eq!(range.last(), elements.last());

    if let Some(segments) = range.segments() {
        prop_assert!(segments.len() >= 2);
        prop_assert_eq!(
            range.limit(),
            segments.iter().map(|segment| segment.limit()).sum::<usize>()
        );
        prop_assert_eq!(range.first(), segments[0].first());
        prop_assert_eq!(range.last(), segments[segments.len() - 1].last());
        for segment in segments {
            prop_assert!(segment.segments().is_none());
            prop_assert!(!segment.is_empty());
        }
        for pair in segments.windows(2) {
            prop_assert!(pair[0].last() < pair[1].first());
        }
    }
    Ok(())
}

// =============================================================================
// Identity Law: merge(empty, r) == r == merge(r, empty)
// =============================================================================

proptest! {
    #[test]
    fn prop_merge_identity_law(runs in arbitrary_runs()) {
        let range = build(&runs);

        prop_assert_eq!(merge(empty(), range.clone()).to_vec(), range.to_vec());
        prop_assert_eq!(merge(range.clone(), empty()).to_vec(), range.to_vec());
    }
}

// =============================================================================
// Union Law: merging produces every element of every input in sorted order
// =============================================================================

proptest! {
    #[test]
    fn prop_merge_union_law(runs in arbitrary_runs()) {
        let range = build(&runs);
        let expected = sorted_union(&runs);

        prop_assert_eq!(range.limit(), expected.len());
        prop_assert_eq!(range.to_vec(), expected);
    }
}

// =============================================================================
// Partition Law: left ++ right == r, split by the order relation
// =============================================================================

proptest! {
    #[test]
    fn prop_partition_preserves_elements(
        runs in arbitrary_runs(),
        pivot in -45i32..45,
        order in arbitrary_order()
    ) {
        let range = build(&runs);
        let (left, right) = range.clone().partition(&pivot, order);

        let left_elements = left.to_vec();
        let right_elements = right.to_vec();
        prop_assert!(left_elements.iter().all(|element| order.holds(element, &pivot)));
        prop_assert!(right_elements.iter().all(|element| !order.holds(element, &pivot)));

        let mut rejoined = left_elements;
        rejoined.extend(right_elements);
        prop_assert_eq!(rejoined, range.to_vec());
    }
}

// =============================================================================
// Structure Laws: composites are disjoint, flat and correctly bounded
// =============================================================================

proptest! {
    #[test]
    fn prop_merge_yields_well_formed_structure(runs in arbitrary_runs()) {
        check_structure(&build(&runs))?;
    }

    #[test]
    fn prop_partition_yields_well_formed_structure(
        runs in arbitrary_runs(),
        pivot in -45i32..45,
        order in arbitrary_order()
    ) {
        let (left, right) = build(&runs).partition(&pivot, order);
        check_structure(&left)?;
        check_structure(&right)?;
    }
}

// =============================================================================
// Cursor Law: repeated fill of any size equals repeated next
// =============================================================================

proptest! {
    #[test]
    fn prop_fill_matches_next(runs in arbitrary_runs(), size in 1usize..8) {
        let range = build(&runs);
        prop_assert_eq!(drain_with_fill(&range, size), range.to_vec());
    }
}
