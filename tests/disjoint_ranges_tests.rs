//! Scenario tests for merging, partitioning and traversing sorted ranges.

use rstest::rstest;
use sorted_ranges::merge::{Merger, TiePolicy, merge, merge_all};
use sorted_ranges::range::{Cursor, Order, RangeRef, SliceRange, empty};

fn slice(elements: &[i32]) -> RangeRef<i32> {
    SliceRange::from_sorted_vec(elements.to_vec()).into_shared()
}

fn read_all(range: &RangeRef<i32>) -> Vec<i32> {
    let mut cursor = range.open();
    let mut elements = Vec::new();
    while let Some(element) = cursor.next() {
        elements.push(element);
    }
    elements
}

// =============================================================================
// Merge scenarios
// =============================================================================

#[rstest]
fn test_merge_disjoint_inputs_concatenates() {
    let merged = merge(slice(&[1, 2, 3]), slice(&[10, 11, 12]));

    assert_eq!(read_all(&merged), vec![1, 2, 3, 10, 11, 12]);
    assert_eq!(merged.limit(), 6);
    assert_eq!(merged.first(), Some(&1));
    assert_eq!(merged.last(), Some(&12));
}

#[rstest]
fn test_merge_overlapping_inputs_interleaves() {
    let merged = merge(slice(&[1, 3, 5]), slice(&[2, 4, 6]));

    assert_eq!(read_all(&merged), vec![1, 2, 3, 4, 5, 6]);
    assert_eq!(merged.first(), Some(&1));
    assert_eq!(merged.last(), Some(&6));
}

#[rstest]
fn test_merge_overlapping_partitions_match_expected_parts() {
    let a = slice(&[1, 3, 5]);
    let b = slice(&[2, 4, 6]);

    let (before, a_overlap) = a.partition(&2, Order::StrictlyBefore);
    assert_eq!(read_all(&before), vec![1]);
    assert_eq!(read_all(&a_overlap), vec![3, 5]);

    let (b_overlap, after) = b.partition(&5, Order::BeforeOrEqual);
    assert_eq!(read_all(&b_overlap), vec![2, 4]);
    assert_eq!(read_all(&after), vec![6]);
}

#[rstest]
#[case(Order::StrictlyBefore, vec![1], vec![3, 5])]
#[case(Order::BeforeOrEqual, vec![1, 3], vec![5])]
fn test_partition_boundary_relation(
    #[case] order: Order,
    #[case] left: Vec<i32>,
    #[case] right: Vec<i32>,
) {
    let (actual_left, actual_right) = slice(&[1, 3, 5]).partition(&3, order);
    assert_eq!(read_all(&actual_left), left);
    assert_eq!(read_all(&actual_right), right);
}

#[rstest]
fn test_merge_identity_with_empty_range() {
    let range = slice(&[4, 5, 6]);
    assert_eq!(read_all(&merge(empty(), range.clone())), vec![4, 5, 6]);
    assert_eq!(read_all(&merge(range, empty())), vec![4, 5, 6]);
    assert!(merge::<i32>(empty(), empty()).is_empty());
}

#[rstest]
fn test_sequential_merges_never_nest_composites() {
    let merged = merge(
        merge(slice(&[1, 2]), slice(&[5, 6])),
        merge(slice(&[3, 4]), slice(&[8, 9])),
    );
    let merged = merge(merged, slice(&[20]));

    assert_eq!(read_all(&merged), vec![1, 2, 3, 4, 5, 6, 8, 9, 20]);
    let segments = merged.segments().unwrap_or_default();
    assert!(!segments.is_empty());
    assert!(segments.iter().all(|segment| segment.segments().is_none()));
}

#[rstest]
fn test_merge_all_combines_many_runs() {
    let runs = [
        slice(&[30, 31]),
        slice(&[1, 10, 20]),
        slice(&[5, 15, 25]),
        slice(&[40]),
    ];
    assert_eq!(
        read_all(&merge_all(runs)),
        vec![1, 5, 10, 15, 20, 25, 30, 31, 40]
    );
}

#[rstest]
fn test_merger_with_deduplicate_policy_drops_ties() {
    let merger = Merger::with_policy(TiePolicy::Deduplicate);
    let merged = merger.merge_all([slice(&[1, 2, 3]), slice(&[2, 3, 4]), slice(&[3, 4, 5])]);
    assert_eq!(read_all(&merged), vec![1, 2, 3, 4, 5]);
}

// =============================================================================
// Cursor scenarios
// =============================================================================

#[rstest]
fn test_fill_across_segment_boundary() {
    let merged = merge(slice(&[1, 2]), slice(&[3, 4]));
    assert_eq!(merged.segments().map(<[_]>::len), Some(2));

    let mut cursor = merged.open();
    let mut buffer = [0; 3];
    assert_eq!(cursor.fill(&mut buffer), 3);
    assert_eq!(buffer, [1, 2, 3]);
    assert_eq!(cursor.fill(&mut buffer), 1);
    assert_eq!(buffer[0], 4);
}

#[rstest]
fn test_exhausted_cursor_keeps_returning_none() {
    let merged = merge(slice(&[1]), slice(&[2]));
    let mut cursor = merged.open();
    assert_eq!(cursor.next(), Some(1));
    assert_eq!(cursor.next(), Some(2));
    assert_eq!(cursor.next(), None);
    assert_eq!(cursor.next(), None);
    assert_eq!(cursor.fill(&mut [0; 2]), 0);
}

#[rstest]
fn test_iter_adapts_cursor() {
    let merged = merge(slice(&[1, 4]), slice(&[2, 3]));
    let doubled: Vec<i32> = merged.iter().map(|element| element * 2).collect();
    assert_eq!(doubled, vec![2, 4, 6, 8]);
}

#[rstest]
fn test_concurrent_cursors_over_shared_range() {
    let merged = merge(slice(&[1, 3, 5, 7]), slice(&[2, 4, 6, 8]));

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let range = merged.clone();
            std::thread::spawn(move || range.to_vec())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }
}

#[rstest]
fn test_merged_range_partitions_again() {
    let merged = merge(slice(&[1, 3, 5, 7]), slice(&[2, 4, 20, 21]));

    let (left, right) = merged.partition(&5, Order::StrictlyBefore);
    assert_eq!(read_all(&left), vec![1, 2, 3, 4]);
    assert_eq!(read_all(&right), vec![5, 7, 20, 21]);
    assert_eq!(left.last(), Some(&4));
    assert_eq!(right.first(), Some(&5));
}
