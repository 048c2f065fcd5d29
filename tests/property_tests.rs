//! Property-based tests for the instrumented quicksort
//!
//! These tests use proptest to check the sort's counters and emitted trace
//! over many randomly generated arrays.

use proptest::prelude::*;
use quicksort_visualizer::{
    ArrayModel, RecordingHooks, StepState, TraceEvent, instrumented_quicksort,
};

fn sort_recorded(values: Vec<i32>) -> (Vec<i32>, quicksort_visualizer::SortStats, RecordingHooks) {
    let array = ArrayModel::from_values(values);
    let mut hooks = RecordingHooks::new();
    let stats = instrumented_quicksort(&array, &mut hooks).expect("sort without cancellation");

    (array.snapshot(), stats, hooks)
}

// =============================================================================
// Ordering Properties
// =============================================================================

proptest! {
    /// Property: the result is ascending and a permutation of the input
    #[test]
    fn sorts_into_a_permutation(values in prop::collection::vec(any::<i32>(), 0..64)) {
        let mut expected = values.clone();
        expected.sort_unstable();

        let (sorted, _, _) = sort_recorded(values);

        prop_assert_eq!(sorted, expected);
    }

    /// Property: narrow value ranges (many duplicates) still sort
    #[test]
    fn sorts_heavy_duplicates(values in prop::collection::vec(0..4i32, 0..64)) {
        let (sorted, _, _) = sort_recorded(values);

        prop_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));
    }
}

// =============================================================================
// Counter Properties
// =============================================================================

proptest! {
    /// Property: comparisons and effective swaps never exceed n(n-1)/2,
    /// and reported swaps (self-swaps included) never exceed n(n+1)/2 - 1
    #[test]
    fn counters_stay_within_quadratic_bounds(values in prop::collection::vec(0..16i32, 0..48)) {
        let n = values.len() as u64;
        let (_, stats, hooks) = sort_recorded(values);

        prop_assert!(stats.comparisons <= n * n.saturating_sub(1) / 2);
        prop_assert!(stats.effective_swaps <= n * n.saturating_sub(1) / 2);
        prop_assert!(stats.swaps <= (n * (n + 1) / 2).saturating_sub(1));
        prop_assert_eq!(stats.swaps, hooks.swaps().count() as u64);
        prop_assert_eq!(hooks.suspensions(), stats.steps + stats.swaps);
    }
}

// =============================================================================
// Trace Properties
// =============================================================================

proptest! {
    /// Property: every highlighted or swapped index lies inside the array
    #[test]
    fn trace_stays_in_bounds(values in prop::collection::vec(any::<i32>(), 0..48)) {
        let len = values.len();
        let (_, _, hooks) = sort_recorded(values);

        for event in hooks.events() {
            match *event {
                TraceEvent::Step(StepState { pivot, low_cursor, scan }) => {
                    for index in [pivot, low_cursor, scan].into_iter().flatten() {
                        prop_assert!(index < len);
                    }
                }
                TraceEvent::Swap { first, second } => {
                    prop_assert!(first < len && second < len);
                }
            }
        }
    }

    /// Property: while partitioning, the low cursor sits strictly before the scan
    /// and the scan strictly before the pivot
    #[test]
    fn partition_steps_keep_cursor_order(values in prop::collection::vec(0..32i32, 2..48)) {
        let (_, _, hooks) = sort_recorded(values);

        for event in hooks.events() {
            if let TraceEvent::Step(StepState { pivot: Some(pivot), low_cursor, scan: Some(scan) }) = *event {
                prop_assert!(scan < pivot);
                if let Some(low) = low_cursor {
                    prop_assert!(low <= scan);
                }
            }
        }
    }
}
