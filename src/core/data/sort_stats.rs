/// Counters collected while one run executes.
///
/// `swaps` counts every reported swap, self-swaps included. `effective_swaps` only
/// counts swaps of two distinct indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortStats {
    pub comparisons: u64,
    pub swaps: u64,
    pub effective_swaps: u64,
    pub steps: u64,
}
