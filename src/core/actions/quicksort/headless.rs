use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::quicksort::errors::SortError;
use crate::core::actions::quicksort::instrumented_quicksort::instrumented_quicksort;
use crate::core::actions::quicksort::ports::sort_hooks::SortHooks;
use crate::core::data::array_model::ArrayModel;
use crate::core::data::sort_stats::SortStats;
use crate::core::data::step_state::StepState;

/// Hooks that drop every event and only poll `cancel` at suspension points.
pub struct HeadlessHooks<'a, C: CancelToken> {
    cancel: &'a C,
}

impl<'a, C: CancelToken> HeadlessHooks<'a, C> {
    pub fn new(cancel: &'a C) -> Self {
        Self { cancel }
    }
}

impl<C: CancelToken> SortHooks for HeadlessHooks<'_, C> {
    fn publish(&mut self, _step: StepState) {}

    fn swapped(&mut self, _first: usize, _second: usize) {}

    fn suspend(&mut self) -> Result<(), Cancelled> {
        self.cancel.check()
    }
}

/// Runs the instrumented sort without pacing, for replays and benchmarks.
pub fn sort_headless<C: CancelToken>(
    array: &ArrayModel,
    cancel: &C,
) -> Result<SortStats, SortError> {
    let mut hooks = HeadlessHooks::new(cancel);
    instrumented_quicksort(array, &mut hooks)
}
