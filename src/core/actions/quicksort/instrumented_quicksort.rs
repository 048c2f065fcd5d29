use crate::core::actions::quicksort::errors::SortError;
use crate::core::actions::quicksort::ports::sort_hooks::SortHooks;
use crate::core::data::array_model::ArrayModel;
use crate::core::data::sort_stats::SortStats;
use crate::core::data::step_state::StepState;

/// Sorts `array` in place with Lomuto partitioning (last element as pivot), reporting
/// every step to `hooks`.
///
/// Ranges are kept on an explicit stack and visited in the same order as the recursive
/// formulation: a partition's left range is fully sorted before its right range. The
/// terminal cleared step is left to the caller.
pub fn instrumented_quicksort<H: SortHooks + ?Sized>(
    array: &ArrayModel,
    hooks: &mut H,
) -> Result<SortStats, SortError> {
    let mut run = InstrumentedRun {
        array,
        hooks,
        stats: SortStats::default(),
    };

    if array.len() < 2 {
        return Ok(run.stats);
    }

    let mut pending = vec![(0, array.len() - 1)];

    while let Some((low, high)) = pending.pop() {
        if low >= high {
            continue;
        }

        let pivot_slot = run.partition(low, high)?;

        // Right pushed first so the left range pops next.
        if pivot_slot < high {
            pending.push((pivot_slot + 1, high));
        }
        if pivot_slot > low {
            pending.push((low, pivot_slot - 1));
        }
    }

    Ok(run.stats)
}

struct InstrumentedRun<'a, H: SortHooks + ?Sized> {
    array: &'a ArrayModel,
    hooks: &'a mut H,
    stats: SortStats,
}

impl<H: SortHooks + ?Sized> InstrumentedRun<'_, H> {
    fn partition(&mut self, low: usize, high: usize) -> Result<usize, SortError> {
        let pivot_value = self.array.get(high)?;
        // First index of the "greater than pivot" region; the boundary sits just before it.
        let mut store = low;

        self.publish(StepState::partitioning(high, store.checked_sub(1), low))?;

        for scan in low..high {
            self.publish(StepState::partitioning(high, store.checked_sub(1), scan))?;

            self.stats.comparisons += 1;
            if self.array.get(scan)? <= pivot_value {
                self.swap(store, scan)?;
                store += 1;
                self.publish(StepState::partitioning(high, Some(store - 1), scan))?;
            }
        }

        self.swap(store, high)?;
        self.publish(StepState::placed(store))?;

        Ok(store)
    }

    fn swap(&mut self, first: usize, second: usize) -> Result<(), SortError> {
        self.array.swap(first, second)?;

        self.stats.swaps += 1;
        if first != second {
            self.stats.effective_swaps += 1;
        }

        self.hooks.swapped(first, second);
        self.hooks.suspend()?;

        Ok(())
    }

    fn publish(&mut self, step: StepState) -> Result<(), SortError> {
        self.stats.steps += 1;
        self.hooks.publish(step);
        self.hooks.suspend()?;

        Ok(())
    }
}
