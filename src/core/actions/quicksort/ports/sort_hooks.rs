use crate::core::actions::cancellation::Cancelled;
use crate::core::data::step_state::StepState;

/// Observation and suspension points of an instrumented sort.
///
/// Every `publish` and every `swapped` is immediately followed by one `suspend`.
pub trait SortHooks {
    fn publish(&mut self, step: StepState);
    fn swapped(&mut self, first: usize, second: usize);
    fn suspend(&mut self) -> Result<(), Cancelled>;
}
