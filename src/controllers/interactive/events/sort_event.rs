use crate::controllers::interactive::data::run_summary::RunSummary;
use crate::controllers::interactive::errors::abort_reason::AbortReason;
use crate::core::data::step_state::StepState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortEvent {
    Step(StepState),
    /// Repaint hint: the array contents changed. Emitted once per swap and after a reset.
    ArrayChanged,
    RunFinished(RunSummary),
    RunAborted(AbortReason),
}
