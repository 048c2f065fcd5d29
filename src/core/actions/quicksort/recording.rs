use crate::core::actions::cancellation::Cancelled;
use crate::core::actions::quicksort::ports::sort_hooks::SortHooks;
use crate::core::data::step_state::StepState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceEvent {
    Step(StepState),
    Swap { first: usize, second: usize },
}

/// Headless hooks: keeps every event and never waits.
#[derive(Debug, Default)]
pub struct RecordingHooks {
    events: Vec<TraceEvent>,
    suspensions: u64,
}

impl RecordingHooks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn events(&self) -> &[TraceEvent] {
        &self.events
    }

    #[must_use]
    pub fn suspensions(&self) -> u64 {
        self.suspensions
    }

    pub fn swaps(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.events.iter().filter_map(|event| match event {
            TraceEvent::Swap { first, second } => Some((*first, *second)),
            TraceEvent::Step(_) => None,
        })
    }
}

impl SortHooks for RecordingHooks {
    fn publish(&mut self, step: StepState) {
        self.events.push(TraceEvent::Step(step));
    }

    fn swapped(&mut self, first: usize, second: usize) {
        self.events.push(TraceEvent::Swap { first, second });
    }

    fn suspend(&mut self) -> Result<(), Cancelled> {
        self.suspensions += 1;
        Ok(())
    }
}
