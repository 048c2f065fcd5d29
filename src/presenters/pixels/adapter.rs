use std::sync::{Mutex, PoisonError};

use winit::event_loop::EventLoopProxy;

use crate::controllers::interactive::events::sort_event::SortEvent;
use crate::controllers::interactive::ports::presenter::SortPresenterPort;
use crate::core::data::step_state::StepState;
use crate::input::gui::events::GuiEvent;

/// Receives events on the sort worker and hands them to the UI thread.
///
/// Only the latest step is kept. Run outcomes queue until the UI drains them.
pub struct PixelsAdapter {
    step: Mutex<StepState>,
    outcomes: Mutex<Vec<SortEvent>>,
    event_loop_proxy: EventLoopProxy<GuiEvent>,
}

impl SortPresenterPort for PixelsAdapter {
    fn present(&self, event: SortEvent) {
        match event {
            SortEvent::Step(step) => {
                *self.step.lock().unwrap_or_else(PoisonError::into_inner) = step;
            }
            SortEvent::ArrayChanged => {}
            outcome @ (SortEvent::RunFinished(_) | SortEvent::RunAborted(_)) => {
                self.outcomes
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .push(outcome);
            }
        }

        // Fails only once the event loop has exited.
        let _ = self.event_loop_proxy.send_event(GuiEvent::Wake);
    }
}

impl PixelsAdapter {
    pub fn new(event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self {
        Self {
            step: Mutex::new(StepState::CLEARED),
            outcomes: Mutex::new(Vec::new()),
            event_loop_proxy,
        }
    }

    #[must_use]
    pub fn step(&self) -> StepState {
        *self.step.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn take_outcomes(&self) -> Vec<SortEvent> {
        std::mem::take(&mut *self.outcomes.lock().unwrap_or_else(PoisonError::into_inner))
    }
}
