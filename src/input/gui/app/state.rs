use crate::controllers::interactive::data::run_summary::RunSummary;
use crate::controllers::interactive::errors::abort_reason::AbortReason;
use crate::controllers::interactive::events::sort_event::SortEvent;
use crate::core::data::playback_state::PlaybackState;

/// Result of the most recent run, as shown in the control panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunStatus {
    Ready,
    Finished(RunSummary),
    Aborted(AbortReason),
}

pub struct GuiAppState {
    pub speed: i32,
    status: RunStatus,
}

impl GuiAppState {
    #[must_use]
    pub fn new(initial_speed: u8) -> Self {
        Self {
            speed: i32::from(initial_speed),
            status: RunStatus::Ready,
        }
    }

    #[must_use]
    pub fn status(&self) -> &RunStatus {
        &self.status
    }

    /// Keeps only run outcomes; steps and array changes carry nothing to show in the panel.
    pub fn record_event(&mut self, event: &SortEvent) {
        match event {
            SortEvent::RunFinished(summary) => self.status = RunStatus::Finished(summary.clone()),
            SortEvent::RunAborted(reason) => self.status = RunStatus::Aborted(reason.clone()),
            SortEvent::Step(_) | SortEvent::ArrayChanged => {}
        }
    }

    pub fn clear_status(&mut self) {
        self.status = RunStatus::Ready;
    }

    #[must_use]
    pub fn pause_label(playback: PlaybackState) -> &'static str {
        if playback.paused { "Resume" } else { "Pause" }
    }

    #[must_use]
    pub fn status_line(&self, playback: PlaybackState) -> String {
        if playback.sorting {
            let state = if playback.paused { "paused" } else { "sorting" };
            return format!("{state} at speed {}", playback.speed);
        }

        match &self.status {
            RunStatus::Ready => "ready".to_string(),
            RunStatus::Finished(summary) => format!(
                "sorted: {} comparisons, {} swaps in {} ms",
                summary.stats.comparisons,
                summary.stats.swaps,
                summary.duration.as_millis()
            ),
            RunStatus::Aborted(reason) => format!("stopped: {reason}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::sort_stats::SortStats;
    use crate::core::data::step_state::StepState;
    use std::time::Duration;

    fn idle() -> PlaybackState {
        PlaybackState {
            sorting: false,
            paused: false,
            speed: 50,
        }
    }

    #[test]
    fn finished_run_is_reported_when_idle() {
        let mut state = GuiAppState::new(50);

        state.record_event(&SortEvent::RunFinished(RunSummary {
            run_id: 1,
            stats: SortStats {
                comparisons: 5,
                swaps: 3,
                effective_swaps: 2,
                steps: 10,
            },
            duration: Duration::from_millis(42),
        }));

        assert_eq!(
            state.status_line(idle()),
            "sorted: 5 comparisons, 3 swaps in 42 ms"
        );
    }

    #[test]
    fn playback_flags_take_precedence_over_last_outcome() {
        let mut state = GuiAppState::new(50);
        state.record_event(&SortEvent::RunAborted(AbortReason::Cancelled));

        let paused = PlaybackState {
            sorting: true,
            paused: true,
            speed: 7,
        };

        assert_eq!(state.status_line(paused), "paused at speed 7");
        assert_eq!(GuiAppState::pause_label(paused), "Resume");
        assert_eq!(state.status_line(idle()), "stopped: cancelled");
    }

    #[test]
    fn steps_do_not_replace_the_outcome() {
        let mut state = GuiAppState::new(10);
        state.record_event(&SortEvent::RunAborted(AbortReason::Cancelled));

        state.record_event(&SortEvent::Step(StepState::CLEARED));
        state.record_event(&SortEvent::ArrayChanged);

        assert_eq!(state.status(), &RunStatus::Aborted(AbortReason::Cancelled));

        state.clear_status();
        assert_eq!(state.status_line(idle()), "ready");
        assert_eq!(state.speed, 10);
    }
}
