use crate::controllers::interactive::data::run_summary::RunSummary;
use crate::controllers::interactive::data::visualizer_config::VisualizerConfig;
use crate::controllers::interactive::errors::abort_reason::AbortReason;
use crate::controllers::interactive::events::sort_event::SortEvent;
use crate::controllers::interactive::ports::presenter::SortPresenterPort;
use crate::core::actions::cancellation::{CancelToken, Cancelled};
use crate::core::actions::quicksort::errors::SortError;
use crate::core::actions::quicksort::instrumented_quicksort::instrumented_quicksort;
use crate::core::actions::quicksort::ports::sort_hooks::SortHooks;
use crate::core::data::array_model::{ArrayModel, ArrayModelError};
use crate::core::data::playback_state::PlaybackState;
use crate::core::data::sort_stats::SortStats;
use crate::core::data::step_state::StepState;
use crate::core::playback::clock::PlaybackClock;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError, RwLock};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Running,
}

struct ControlState {
    phase: Phase,
    /// The worker is presenting the outcome of a run that is already idle.
    reporting: bool,
    pending_run: Option<u64>,
    next_run_id: u64,
    shutdown: bool,
}

impl ControlState {
    fn is_busy(&self) -> bool {
        self.phase == Phase::Running || self.reporting
    }
}

struct SharedState {
    control: Mutex<ControlState>,
    wake: Condvar,
    array: RwLock<Arc<ArrayModel>>,
    clock: Arc<PlaybackClock>,
    presenter_port: Arc<dyn SortPresenterPort>,
}

impl SharedState {
    fn lock_control(&self) -> MutexGuard<'_, ControlState> {
        self.control.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn current_array(&self) -> Arc<ArrayModel> {
        Arc::clone(&self.array.read().unwrap_or_else(PoisonError::into_inner))
    }
}

/// Runs the instrumented quicksort on one background worker and accepts playback
/// commands from the input side.
///
/// Commands never execute the algorithm themselves. `reset` and `shutdown` block until
/// the worker has left the run, so they must not be called from a presenter port.
pub struct SortController {
    shared: Arc<SharedState>,
    config: VisualizerConfig,
    rng: Mutex<StdRng>,
    worker: Option<JoinHandle<()>>,
}

impl SortController {
    pub fn new(
        config: VisualizerConfig,
        presenter_port: Arc<dyn SortPresenterPort>,
    ) -> Result<Self, ArrayModelError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let array = ArrayModel::random(config.bar_count(), config.value_range(), &mut rng)?;

        let clock = PlaybackClock::new(
            i32::from(config.initial_speed),
            config.minimum_delay,
            config.time_unit,
        );

        let shared = Arc::new(SharedState {
            control: Mutex::new(ControlState {
                phase: Phase::Idle,
                reporting: false,
                pending_run: None,
                next_run_id: 0,
                shutdown: false,
            }),
            wake: Condvar::new(),
            array: RwLock::new(Arc::new(array)),
            clock: Arc::new(clock),
            presenter_port,
        });

        let worker_shared = Arc::clone(&shared);

        let worker = thread::spawn(move || {
            Self::worker_loop(&worker_shared);
        });

        Ok(Self {
            shared,
            config,
            rng: Mutex::new(rng),
            worker: Some(worker),
        })
    }

    /// Starts a run over the current array. Returns `false` when a run is already active.
    pub fn start(&self) -> bool {
        let run_id = {
            let mut control = self.shared.lock_control();

            if control.shutdown || control.phase == Phase::Running {
                return false;
            }

            control.next_run_id += 1;
            control.phase = Phase::Running;
            control.pending_run = Some(control.next_run_id);
            self.shared.clock.rearm();

            control.next_run_id
        };

        self.shared.wake.notify_all();
        tracing::info!(run_id, "sort run requested");

        true
    }

    /// Pauses a running sort, or resumes a paused one. Ignored while idle.
    pub fn pause_toggle(&self) -> PlaybackState {
        let control = self.shared.lock_control();

        if control.phase == Phase::Running {
            self.shared.clock.toggle_pause();
        }

        self.playback_state_locked(&control)
    }

    pub fn set_speed(&self, value: i32) -> u8 {
        self.shared.clock.set_speed(value)
    }

    /// Asks an active run to stop at its next suspension point. Does not wait.
    pub fn cancel(&self) {
        let control = self.shared.lock_control();

        if control.phase == Phase::Running {
            tracing::info!("sort run cancellation requested");
            self.shared.clock.cancel();
        }
    }

    /// Cancels any active run, waits for the worker to go idle, then refills the array
    /// with fresh random values.
    pub fn reset(&self) -> Result<(), ArrayModelError> {
        let model = {
            let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
            ArrayModel::random(
                self.config.bar_count(),
                self.config.value_range(),
                &mut *rng,
            )?
        };

        self.replace_array(model);
        tracing::info!(len = self.config.bar_count(), "array reset");

        Ok(())
    }

    /// Replaces the array with explicit values, cancelling any active run first.
    pub fn load(&self, values: Vec<i32>) {
        self.replace_array(ArrayModel::from_values(values));
    }

    /// Blocks until no run is active and its outcome has been presented, or `timeout`
    /// elapses. Returns whether the controller is idle.
    pub fn wait_until_idle(&self, timeout: Duration) -> bool {
        let control = self.shared.lock_control();
        let (control, _) = self
            .shared
            .wake
            .wait_timeout_while(control, timeout, |control| control.is_busy())
            .unwrap_or_else(PoisonError::into_inner);

        !control.is_busy()
    }

    #[must_use]
    pub fn playback_state(&self) -> PlaybackState {
        let control = self.shared.lock_control();
        self.playback_state_locked(&control)
    }

    /// Shared handle to the array currently shown; renderers sample it between steps.
    #[must_use]
    pub fn array(&self) -> Arc<ArrayModel> {
        self.shared.current_array()
    }

    #[must_use]
    pub fn clock(&self) -> Arc<PlaybackClock> {
        Arc::clone(&self.shared.clock)
    }

    #[must_use]
    pub fn config(&self) -> &VisualizerConfig {
        &self.config
    }

    pub fn shutdown(&mut self) {
        {
            let mut control = self.shared.lock_control();
            control.shutdown = true;
            self.shared.clock.cancel();
        }
        self.shared.wake.notify_all();

        if let Some(handle) = self.worker.take() {
            let _ = handle.join();
        }
    }

    fn playback_state_locked(&self, control: &ControlState) -> PlaybackState {
        let sorting = control.phase == Phase::Running;

        PlaybackState {
            sorting,
            paused: sorting && self.shared.clock.is_paused(),
            speed: self.shared.clock.speed(),
        }
    }

    fn replace_array(&self, model: ArrayModel) {
        let mut control = self.shared.lock_control();

        if control.phase == Phase::Running {
            self.shared.clock.cancel();
        }
        control = self
            .shared
            .wake
            .wait_while(control, |control| control.is_busy())
            .unwrap_or_else(PoisonError::into_inner);

        *self
            .shared
            .array
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Arc::new(model);
        drop(control);

        self.shared.presenter_port.present(SortEvent::ArrayChanged);
    }

    fn worker_loop(shared: &SharedState) {
        loop {
            let run_id = {
                let mut control = shared.lock_control();
                loop {
                    if let Some(run_id) = control.pending_run.take() {
                        break run_id;
                    }

                    if control.shutdown {
                        return;
                    }

                    control = shared
                        .wake
                        .wait(control)
                        .unwrap_or_else(PoisonError::into_inner);
                }
            };

            Self::execute_run(shared, run_id);
        }
    }

    fn execute_run(shared: &SharedState, run_id: u64) {
        let span = tracing::info_span!("sort_run", run_id);
        let _entered = span.enter();
        let mut guard = RunGuard {
            shared,
            settled: false,
        };

        let array = shared.current_array();
        let start = Instant::now();
        tracing::info!(len = array.len(), "sort run started");

        let outcome = match panic::catch_unwind(AssertUnwindSafe(|| {
            Self::run_algorithm(shared, &array)
        })) {
            Ok(result) => outcome_event(run_id, result, start.elapsed()),
            Err(payload) => panic_event(payload.as_ref()),
        };

        Self::present_caught(shared, SortEvent::Step(StepState::CLEARED));
        guard.settle();
        Self::present_caught(shared, outcome);
    }

    fn run_algorithm(shared: &SharedState, array: &ArrayModel) -> Result<SortStats, SortError> {
        if shared.clock.is_cancelled() {
            return Err(SortError::Cancelled(Cancelled));
        }

        let mut hooks = PresentingHooks {
            presenter_port: shared.presenter_port.as_ref(),
            clock: &shared.clock,
        };
        instrumented_quicksort(array, &mut hooks)
    }

    /// Presents `event`, keeping the worker alive if the presenter panics.
    fn present_caught(shared: &SharedState, event: SortEvent) {
        let presented =
            panic::catch_unwind(AssertUnwindSafe(|| shared.presenter_port.present(event)));

        if let Err(payload) = presented {
            tracing::error!(panic = panic_message(payload.as_ref()), "presenter panicked");
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        *message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else {
        "unknown panic"
    }
}

fn panic_event(payload: &(dyn Any + Send)) -> SortEvent {
    let message = panic_message(payload);
    tracing::error!(panic = message, "sort run aborted by panic");

    SortEvent::RunAborted(AbortReason::Fault(format!("panic: {message}")))
}

fn outcome_event(run_id: u64, result: Result<SortStats, SortError>, duration: Duration) -> SortEvent {
    match result {
        Ok(stats) => {
            tracing::info!(
                swaps = stats.swaps,
                comparisons = stats.comparisons,
                duration_ms = duration.as_millis() as u64,
                "sort run finished"
            );
            SortEvent::RunFinished(RunSummary {
                run_id,
                stats,
                duration,
            })
        }
        Err(SortError::Cancelled(_)) => {
            tracing::info!("sort run cancelled");
            SortEvent::RunAborted(AbortReason::Cancelled)
        }
        Err(SortError::Array(error)) => {
            tracing::error!(%error, "sort run aborted by fault");
            SortEvent::RunAborted(AbortReason::Fault(error.to_string()))
        }
    }
}

/// Returns the controller to idle when a run ends, however it ends.
struct RunGuard<'a> {
    shared: &'a SharedState,
    settled: bool,
}

impl RunGuard<'_> {
    /// Leaves the running phase ahead of the outcome event, so a presenter reading
    /// the playback state on that event sees the run as over.
    fn settle(&mut self) {
        self.shared.clock.request_resume();

        let mut control = self.shared.lock_control();
        control.phase = Phase::Idle;
        control.reporting = true;
        drop(control);

        self.settled = true;
        self.shared.wake.notify_all();
    }
}

impl Drop for RunGuard<'_> {
    fn drop(&mut self) {
        if !self.settled {
            self.shared.clock.request_resume();
        }

        let mut control = self.shared.lock_control();
        if !self.settled {
            control.phase = Phase::Idle;
        }
        control.reporting = false;
        // The worker is unwinding; refuse further runs nobody would execute.
        if thread::panicking() {
            control.phase = Phase::Idle;
            control.shutdown = true;
            control.pending_run = None;
        }
        drop(control);

        self.shared.wake.notify_all();
    }
}

struct PresentingHooks<'a> {
    presenter_port: &'a dyn SortPresenterPort,
    clock: &'a PlaybackClock,
}

impl SortHooks for PresentingHooks<'_> {
    fn publish(&mut self, step: StepState) {
        self.presenter_port.present(SortEvent::Step(step));
    }

    fn swapped(&mut self, _first: usize, _second: usize) {
        self.presenter_port.present(SortEvent::ArrayChanged);
    }

    fn suspend(&mut self) -> Result<(), Cancelled> {
        self.clock.suspend().map(|_| ())
    }
}

impl Drop for SortController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
