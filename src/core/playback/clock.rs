//! Inter-step pacing and the pause gate.
//!
//! The sorting worker calls [`PlaybackClock::suspend`] after every published step.
//! The input side adjusts speed, pauses, resumes and cancels through the same object,
//! so the two execution contexts never share anything beyond this clock and the array.

use crate::core::actions::cancellation::{CancelToken, Cancelled};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Condvar, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

pub const MIN_SPEED: u8 = 1;
pub const MAX_SPEED: u8 = 100;
pub const DEFAULT_SPEED: u8 = 50;
pub const DEFAULT_MINIMUM_DELAY: u64 = 5;
pub const DEFAULT_TIME_UNIT: Duration = Duration::from_millis(1);

#[must_use]
pub fn clamp_speed(value: i32) -> u8 {
    value.clamp(i32::from(MIN_SPEED), i32::from(MAX_SPEED)) as u8
}

/// Delay in time units for `speed`, never below `minimum_delay`.
#[must_use]
pub fn delay_units(speed: u8, minimum_delay: u64) -> u64 {
    let speed = speed.clamp(MIN_SPEED, MAX_SPEED);
    (101 - u64::from(speed)).max(minimum_delay)
}

#[derive(Debug, Default)]
struct Gate {
    paused: bool,
    cancelled: bool,
}

#[derive(Debug)]
pub struct PlaybackClock {
    speed: AtomicU8,
    minimum_delay: u64,
    time_unit: Duration,
    gate: Mutex<Gate>,
    wake: Condvar,
}

impl PlaybackClock {
    #[must_use]
    pub fn new(initial_speed: i32, minimum_delay: u64, time_unit: Duration) -> Self {
        Self {
            speed: AtomicU8::new(clamp_speed(initial_speed)),
            minimum_delay,
            time_unit,
            gate: Mutex::new(Gate::default()),
            wake: Condvar::new(),
        }
    }

    #[must_use]
    pub fn speed(&self) -> u8 {
        self.speed.load(Ordering::Acquire)
    }

    /// Stores the clamped speed; the next call to [`suspend`](Self::suspend) uses it.
    pub fn set_speed(&self, value: i32) -> u8 {
        let speed = clamp_speed(value);
        self.speed.store(speed, Ordering::Release);
        tracing::debug!(requested = value, speed, "playback speed changed");
        speed
    }

    #[must_use]
    pub fn delay_for(&self, speed: u8) -> Duration {
        let units = delay_units(speed, self.minimum_delay);
        self.time_unit
            .saturating_mul(u32::try_from(units).unwrap_or(u32::MAX))
    }

    /// Sleeps for the current delay, then blocks for as long as playback is paused.
    ///
    /// Returns the delay that was applied, or [`Cancelled`] as soon as a cancellation is
    /// pending, including while sleeping or paused.
    pub fn suspend(&self) -> Result<Duration, Cancelled> {
        let delay = self.delay_for(self.speed());
        tracing::trace!(delay_us = delay.as_micros() as u64, "suspending");

        let gate = self.lock_gate();
        let (mut gate, _) = self
            .wake
            .wait_timeout_while(gate, delay, |gate| !gate.cancelled)
            .unwrap_or_else(PoisonError::into_inner);

        while gate.paused && !gate.cancelled {
            gate = self
                .wake
                .wait(gate)
                .unwrap_or_else(PoisonError::into_inner);
        }

        if gate.cancelled {
            return Err(Cancelled);
        }

        Ok(delay)
    }

    pub fn request_pause(&self) {
        let mut gate = self.lock_gate();
        if !gate.paused {
            gate.paused = true;
            tracing::debug!("playback paused");
        }
    }

    /// Releases a paused worker. Does nothing when playback is not paused.
    pub fn request_resume(&self) {
        let mut gate = self.lock_gate();
        if gate.paused {
            gate.paused = false;
            self.wake.notify_all();
            tracing::debug!("playback resumed");
        }
    }

    /// Flips the pause flag and returns the new value.
    pub fn toggle_pause(&self) -> bool {
        if self.is_paused() {
            self.request_resume();
            false
        } else {
            self.request_pause();
            true
        }
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.lock_gate().paused
    }

    /// Interrupts any pending sleep or pause wait; every later `suspend` fails until `rearm`.
    pub fn cancel(&self) {
        let mut gate = self.lock_gate();
        gate.cancelled = true;
        self.wake.notify_all();
    }

    /// Clears pause and cancellation ahead of a new run.
    pub fn rearm(&self) {
        let mut gate = self.lock_gate();
        gate.paused = false;
        gate.cancelled = false;
    }

    fn lock_gate(&self) -> MutexGuard<'_, Gate> {
        self.gate.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for PlaybackClock {
    fn default() -> Self {
        Self::new(
            i32::from(DEFAULT_SPEED),
            DEFAULT_MINIMUM_DELAY,
            DEFAULT_TIME_UNIT,
        )
    }
}

impl CancelToken for PlaybackClock {
    fn is_cancelled(&self) -> bool {
        self.lock_gate().cancelled
    }
}
