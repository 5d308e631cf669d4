//! One-second tick scheduling for the TUI loop.

use std::time::{Duration, Instant};

use crate::features::pomodoro::TICK;

/// How long to wait for input while the timer is paused.
pub const IDLE_POLL: Duration = Duration::from_millis(250);

/// Tracks when the last tick happened.
#[derive(Debug, Clone, Copy)]
pub struct Cadence {
    last_tick: Instant,
}

impl Cadence {
    /// Start counting from `now`.
    #[must_use]
    pub const fn new(now: Instant) -> Self {
        Self { last_tick: now }
    }

    /// Restart the countdown to the next tick, e.g. after play or pause.
    pub fn reset(&mut self, now: Instant) {
        self.last_tick = now;
    }

    /// How long to wait for input before checking for a tick again.
    #[must_use]
    pub fn timeout(&self, running: bool, now: Instant) -> Duration {
        if running {
            TICK.saturating_sub(now.saturating_duration_since(self.last_tick))
        } else {
            IDLE_POLL
        }
    }

    /// Check whether a tick is due and consume it.
    ///
    /// The deadline moves forward by exactly one tick, so a late loop
    /// iteration catches up on the following ones instead of drifting.
    pub fn take_tick(&mut self, running: bool, now: Instant) -> bool {
        if running && now.saturating_duration_since(self.last_tick) >= TICK {
            self.last_tick += TICK;
            true
        } else {
            false
        }
    }
}
