//! The timer driver that sequences sessions.
//!
//! `Pomodoro` owns the optional session, the running flag and the configured
//! durations. Front ends call [`Pomodoro::on_interval`] once per second while
//! the timer runs and forward user actions to the other methods.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::durations::TimerConfig;
use super::progress::{progress_percent, seconds_to_duration};
use super::session::{advance, transition, Session, SessionLabel};

/// How often front ends call [`Pomodoro::on_interval`].
pub const TICK: Duration = Duration::from_secs(1);

/// What happened on a one-second interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Timer is paused or stopped; nothing changed.
    Idle,
    /// One second was removed from the current session.
    Ticked(Session),
    /// The current session had run out and was replaced.
    Expired {
        /// The session that ran out.
        previous: SessionLabel,
        /// The session that replaced it.
        next: Session,
    },
}

/// Pomodoro timer state.
#[derive(Debug, Clone, Default)]
pub struct Pomodoro {
    session: Option<Session>,
    running: bool,
    config: TimerConfig,
    session_started_at: Option<DateTime<Utc>>,
}

impl Pomodoro {
    /// Create a stopped timer with the given durations.
    #[must_use]
    pub fn new(config: TimerConfig) -> Self {
        Self {
            session: None,
            running: false,
            config,
            session_started_at: None,
        }
    }

    /// The current session, if the timer has been started.
    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Check if the countdown is running.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Check if a session exists, running or paused.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.session.is_some()
    }

    /// Configured durations.
    #[must_use]
    pub const fn config(&self) -> &TimerConfig {
        &self.config
    }

    /// Elapsed percentage of the current session.
    #[must_use]
    pub fn progress_percent(&self) -> Option<f64> {
        self.session
            .as_ref()
            .map(|session| progress_percent(session, &self.config))
    }

    /// Toggle between running and paused.
    ///
    /// Starting with no session begins a full focus session. Returns the new
    /// running state.
    pub fn play_pause(&mut self) -> bool {
        self.running = !self.running;

        if self.running && self.session.is_none() {
            let session = Session::focusing(self.config.focus_duration_minutes());
            tracing::info!(
                seconds = session.time_remaining,
                "starting focus session"
            );
            self.session = Some(session);
            self.session_started_at = Some(Utc::now());
        } else if self.running {
            tracing::debug!("resumed");
        } else {
            tracing::debug!("paused");
        }

        self.running
    }

    /// Stop the timer and discard the session.
    pub fn stop(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::info!(
                label = %session.label,
                remaining = session.time_remaining,
                "stopped"
            );
        }
        self.running = false;
        self.session_started_at = None;
    }

    /// Advance the timer by one second.
    ///
    /// An expired session is replaced by the next one instead of being
    /// ticked, so the zero reading stays visible for a full second.
    pub fn on_interval(&mut self) -> TickOutcome {
        if !self.running {
            return TickOutcome::Idle;
        }
        let Some(session) = self.session else {
            return TickOutcome::Idle;
        };

        if session.is_expired() {
            let next = transition(
                session,
                self.config.focus_duration_minutes(),
                self.config.break_duration_minutes(),
            );
            tracing::info!(from = %session.label, to = %next.label, "session expired");
            self.session = Some(next);
            self.session_started_at = Some(Utc::now());
            return TickOutcome::Expired {
                previous: session.label,
                next,
            };
        }

        let next = advance(session);
        self.session = Some(next);
        TickOutcome::Ticked(next)
    }

    /// Lengthen focus by one step. Returns whether the value changed.
    ///
    /// Durations are locked while a session exists.
    pub fn increase_focus(&mut self) -> bool {
        self.adjust(TimerConfig::increase_focus)
    }

    /// Shorten focus by one step. Returns whether the value changed.
    pub fn decrease_focus(&mut self) -> bool {
        self.adjust(TimerConfig::decrease_focus)
    }

    /// Lengthen the break by one step. Returns whether the value changed.
    pub fn increase_break(&mut self) -> bool {
        self.adjust(TimerConfig::increase_break)
    }

    /// Shorten the break by one step. Returns whether the value changed.
    pub fn decrease_break(&mut self) -> bool {
        self.adjust(TimerConfig::decrease_break)
    }

    fn adjust(&mut self, f: fn(TimerConfig) -> TimerConfig) -> bool {
        if self.is_active() {
            return false;
        }
        let updated = f(self.config);
        let changed = updated != self.config;
        if changed {
            tracing::debug!(
                focus = updated.focus_duration_minutes(),
                break_minutes = updated.break_duration_minutes(),
                "durations adjusted"
            );
        }
        self.config = updated;
        changed
    }

    /// Capture the current state for display or JSON output.
    #[must_use]
    pub fn snapshot(&self) -> StatusSnapshot {
        StatusSnapshot {
            label: self.session.map(|s| s.label),
            time_remaining: self.session.map(|s| s.time_remaining),
            remaining: self.session.map(|s| seconds_to_duration(s.time_remaining)),
            progress_percent: self.progress_percent(),
            running: self.running,
            focus_duration_minutes: self.config.focus_duration_minutes(),
            break_duration_minutes: self.config.break_duration_minutes(),
            session_started_at: self.session_started_at,
        }
    }
}

/// Serializable view of the timer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusSnapshot {
    /// Current session kind, absent when stopped.
    pub label: Option<SessionLabel>,
    /// Seconds left in the current session.
    pub time_remaining: Option<u32>,
    /// Seconds left formatted as `MM:SS`.
    pub remaining: Option<String>,
    /// Elapsed percentage of the current session.
    pub progress_percent: Option<f64>,
    /// Whether the countdown is running.
    pub running: bool,
    /// Configured focus minutes.
    pub focus_duration_minutes: u32,
    /// Configured break minutes.
    pub break_duration_minutes: u32,
    /// When the current session began.
    pub session_started_at: Option<DateTime<Utc>>,
}
