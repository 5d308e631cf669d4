//! Application state for the TUI.

use crate::features::pomodoro::{announce, Alert, Pomodoro, TickOutcome};

/// Help text shown in the status bar.
pub const HELP: &str = "space:start/pause | s:stop | f/F:focus -/+ | b/B:break -/+ | ?:help | q:quit";

/// Application state.
pub struct App {
    /// The timer being driven.
    pub pomodoro: Pomodoro,
    /// Status message to display.
    pub status: Option<String>,
    /// Fired when a session expires.
    alert: Box<dyn Alert>,
}

impl App {
    /// Create a new app instance.
    #[must_use]
    pub fn new(pomodoro: Pomodoro, alert: Box<dyn Alert>) -> Self {
        Self {
            pomodoro,
            status: Some("Press space to start, ? for help".to_string()),
            alert,
        }
    }

    /// Start, pause or resume the timer.
    pub fn play_pause(&mut self) {
        let running = self.pomodoro.play_pause();
        self.status = Some(if running { "Running" } else { "Paused" }.to_string());
    }

    /// Stop the timer and discard the session.
    pub fn stop(&mut self) {
        if self.pomodoro.is_active() {
            self.pomodoro.stop();
            self.status = Some("Stopped".to_string());
        }
    }

    /// Lengthen focus.
    pub fn increase_focus(&mut self) {
        let changed = self.pomodoro.increase_focus();
        self.report_adjust(changed);
    }

    /// Shorten focus.
    pub fn decrease_focus(&mut self) {
        let changed = self.pomodoro.decrease_focus();
        self.report_adjust(changed);
    }

    /// Lengthen the break.
    pub fn increase_break(&mut self) {
        let changed = self.pomodoro.increase_break();
        self.report_adjust(changed);
    }

    /// Shorten the break.
    pub fn decrease_break(&mut self) {
        let changed = self.pomodoro.decrease_break();
        self.report_adjust(changed);
    }

    fn report_adjust(&mut self, changed: bool) {
        self.status = if self.pomodoro.is_active() {
            Some("Stop the timer to change durations".to_string())
        } else if changed {
            None
        } else {
            Some("Limit reached".to_string())
        };
    }

    /// Advance the timer by one second, ringing the alert on expiry.
    pub fn on_tick(&mut self) -> TickOutcome {
        let outcome = self.pomodoro.on_interval();
        announce(&outcome, self.alert.as_mut());
        if let TickOutcome::Expired { previous, next } = outcome {
            self.status = Some(format!("{previous} finished, now {}", next.label));
        }
        outcome
    }

    /// Show the key bindings.
    pub fn show_help(&mut self) {
        self.status = Some(HELP.to_string());
    }
}
