//! Pomodoro timer.
//!
//! Alternates focus sessions and breaks:
//! - Pure session transitions (tick and expiry)
//! - Clamped focus/break durations
//! - Progress and time formatting
//! - A driver that sequences start, pause, stop and ticks

pub mod alert;
pub mod driver;
pub mod durations;
pub mod progress;
pub mod session;

pub use alert::{announce, Alert, Silent, TerminalBell};
pub use driver::{Pomodoro, StatusSnapshot, TickOutcome, TICK};
pub use durations::TimerConfig;
pub use progress::{
    minutes_to_duration, progress_percent, render_progress_bar, seconds_to_duration,
    session_subtitle, session_title,
};
pub use session::{advance, transition, Session, SessionLabel};
