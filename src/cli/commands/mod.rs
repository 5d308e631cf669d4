//! Command implementations for pomo.

mod config;
mod watch;

pub use config::config;
pub use watch::watch;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::{Cli, DurationArgs};
use crate::error::PomoError;
use crate::features::pomodoro::TimerConfig;

/// Combine configured durations with command line overrides.
///
/// Overrides are clamped into bounds like every other duration.
#[must_use]
pub fn resolve_durations(base: TimerConfig, overrides: DurationArgs) -> TimerConfig {
    TimerConfig::new(
        overrides
            .focus
            .unwrap_or_else(|| base.focus_duration_minutes()),
        overrides
            .break_minutes
            .unwrap_or_else(|| base.break_duration_minutes()),
    )
}

/// Generate a shell completion script.
///
/// # Errors
///
/// Returns an error if the generated script is not valid UTF-8.
pub fn completions(shell: Shell) -> Result<String, PomoError> {
    let mut cmd = Cli::command();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, "pomo", &mut buf);
    String::from_utf8(buf).map_err(|e| PomoError::Serialization(format!("UTF-8 error: {e}")))
}
