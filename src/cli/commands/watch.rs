//! Headless timer command.
//!
//! Drives the timer once per second and prints status lines instead of
//! drawing a UI.

use std::io::Write;
use std::time::Duration;

use crate::cli::args::{OutputFormat, WatchArgs};
use crate::error::PomoError;
use crate::features::pomodoro::{announce, Alert, Pomodoro, Silent, TickOutcome, TICK};
use crate::output::{format_expired, format_status};

/// Run the headless timer until the requested number of sessions expire.
///
/// Without `--cycles` this only returns on error. JSON output is for
/// scripts, so the alert stays silent in that mode and the stream carries
/// nothing but JSON lines.
///
/// # Errors
///
/// Returns an error if `--cycles 0` is given, or if writing output fails.
pub fn watch<W: Write>(
    mut pomodoro: Pomodoro,
    args: WatchArgs,
    format: OutputFormat,
    out: &mut W,
    alert: &mut dyn Alert,
    mut sleep: impl FnMut(Duration),
) -> Result<Pomodoro, PomoError> {
    if args.cycles == Some(0) {
        return Err(PomoError::InvalidArgument(
            "--cycles must be at least 1".to_string(),
        ));
    }

    let mut silent = Silent;
    let alert: &mut dyn Alert = match format {
        OutputFormat::Json => &mut silent,
        OutputFormat::Pretty => alert,
    };

    if !pomodoro.is_running() {
        pomodoro.play_pause();
    }
    if !args.quiet {
        writeln!(out, "{}", format_status(&pomodoro, format)?)?;
    }

    let mut expired = 0;
    loop {
        sleep(TICK);

        let outcome = pomodoro.on_interval();
        announce(&outcome, alert);

        match outcome {
            TickOutcome::Expired { previous, .. } => {
                expired += 1;
                writeln!(out, "{}", format_expired(previous, &pomodoro, format)?)?;
                if args.cycles.is_some_and(|cycles| expired >= cycles) {
                    pomodoro.stop();
                    break;
                }
            }
            TickOutcome::Ticked(_) if !args.quiet => {
                writeln!(out, "{}", format_status(&pomodoro, format)?)?;
            }
            TickOutcome::Ticked(_) | TickOutcome::Idle => {}
        }
        out.flush()?;
    }

    tracing::info!(expired, "watch finished");
    Ok(pomodoro)
}
