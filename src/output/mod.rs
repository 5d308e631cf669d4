//! Output formatting for pomo.
//!
//! This module renders timer status in the selected output format.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::PomoError;
use crate::features::pomodoro::{Pomodoro, SessionLabel};

pub use json::*;
pub use pretty::*;

/// Format the timer status based on output format
///
/// # Errors
///
/// Returns `PomoError::Serialization` if JSON serialization fails.
pub fn format_status(pomodoro: &Pomodoro, format: OutputFormat) -> Result<String, PomoError> {
    match format {
        OutputFormat::Pretty => Ok(format_status_pretty(pomodoro)),
        OutputFormat::Json => format_status_json(&pomodoro.snapshot()),
    }
}

/// Format a session expiry based on output format
///
/// # Errors
///
/// Returns `PomoError::Serialization` if JSON serialization fails.
pub fn format_expired(
    previous: SessionLabel,
    pomodoro: &Pomodoro,
    format: OutputFormat,
) -> Result<String, PomoError> {
    match format {
        OutputFormat::Pretty => Ok(format_expired_pretty(previous, pomodoro)),
        OutputFormat::Json => format_expired_json(&pomodoro.snapshot()),
    }
}
