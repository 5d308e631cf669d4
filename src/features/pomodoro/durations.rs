//! Focus and break durations with their adjustment bounds.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use super::session::SessionLabel;

/// Allowed focus durations in minutes.
pub const FOCUS_RANGE: RangeInclusive<u32> = 5..=60;
/// Minutes added or removed per focus adjustment.
pub const FOCUS_STEP: u32 = 5;
/// Allowed break durations in minutes.
pub const BREAK_RANGE: RangeInclusive<u32> = 1..=15;
/// Minutes added or removed per break adjustment.
pub const BREAK_STEP: u32 = 1;

/// Default focus duration in minutes.
pub const DEFAULT_FOCUS_MINUTES: u32 = 25;
/// Default break duration in minutes.
pub const DEFAULT_BREAK_MINUTES: u32 = 5;

/// Configured session lengths.
///
/// Both fields always lie inside their ranges; every constructor and
/// adjuster clamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerConfig {
    focus_duration_minutes: u32,
    break_duration_minutes: u32,
}

impl TimerConfig {
    /// Create a config, clamping both durations into their bounds.
    #[must_use]
    pub fn new(focus_duration_minutes: u32, break_duration_minutes: u32) -> Self {
        Self {
            focus_duration_minutes: clamp(focus_duration_minutes, &FOCUS_RANGE),
            break_duration_minutes: clamp(break_duration_minutes, &BREAK_RANGE),
        }
    }

    /// Focus duration in minutes.
    #[must_use]
    pub const fn focus_duration_minutes(&self) -> u32 {
        self.focus_duration_minutes
    }

    /// Break duration in minutes.
    #[must_use]
    pub const fn break_duration_minutes(&self) -> u32 {
        self.break_duration_minutes
    }

    /// Full length in seconds of a session with the given label.
    #[must_use]
    pub const fn seconds_for(&self, label: SessionLabel) -> u32 {
        match label {
            SessionLabel::Focusing => self.focus_duration_minutes * 60,
            SessionLabel::OnBreak => self.break_duration_minutes * 60,
        }
    }

    /// Minutes configured for the given label.
    #[must_use]
    pub const fn minutes_for(&self, label: SessionLabel) -> u32 {
        match label {
            SessionLabel::Focusing => self.focus_duration_minutes,
            SessionLabel::OnBreak => self.break_duration_minutes,
        }
    }

    /// Lengthen focus by one step, stopping at the maximum.
    #[must_use]
    pub fn increase_focus(self) -> Self {
        Self {
            focus_duration_minutes: clamp(
                self.focus_duration_minutes.saturating_add(FOCUS_STEP),
                &FOCUS_RANGE,
            ),
            ..self
        }
    }

    /// Shorten focus by one step, stopping at the minimum.
    #[must_use]
    pub fn decrease_focus(self) -> Self {
        Self {
            focus_duration_minutes: clamp(
                self.focus_duration_minutes.saturating_sub(FOCUS_STEP),
                &FOCUS_RANGE,
            ),
            ..self
        }
    }

    /// Lengthen the break by one step, stopping at the maximum.
    #[must_use]
    pub fn increase_break(self) -> Self {
        Self {
            break_duration_minutes: clamp(
                self.break_duration_minutes.saturating_add(BREAK_STEP),
                &BREAK_RANGE,
            ),
            ..self
        }
    }

    /// Shorten the break by one step, stopping at the minimum.
    #[must_use]
    pub fn decrease_break(self) -> Self {
        Self {
            break_duration_minutes: clamp(
                self.break_duration_minutes.saturating_sub(BREAK_STEP),
                &BREAK_RANGE,
            ),
            ..self
        }
    }
}

impl Default for TimerConfig {
    fn default() -> Self {
        Self {
            focus_duration_minutes: DEFAULT_FOCUS_MINUTES,
            break_duration_minutes: DEFAULT_BREAK_MINUTES,
        }
    }
}

fn clamp(value: u32, range: &RangeInclusive<u32>) -> u32 {
    value.clamp(*range.start(), *range.end())
}
