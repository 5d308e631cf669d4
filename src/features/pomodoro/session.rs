//! Pomodoro sessions and the pure functions that move them forward.
//!
//! A session is either focusing or on a break. Every tick removes one second
//! from the remaining time; once it reaches zero the session is swapped for
//! the other kind with its full duration restored.

use serde::{Deserialize, Serialize};

/// Which half of the cycle a session belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionLabel {
    /// Working on something.
    Focusing,
    /// Resting between focus sessions.
    OnBreak,
}

impl SessionLabel {
    /// Get display name.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Focusing => "Focusing",
            Self::OnBreak => "On Break",
        }
    }
}

impl std::fmt::Display for SessionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The current focus or break period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Kind of session.
    pub label: SessionLabel,
    /// Seconds left before the session expires.
    pub time_remaining: u32,
}

impl Session {
    /// Create a session with an explicit amount of time left.
    #[must_use]
    pub const fn new(label: SessionLabel, time_remaining: u32) -> Self {
        Self {
            label,
            time_remaining,
        }
    }

    /// Start a full focus session.
    #[must_use]
    pub const fn focusing(focus_duration_minutes: u32) -> Self {
        Self::new(SessionLabel::Focusing, focus_duration_minutes * 60)
    }

    /// Start a full break.
    #[must_use]
    pub const fn on_break(break_duration_minutes: u32) -> Self {
        Self::new(SessionLabel::OnBreak, break_duration_minutes * 60)
    }

    /// Check if no time is left.
    #[must_use]
    pub const fn is_expired(&self) -> bool {
        self.time_remaining == 0
    }
}

/// Advance a session by one tick.
///
/// The label is kept and the remaining time drops by one second, never
/// going below zero.
#[must_use]
pub const fn advance(session: Session) -> Session {
    Session {
        label: session.label,
        time_remaining: session.time_remaining.saturating_sub(1),
    }
}

/// Produce the session that follows an expired one.
///
/// Focusing is followed by a break and a break by focusing, each with its
/// configured duration.
#[must_use]
pub fn transition(
    expired: Session,
    focus_duration_minutes: u32,
    break_duration_minutes: u32,
) -> Session {
    debug_assert!(
        expired.is_expired(),
        "transition called with {}s still remaining",
        expired.time_remaining
    );

    match expired.label {
        SessionLabel::Focusing => Session::on_break(break_duration_minutes),
        SessionLabel::OnBreak => Session::focusing(focus_duration_minutes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_decrements_by_one() {
        for remaining in [1, 2, 59, 1500] {
            let session = Session::new(SessionLabel::Focusing, remaining);
            let next = advance(session);
            assert_eq!(next.time_remaining, remaining - 1);
            assert_eq!(next.label, SessionLabel::Focusing);
        }

        let next = advance(Session::new(SessionLabel::OnBreak, 300));
        assert_eq!(next, Session::new(SessionLabel::OnBreak, 299));
    }

    #[test]
    fn test_advance_floors_at_zero() {
        let expired = Session::new(SessionLabel::OnBreak, 0);
        assert_eq!(advance(expired), expired);
        assert_eq!(advance(advance(expired)), expired);
    }

    #[test]
    fn test_transition_focusing_to_break() {
        let next = transition(Session::new(SessionLabel::Focusing, 0), 25, 5);
        assert_eq!(next.label, SessionLabel::OnBreak);
        assert_eq!(next.time_remaining, 300);
    }

    #[test]
    fn test_transition_break_to_focusing() {
        let next = transition(Session::new(SessionLabel::OnBreak, 0), 25, 5);
        assert_eq!(next.label, SessionLabel::Focusing);
        assert_eq!(next.time_remaining, 1500);
    }

    #[test]
    fn test_transition_uses_current_durations() {
        let next = transition(Session::new(SessionLabel::Focusing, 0), 60, 15);
        assert_eq!(next, Session::on_break(15));

        let next = transition(next_expired(next), 60, 15);
        assert_eq!(next, Session::focusing(60));
    }

    #[test]
    #[should_panic(expected = "still remaining")]
    #[cfg(debug_assertions)]
    fn test_transition_rejects_live_session() {
        let _ = transition(Session::new(SessionLabel::Focusing, 10), 25, 5);
    }

    #[test]
    fn test_label_display() {
        assert_eq!(SessionLabel::Focusing.to_string(), "Focusing");
        assert_eq!(SessionLabel::OnBreak.to_string(), "On Break");
    }

    fn next_expired(session: Session) -> Session {
        Session::new(session.label, 0)
    }
}
