//! Progress and time formatting for the current session.

use super::durations::TimerConfig;
use super::session::Session;

/// Percentage of the session that has elapsed, between 0 and 100.
///
/// The configured length for the session's label is the denominator, so a
/// session that outlives a shortened duration reads as 0 rather than going
/// negative.
#[must_use]
pub fn progress_percent(session: &Session, config: &TimerConfig) -> f64 {
    // Never zero: durations are clamped to at least one minute
    let configured = f64::from(config.seconds_for(session.label));
    let remaining = f64::from(session.time_remaining);
    ((configured - remaining) / configured * 100.0).clamp(0.0, 100.0)
}

/// Format whole minutes as `MM:00`.
#[must_use]
pub fn minutes_to_duration(minutes: u32) -> String {
    format!("{minutes:02}:00")
}

/// Format seconds as `MM:SS`.
#[must_use]
pub fn seconds_to_duration(seconds: u32) -> String {
    let minutes = seconds / 60;
    let seconds = seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}

/// Heading for a session, e.g. `Focusing for 25:00 minutes`.
#[must_use]
pub fn session_title(session: &Session, config: &TimerConfig) -> String {
    format!(
        "{} for {} minutes",
        session.label,
        minutes_to_duration(config.minutes_for(session.label))
    )
}

/// Line under the heading, e.g. `24:59 remaining`.
#[must_use]
pub fn session_subtitle(session: &Session) -> String {
    format!("{} remaining", seconds_to_duration(session.time_remaining))
}

/// Render a progress bar from a percentage.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn render_progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64) as usize;
    let empty = width.saturating_sub(filled);

    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::pomodoro::session::SessionLabel;

    #[test]
    fn test_progress_at_start_and_end() {
        let config = TimerConfig::new(25, 5);

        let fresh = Session::focusing(25);
        assert!(progress_percent(&fresh, &config).abs() < f64::EPSILON);

        let done = Session::new(SessionLabel::Focusing, 0);
        assert!((progress_percent(&done, &config) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_progress_uses_label_duration() {
        let config = TimerConfig::new(25, 5);

        let half_break = Session::new(SessionLabel::OnBreak, 150);
        assert!((progress_percent(&half_break, &config) - 50.0).abs() < 0.001);

        let quarter_focus = Session::new(SessionLabel::Focusing, 1125);
        assert!((progress_percent(&quarter_focus, &config) - 25.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_is_clamped() {
        // 60 minutes left against a 25 minute focus setting
        let config = TimerConfig::new(25, 5);
        let session = Session::new(SessionLabel::Focusing, 3600);
        assert!(progress_percent(&session, &config).abs() < f64::EPSILON);
    }

    #[test]
    fn test_minutes_to_duration() {
        assert_eq!(minutes_to_duration(5), "05:00");
        assert_eq!(minutes_to_duration(25), "25:00");
        assert_eq!(minutes_to_duration(60), "60:00");
    }

    #[test]
    fn test_seconds_to_duration() {
        assert_eq!(seconds_to_duration(1500), "25:00");
        assert_eq!(seconds_to_duration(90), "01:30");
        assert_eq!(seconds_to_duration(0), "00:00");
    }

    #[test]
    fn test_session_titles() {
        let config = TimerConfig::new(25, 5);
        assert_eq!(
            session_title(&Session::focusing(25), &config),
            "Focusing for 25:00 minutes"
        );
        assert_eq!(
            session_title(&Session::on_break(5), &config),
            "On Break for 05:00 minutes"
        );
        assert_eq!(
            session_subtitle(&Session::new(SessionLabel::OnBreak, 119)),
            "01:59 remaining"
        );
    }

    #[test]
    fn test_render_progress_bar() {
        let bar = render_progress_bar(50.0, 10);
        assert!(bar.contains("█████"));
        assert!(bar.contains("░░░░░"));

        assert_eq!(render_progress_bar(0.0, 4), "[░░░░]");
        assert_eq!(render_progress_bar(150.0, 4), "[████]");
    }
}
