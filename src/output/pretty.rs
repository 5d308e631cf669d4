//! Human-readable output formatting for pomo.

use colored::Colorize;

use crate::features::pomodoro::{
    minutes_to_duration, render_progress_bar, session_subtitle, session_title, Pomodoro,
    SessionLabel,
};

const BAR_WIDTH: usize = 20;

/// Format the timer as one status line.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn format_status_pretty(pomodoro: &Pomodoro) -> String {
    let config = pomodoro.config();

    let Some(session) = pomodoro.session() else {
        return format!(
            "{}  focus {}  break {}",
            "Stopped".dimmed(),
            minutes_to_duration(config.focus_duration_minutes()),
            minutes_to_duration(config.break_duration_minutes()),
        );
    };

    let title = session_title(session, config);
    let title = match session.label {
        SessionLabel::Focusing => title.red().bold(),
        SessionLabel::OnBreak => title.green().bold(),
    };

    let percent = pomodoro.progress_percent().unwrap_or_default();
    let mut line = format!(
        "{title}  {}  {} {:>3}%",
        session_subtitle(session),
        render_progress_bar(percent, BAR_WIDTH),
        percent.round() as u8,
    );

    if !pomodoro.is_running() {
        line.push_str(&format!("  {}", "PAUSED".yellow()));
    }

    line
}

/// Format the banner printed when a session runs out.
#[must_use]
pub fn format_expired_pretty(previous: SessionLabel, pomodoro: &Pomodoro) -> String {
    let next = pomodoro
        .session()
        .map_or_else(String::new, |s| session_title(s, pomodoro.config()));
    format!("⏰ {previous} finished. {next}").bold().to_string()
}
