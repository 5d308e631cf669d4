//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

use crate::features::pomodoro::{
    minutes_to_duration, session_subtitle, session_title, SessionLabel,
};
use crate::tui::app::{App, HELP};

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    // Create layout: durations, session, progress, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Durations
            Constraint::Length(4), // Session
            Constraint::Length(3), // Progress
            Constraint::Min(0),
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_durations(frame, app, chunks[0]);
    render_session(frame, app, chunks[1]);
    render_progress(frame, app, chunks[2]);
    render_status_bar(frame, app, chunks[4]);
}

/// Render the configured durations.
fn render_durations(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let config = app.pomodoro.config();
    let locked = app.pomodoro.is_active();
    let value_style = if locked {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let line = Line::from(vec![
        Span::raw(" Focus Duration: "),
        Span::styled(
            minutes_to_duration(config.focus_duration_minutes()),
            value_style,
        ),
        Span::raw("    Break Duration: "),
        Span::styled(
            minutes_to_duration(config.break_duration_minutes()),
            value_style,
        ),
    ]);

    let header = Paragraph::new(line).block(
        Block::default()
            .title(" pomo ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(header, area);
}

/// Render the session title and remaining time.
fn render_session(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let config = app.pomodoro.config();

    let lines = match app.pomodoro.session() {
        Some(session) => {
            let color = label_color(session.label);
            let mut subtitle = vec![Span::raw(session_subtitle(session))];
            if !app.pomodoro.is_running() {
                subtitle.push(Span::styled(
                    "  PAUSED",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ));
            }
            vec![
                Line::from(Span::styled(
                    session_title(session, config),
                    Style::default().fg(color).add_modifier(Modifier::BOLD),
                )),
                Line::from(subtitle),
            ]
        }
        None => vec![Line::from(Span::styled(
            "Press space to start focusing",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}

/// Render the progress gauge.
fn render_progress(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let (Some(session), Some(percent)) =
        (app.pomodoro.session(), app.pomodoro.progress_percent())
    else {
        return;
    };

    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL))
        .gauge_style(Style::default().fg(label_color(session.label)))
        .ratio(percent / 100.0)
        .label(format!("{percent:.0}%"));

    frame.render_widget(gauge, area);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let status_text = app.status.as_deref().unwrap_or(HELP);

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}

const fn label_color(label: SessionLabel) -> Color {
    match label {
        SessionLabel::Focusing => Color::Red,
        SessionLabel::OnBreak => Color::Green,
    }
}
