//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::PomoError;

/// Action to take after handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start, pause or resume the timer.
    PlayPause,
    /// Stop the timer.
    Stop,
    /// Add five minutes of focus.
    FocusPlus,
    /// Remove five minutes of focus.
    FocusMinus,
    /// Add a minute of break.
    BreakPlus,
    /// Remove a minute of break.
    BreakMinus,
    /// Show key bindings.
    Help,
}

/// Wait up to `timeout` for a terminal event.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(timeout: Duration) -> Result<Option<Action>, PomoError> {
    if event::poll(timeout)
        .map_err(|e| PomoError::Terminal(format!("Event poll failed: {e}")))?
    {
        if let Event::Key(key) = event::read()
            .map_err(|e| PomoError::Terminal(format!("Event read failed: {e}")))?
        {
            return Ok(map_key(key));
        }
    }

    Ok(None)
}

/// Map a key press to an action.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(' ' | 'p') | KeyCode::Enter => Some(Action::PlayPause),
        KeyCode::Char('s') => Some(Action::Stop),
        KeyCode::Char('F' | '+') | KeyCode::Up => Some(Action::FocusPlus),
        KeyCode::Char('f' | '-') | KeyCode::Down => Some(Action::FocusMinus),
        KeyCode::Char('B') | KeyCode::Right => Some(Action::BreakPlus),
        KeyCode::Char('b') | KeyCode::Left => Some(Action::BreakMinus),
        KeyCode::Char('?') => Some(Action::Help),
        _ => None,
    }
}
