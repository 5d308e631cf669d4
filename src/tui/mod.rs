//! Terminal User Interface (TUI) for pomo.
//!
//! Interactive Pomodoro timer built with ratatui and crossterm.

mod app;
mod cadence;
mod event;
mod ui;

pub use app::App;

use std::io;
use std::time::Instant;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::error::PomoError;
use crate::features::pomodoro::{Alert, Pomodoro};
use crate::tui::cadence::Cadence;

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(pomodoro: Pomodoro, alert: Box<dyn Alert>) -> Result<(), PomoError> {
    // Setup terminal
    enable_raw_mode()
        .map_err(|e| PomoError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| PomoError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| PomoError::Terminal(format!("Failed to create terminal: {e}")))?;

    // Create app state and run main loop
    let mut app = App::new(pomodoro, alert);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
///
/// Input is polled until the next one-second deadline; ticks only happen
/// while the timer runs.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), PomoError> {
    let mut cadence = Cadence::new(Instant::now());

    loop {
        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| PomoError::Terminal(format!("Failed to draw: {e}")))?;

        let timeout = cadence.timeout(app.pomodoro.is_running(), Instant::now());

        // Handle events
        if let Some(action) = event::handle_events(timeout)? {
            match action {
                event::Action::Quit => break,
                event::Action::PlayPause => {
                    app.play_pause();
                    cadence.reset(Instant::now());
                }
                event::Action::Stop => app.stop(),
                event::Action::FocusPlus => app.increase_focus(),
                event::Action::FocusMinus => app.decrease_focus(),
                event::Action::BreakPlus => app.increase_break(),
                event::Action::BreakMinus => app.decrease_break(),
                event::Action::Help => app.show_help(),
            }
        }

        while cadence.take_tick(app.pomodoro.is_running(), Instant::now()) {
            app.on_tick();
        }
    }

    Ok(())
}
