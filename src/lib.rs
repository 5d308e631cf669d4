//! pomo - A Pomodoro timer for the terminal
//!
//! Alternates focus sessions and breaks, driven by a one-second tick. The
//! session logic lives in [`features::pomodoro`] as pure functions; the TUI
//! and headless `watch` command are thin drivers around it.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod features;
pub mod logging;
pub mod output;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::PomoError;
pub use features::pomodoro::{Pomodoro, Session, SessionLabel, TimerConfig};
