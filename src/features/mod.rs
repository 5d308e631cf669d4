//! Feature implementations for pomo.

pub mod pomodoro;
