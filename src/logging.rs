//! Log setup.
//!
//! The TUI owns the terminal, so log output is appended to a file instead of
//! stderr. `RUST_LOG` takes precedence over the configured level.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::PomoError;

/// Install the global subscriber writing to `log_file`.
///
/// # Errors
///
/// Returns an error if the log file cannot be opened or a subscriber is
/// already installed.
pub fn init(log_file: &Path, level: &str) -> Result<(), PomoError> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .map_err(|e| {
            PomoError::Config(format!(
                "Failed to open log file {}: {e}",
                log_file.display()
            ))
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| PomoError::Config(format!("Failed to initialize logging: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_log_file() {
        let temp_dir = TempDir::new().unwrap();
        let log_file = temp_dir.path().join("pomo.log");

        // Another test may already own the global subscriber
        let _ = init(&log_file, "debug");
        assert!(log_file.exists());
    }

    #[test]
    fn test_init_fails_in_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let log_file = temp_dir.path().join("missing").join("pomo.log");

        assert!(matches!(init(&log_file, "info"), Err(PomoError::Config(_))));
    }
}
