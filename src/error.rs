//! Error types for pomo.

use thiserror::Error;

/// Errors surfaced by the command line and terminal front ends.
///
/// The timer logic itself never fails; these cover configuration, the
/// terminal and output.
#[derive(Debug, Error)]
pub enum PomoError {
    /// Configuration could not be located, read or parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// Terminal setup, drawing or input failed.
    #[error("terminal error: {0}")]
    Terminal(String),

    /// Output could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A command line value was rejected.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for PomoError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialization(e.to_string())
    }
}
