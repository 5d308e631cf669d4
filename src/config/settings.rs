//! Configuration settings for pomo.
//!
//! Settings are loaded from `~/.pomo/config.yaml`.

use serde::{Deserialize, Serialize};

use crate::cli::args::OutputFormat;
use crate::error::PomoError;
use crate::features::pomodoro::durations::{
    BREAK_RANGE, DEFAULT_BREAK_MINUTES, DEFAULT_FOCUS_MINUTES, FOCUS_RANGE,
};
use crate::features::pomodoro::TimerConfig;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Timer settings.
    pub timer: TimerSettings,
    /// Logging settings.
    pub log: LogConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorSetting {
    /// Apply the setting to the `colored` crate's global override.
    pub fn apply(self) {
        match self {
            Self::Auto => colored::control::unset_override(),
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

/// Timer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TimerSettings {
    /// Initial focus duration in minutes (5-60).
    #[serde(default = "default_focus_duration")]
    pub focus_duration_minutes: u32,
    /// Initial break duration in minutes (1-15).
    #[serde(default = "default_break_duration")]
    pub break_duration_minutes: u32,
    /// Ring the terminal bell when a session ends.
    #[serde(default = "default_true")]
    pub alert: bool,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

const fn default_focus_duration() -> u32 {
    DEFAULT_FOCUS_MINUTES
}

const fn default_break_duration() -> u32 {
    DEFAULT_BREAK_MINUTES
}

const fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
        }
    }
}

impl Default for TimerSettings {
    fn default() -> Self {
        Self {
            focus_duration_minutes: default_focus_duration(),
            break_duration_minutes: default_break_duration(),
            alert: default_true(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl TimerSettings {
    /// Build the timer's durations, clamping values outside their bounds.
    #[must_use]
    pub fn timer_config(&self) -> TimerConfig {
        if !FOCUS_RANGE.contains(&self.focus_duration_minutes) {
            tracing::warn!(
                value = self.focus_duration_minutes,
                "focus_duration_minutes outside 5-60, clamping"
            );
        }
        if !BREAK_RANGE.contains(&self.break_duration_minutes) {
            tracing::warn!(
                value = self.break_duration_minutes,
                "break_duration_minutes outside 1-15, clamping"
            );
        }
        TimerConfig::new(self.focus_duration_minutes, self.break_duration_minutes)
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, PomoError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            PomoError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        serde_yaml::from_str(&contents).map_err(|e| {
            PomoError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), PomoError> {
        let contents = self.to_yaml()?;

        std::fs::write(path, contents).map_err(|e| {
            PomoError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Serialize to YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, PomoError> {
        serde_yaml::to_string(self)
            .map_err(|e| PomoError::Config(format!("Failed to serialize config: {e}")))
    }
}
