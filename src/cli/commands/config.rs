//! Config command implementation.

use colored::Colorize;

use super::resolve_durations;
use crate::cli::args::{ConfigCommands, DurationArgs, OutputFormat};
use crate::config::{Config, Paths};
use crate::error::PomoError;
use crate::output::to_json;

/// Execute config subcommands.
///
/// `show` prints the configuration the timer would run with, so duration
/// overrides from the command line are applied (and clamped) first.
///
/// # Errors
///
/// Returns an error if the config file cannot be written or output
/// formatting fails.
pub fn config(
    paths: &Paths,
    config: &Config,
    overrides: DurationArgs,
    cmd: ConfigCommands,
    format: OutputFormat,
) -> Result<String, PomoError> {
    match cmd {
        ConfigCommands::Show => {
            let effective = effective_config(config, overrides);
            match format {
                OutputFormat::Json => to_json(&effective),
                OutputFormat::Pretty => effective.to_yaml(),
            }
        }
        ConfigCommands::Path => Ok(paths.config_file.display().to_string()),
        ConfigCommands::Init { force } => init(paths, force, format),
    }
}

/// Config with timer durations as the timer would use them.
fn effective_config(config: &Config, overrides: DurationArgs) -> Config {
    let durations = resolve_durations(config.timer.timer_config(), overrides);
    let mut effective = config.clone();
    effective.timer.focus_duration_minutes = durations.focus_duration_minutes();
    effective.timer.break_duration_minutes = durations.break_duration_minutes();
    effective
}

fn init(paths: &Paths, force: bool, format: OutputFormat) -> Result<String, PomoError> {
    if paths.config_file.exists() && !force {
        return Err(PomoError::Config(format!(
            "{} already exists. Use --force to overwrite it.",
            paths.config_file.display()
        )));
    }

    paths.ensure_dirs()?;
    Config::default().save_to_path(&paths.config_file)?;
    tracing::info!(path = %paths.config_file.display(), "wrote default config");

    match format {
        OutputFormat::Json => to_json(&serde_json::json!({
            "written": paths.config_file,
        })),
        OutputFormat::Pretty => Ok(format!(
            "{} {}",
            "Wrote".green(),
            paths.config_file.display()
        )),
    }
}
