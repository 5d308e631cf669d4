use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;

use pomo::cli::args::{Cli, Commands};
use pomo::cli::commands;
use pomo::config::{Config, Paths};
use pomo::features::pomodoro::{Alert, Pomodoro, Silent, TerminalBell};
use pomo::logging;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {e:#}", "error".red().bold());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let paths = Paths::new()?;
    let config = Config::load_from_path(&paths.config_file).context("loading configuration")?;
    config.general.color.apply();

    let command = cli.command.unwrap_or(Commands::Tui);
    if !matches!(command, Commands::Completions { .. }) {
        init_logging(&paths, &config);
    }
    tracing::debug!(?paths, "starting");

    let format = cli.output.unwrap_or(config.general.default_output);
    let durations = commands::resolve_durations(config.timer.timer_config(), cli.durations);

    let output = match command {
        Commands::Tui => {
            let alert: Box<dyn Alert> = if config.timer.alert {
                Box::new(TerminalBell::new(std::io::stdout()))
            } else {
                Box::new(Silent)
            };
            pomo::tui::run(Pomodoro::new(durations), alert)?;
            String::new()
        }
        Commands::Watch(args) => {
            // Status lines own stdout; the bell goes to stderr
            let mut alert: Box<dyn Alert> = if config.timer.alert {
                Box::new(TerminalBell::new(std::io::stderr()))
            } else {
                Box::new(Silent)
            };
            let mut stdout = std::io::stdout().lock();
            commands::watch(
                Pomodoro::new(durations),
                args,
                format,
                &mut stdout,
                alert.as_mut(),
                std::thread::sleep,
            )?;
            String::new()
        }
        Commands::Config(args) => {
            commands::config(&paths, &config, cli.durations, args.command, format)?
        }
        Commands::Completions { shell } => commands::completions(shell)?,
    };

    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

/// Set up file logging, warning on stderr when it cannot be enabled.
fn init_logging(paths: &Paths, config: &Config) {
    let result = paths
        .ensure_dirs()
        .and_then(|()| logging::init(&paths.log_file, &config.log.level));
    if let Err(e) = result {
        eprintln!("{}: logging disabled: {e}", "warning".yellow().bold());
    }
}
