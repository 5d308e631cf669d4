use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "pomo")]
#[command(about = "A Pomodoro timer for the terminal")]
#[command(long_about = "pomo - A Pomodoro timer for the terminal

Alternates focus sessions and breaks. Focus lasts 5-60 minutes (steps of 5),
breaks last 1-15 minutes. When a session runs out the terminal bell rings
(except with --output json) and the next session starts with its full
duration.

QUICK START:
  pomo                       Open the interactive timer
  pomo watch                 Headless countdown, one line per second
  pomo watch --focus 50 --break 10 --cycles 2
  pomo config show           Show the effective configuration

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      One JSON object per line for scripting")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Defaults to the `general.default_output` config value.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    #[command(flatten)]
    pub durations: DurationArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

/// Duration overrides shared by the timer commands.
#[derive(Args, Clone, Copy, Debug, Default)]
pub struct DurationArgs {
    /// Focus duration in minutes (5-60, clamped)
    #[arg(long, short = 'f', global = true, env = "POMO_FOCUS")]
    pub focus: Option<u32>,

    /// Break duration in minutes (1-15, clamped)
    #[arg(long = "break", short = 'b', global = true, env = "POMO_BREAK")]
    pub break_minutes: Option<u32>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive timer (default)
    ///
    /// Keys:
    ///   space/p   start or pause
    ///   s         stop and discard the session
    ///   f / F     focus duration -5 / +5 minutes
    ///   b / B     break duration -1 / +1 minute
    ///   ?         show key bindings
    ///   q/Esc     quit
    ///
    /// Durations can only be changed while the timer is stopped.
    #[command(alias = "t", verbatim_doc_comment)]
    Tui,

    /// Run the timer without a UI
    ///
    /// Starts a focus session immediately and prints the status once per
    /// second. Use Ctrl+C to quit.
    ///
    /// # Examples
    ///
    ///   pomo watch
    ///   pomo watch --cycles 4
    ///   pomo watch -o json | jq .remaining
    #[command(alias = "w")]
    Watch(WatchArgs),

    /// Inspect or create the configuration file
    Config(ConfigArgs),

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   pomo completions zsh > ~/.zsh/completions/_pomo
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for headless mode.
#[derive(Args, Clone, Copy, Debug, Default)]
pub struct WatchArgs {
    /// Stop after this many sessions have expired
    #[arg(long, short = 'c')]
    pub cycles: Option<u32>,

    /// Only print when a session expires
    #[arg(long, short = 'q')]
    pub quiet: bool,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

/// Config subcommands.
#[derive(Subcommand, Clone, Copy, Debug)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,

    /// Print the config file location
    Path,

    /// Write a default config file
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_no_subcommand() {
        let cli = Cli::try_parse_from(["pomo"]).unwrap();
        assert!(cli.command.is_none());
        assert!(cli.output.is_none());
        assert!(cli.durations.focus.is_none());
    }

    #[test]
    fn test_cli_tui_alias() {
        let cli = Cli::try_parse_from(["pomo", "t"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Tui)));
    }

    #[test]
    fn test_cli_watch_with_durations() {
        let cli =
            Cli::try_parse_from(["pomo", "watch", "--focus", "50", "--break", "10", "-c", "2"])
                .unwrap();
        assert_eq!(cli.durations.focus, Some(50));
        assert_eq!(cli.durations.break_minutes, Some(10));
        if let Some(Commands::Watch(args)) = cli.command {
            assert_eq!(args.cycles, Some(2));
            assert!(!args.quiet);
        } else {
            panic!("Expected Watch command");
        }
    }

    #[test]
    fn test_cli_output_json() {
        let cli = Cli::try_parse_from(["pomo", "watch", "-o", "json"]).unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
    }

    #[test]
    fn test_cli_config_init() {
        let cli = Cli::try_parse_from(["pomo", "config", "init", "--force"]).unwrap();
        if let Some(Commands::Config(args)) = cli.command {
            assert!(matches!(args.command, ConfigCommands::Init { force: true }));
        } else {
            panic!("Expected Config command");
        }
    }

    #[test]
    fn test_cli_completions() {
        let cli = Cli::try_parse_from(["pomo", "completions", "bash"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Completions { shell: Shell::Bash })
        ));
    }

    #[test]
    fn test_tui_help_documents_help_key() {
        use clap::CommandFactory;

        let mut cmd = Cli::command();
        let tui = cmd.find_subcommand_mut("tui").unwrap();
        let help = tui.render_long_help().to_string();
        assert!(help.contains("?         show key bindings"));
        assert!(help.contains("q/Esc     quit"));
    }

    #[test]
    fn test_cli_rejects_negative_duration() {
        assert!(Cli::try_parse_from(["pomo", "--focus", "-5"]).is_err());
    }

    #[test]
    fn test_output_format_default() {
        assert!(matches!(OutputFormat::default(), OutputFormat::Pretty));
    }
}
