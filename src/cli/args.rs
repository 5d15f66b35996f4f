//! CLI argument definitions for `roster`

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use roster::config::ConfigOverrides;
use roster::logger::Level;

/// CLI log level argument
///
/// Converts to lowercase strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    Get {
        /// Optional configuration key to display (e.g., `level`, `input_file`, `format`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Print the roster report for a student records file.
    ///
    /// Loads the records, moves the last one to the front, lists them, then
    /// lists them again sorted by GPA. This is also what runs when no
    /// subcommand is given.
    Report {
        /// Student records file (defaults to config `input_file`)
        #[arg(value_name = "FILE")]
        input_file: Option<PathBuf>,

        /// Write the report to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Write the report next to the input as `<name>_report.<ext>`
        #[arg(long, conflicts_with = "output")]
        save: bool,

        /// Report format: text or markdown (md). Defaults to config `format`.
        #[arg(short, long, value_name = "FORMAT")]
        format: Option<String>,

        /// Parse each line on its own so a malformed record cannot affect later ones
        #[arg(long)]
        isolate: bool,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "roster",
    about = "Student roster and tuition report",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Student records file reported on when no subcommand is given (defaults to config `input_file`)
    #[arg(value_name = "FILE")]
    pub input_file: Option<PathBuf>,

    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config default input file
    #[arg(long = "config-input", value_name = "FILE")]
    pub config_input: Option<PathBuf>,

    /// Override config report format
    #[arg(long = "config-format", value_name = "FORMAT")]
    pub config_format: Option<String>,

    /// Subcommand to execute. Without one, the report for the configured input file is printed.
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// `--log-file` and `--verbose` apply to this run only, like every override.
    /// Flags on the `report` subcommand (`--format`, `--isolate`) are folded in
    /// here too and take precedence over the global `--config-*` flags.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        let (report_format, isolate) = match &self.command {
            Some(Command::Report {
                format, isolate, ..
            }) => (format.clone(), isolate.then_some(true)),
            _ => (None, None),
        };

        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.verbose.then_some(true),
            input_file: self
                .config_input
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            isolate_records: isolate,
            format: report_format.or_else(|| self.config_format.clone()),
        }
    }
}
