//! Command-line interface entry point for `roster`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use roster::config::Config;
use roster::info;
use roster::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config; otherwise use config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| Level::parse(&config.logging.level))
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    if !config.logging.file.is_empty() {
        let log_path = std::path::PathBuf::from(&config.logging.file);
        let display_path = log_path.to_string_lossy();
        if init_file_logging(&log_path) {
            info!("File logging initialized at: {display_path}");
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    match args.command {
        Some(Command::Config { subcommand }) => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Some(Command::Report {
            input_file,
            output,
            save,
            ..
        }) => {
            commands::report::run(input_file.as_deref(), output.as_deref(), save, &config);
        }
        None => commands::report::run(args.input_file.as_deref(), None, false, &config),
    }
}
