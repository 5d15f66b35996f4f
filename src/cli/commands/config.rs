//! Config command handler

use crate::args::ConfigSubcommand;
use roster::config::Config;
use std::io::{self, BufRead, Write};

/// Dispatch config subcommands. Exits with status 1 when a handler fails.
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    let result = match subcommand {
        None => handle_get(config, None),
        Some(ConfigSubcommand::Get { key }) => handle_get(config, key.as_deref()),
        Some(ConfigSubcommand::Set { key, value }) => handle_set(config, &key, &value),
        Some(ConfigSubcommand::Unset { key }) => handle_unset(config, defaults, &key),
        Some(ConfigSubcommand::Reset) => handle_reset(&mut io::stdin().lock()),
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Print one value, or the whole configuration when `key` is `None`
fn handle_get(config: &Config, key: Option<&str>) -> Result<(), String> {
    match key {
        Some(k) => {
            let value = config
                .get(k)
                .ok_or_else(|| format!("Unknown config key: '{k}'"))?;
            println!("{value}");
        }
        None => {
            println!("\n=== Configuration ===\n");
            print!("{config}");
        }
    }
    Ok(())
}

fn handle_set(config: &mut Config, key: &str, value: &str) -> Result<(), String> {
    config.set(key, value)?;
    save(config)?;
    println!("✓ Set {key} = {value}");
    Ok(())
}

fn handle_unset(config: &mut Config, defaults: &Config, key: &str) -> Result<(), String> {
    config.unset(key, defaults)?;
    save(config)?;
    println!("✓ Reset {key} to default");
    Ok(())
}

fn save(config: &Config) -> Result<(), String> {
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))
}

/// Delete the config file after a y/yes answer read from `input`
fn handle_reset(input: &mut impl BufRead) -> Result<(), String> {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }

    if !confirm(
        "Are you sure you want to reset config to defaults? (y/n): ",
        input,
    ) {
        println!("✗ Reset cancelled");
        return Ok(());
    }

    Config::reset().map_err(|e| format!("Failed to remove config file: {e}"))?;
    println!("✓ Config reset to defaults");
    Ok(())
}

fn confirm(prompt: &str, input: &mut impl BufRead) -> bool {
    print!("{prompt}");
    io::stdout().flush().ok();

    let mut response = String::new();
    if input.read_line(&mut response).is_err() {
        return false;
    }
    matches!(response.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}
