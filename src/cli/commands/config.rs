//! Config command handler

use crate::args::ConfigSubcommand;
use nu_advisor::config::Config;
use std::io::{self, Write};

/// Keys accepted by `config get/set/unset`
const KEYS: [&str; 6] = [
    "level",
    "file",
    "verbose",
    "default_file",
    "submit_drafts",
    "reports_dir",
];

/// Dispatch config subcommands
pub fn run(subcommand: Option<ConfigSubcommand>, config: &mut Config, defaults: &Config) {
    let result = match subcommand {
        None => {
            show_all(config);
            Ok(())
        }
        Some(ConfigSubcommand::Get { key: None }) => {
            show_all(config);
            Ok(())
        }
        Some(ConfigSubcommand::Get { key: Some(key) }) => config
            .get(&key)
            .map(|value| println!("{value}"))
            .ok_or_else(|| unknown_key(&key)),
        Some(ConfigSubcommand::Set { key, value }) => config
            .set(&key, &value)
            .and_then(|()| persist(config))
            .map(|()| println!("✓ Set {key} = {value}")),
        Some(ConfigSubcommand::Unset { key }) => config
            .unset(&key, defaults)
            .and_then(|()| persist(config))
            .map(|()| println!("✓ Reset {key} to default")),
        Some(ConfigSubcommand::Reset) => reset(),
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn show_all(config: &Config) {
    println!(
        "\n=== Configuration ({}) ===\n",
        Config::get_config_file_path().display()
    );
    print!("{config}");
}

fn unknown_key(key: &str) -> String {
    format!("Unknown config key: '{key}' (expected one of: {})", KEYS.join(", "))
}

fn persist(config: &Config) -> Result<(), String> {
    config
        .save()
        .map_err(|e| format!("Failed to save config: {e}"))
}

fn reset() -> Result<(), String> {
    if !Config::get_config_file_path().exists() {
        println!("✓ Config is already at defaults");
        return Ok(());
    }

    print!("Are you sure you want to reset config to defaults? (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    io::stdin().read_line(&mut response).ok();

    if matches!(response.trim().to_ascii_lowercase().as_str(), "y" | "yes") {
        Config::reset().map_err(|e| format!("Failed to remove config file: {e}"))?;
        println!("✓ Config reset to defaults");
    } else {
        println!("✗ Reset cancelled");
    }
    Ok(())
}
