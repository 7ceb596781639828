//! Command-line interface entry point for `NuAdvisor`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use nu_advisor::config::Config;
use nu_advisor::info;
use nu_advisor::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use std::path::PathBuf;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config; otherwise use config logging.level; fallback warn
    let effective_level = args
        .log_level
        .map(std::convert::Into::into)
        .or_else(|| Level::parse(&config.logging.level))
        .unwrap_or(Level::Warn);

    let mut level = effective_level;
    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // CLI flag wins, otherwise use config logging.file if set
    let config_log_path: Option<PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
            ExitCode::SUCCESS
        }
        Command::Validate { file, plan } => {
            let Some(path) = commands::resolve_input(file, &config) else {
                return ExitCode::FAILURE;
            };
            commands::validate::run(&path, plan)
        }
        Command::Review {
            file,
            report,
            output,
        } => {
            let Some(path) = commands::resolve_input(file, &config) else {
                return ExitCode::FAILURE;
            };
            let output_dir = output.unwrap_or_else(|| PathBuf::from(&config.paths.reports_dir));
            commands::review::run(
                &path,
                report.as_deref(),
                &output_dir,
                config.advising.submit_drafts,
            )
        }
    }
}
