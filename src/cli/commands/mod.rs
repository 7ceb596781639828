//! CLI command handlers for `NuAdvisor`.
//!
//! This module provides handlers for various CLI subcommands.
//! Each command is implemented in its own submodule.

pub mod config;
pub mod review;
pub mod validate;

use nu_advisor::config::Config;
use std::path::PathBuf;

/// Pick the advising file: explicit argument first, then config `default_file`
///
/// Prints an error and returns `None` when neither is set.
pub fn resolve_input(file: Option<PathBuf>, config: &Config) -> Option<PathBuf> {
    if let Some(file) = file {
        return Some(file);
    }
    if config.advising.default_file.is_empty() {
        eprintln!("✗ No advising file given and config `default_file` is not set");
        return None;
    }
    Some(PathBuf::from(&config.advising.default_file))
}
