//! Integration tests for logger behavior.

use nu_advisor::logger::{init_file_logging, set_level, set_level_from_str, Level};
use nu_advisor::{debug, error, info, warn};
use tempfile::TempDir;

#[test]
fn level_parse_accepts_valid() {
    assert!(set_level_from_str("error"));
    assert!(set_level_from_str("warn"));
    assert!(set_level_from_str("info"));
    assert!(set_level_from_str("debug"));
}

#[test]
fn level_parse_rejects_invalid() {
    assert!(!set_level_from_str("invalid"));
    assert!(!set_level_from_str(""));
}

#[test]
fn logs_do_not_panic() {
    set_level(Level::Debug);
    info!("info integration");
    warn!("warn integration");
    error!("error integration");
    debug!("debug integration");
}

#[test]
fn file_logging_creates_parent_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("logs").join("nuadvisor.log");

    assert!(init_file_logging(&path));
    assert!(path.parent().is_some_and(std::path::Path::exists));
}
