//! Core module: domain models, the review workflow, and the supporting services

pub mod advising;
pub mod catalog;
pub mod config;
pub mod models;
pub mod report;
pub mod services;

/// Returns the current version of the `NuAdvisor` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
