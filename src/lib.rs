//! Shared library for `NuAdvisor`
//! Academic plan validation and the advisor review workflow, used by the CLI.

pub mod core;
pub mod logger;

pub use crate::core::*;
