//! Command-line interface module.
//!
//! CLI structure and command handlers for the recital binary.

mod commands;
mod run;

pub use commands::{Cli, Commands};
pub use run::{ReportOptions, run_report};
