//! CLI module for the solar panel data service
//!
//! Provides command-line interface for:
//! - serve: Start the HTTP server

mod args;
mod commands;
mod errors;

pub use args::{Cli, Command};
pub use commands::{run, run_command, serve};
pub use errors::{CliError, CliErrorCode, CliResult};
