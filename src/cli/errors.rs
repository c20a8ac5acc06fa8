//! Failures that stop `solar_panel_data serve` before or while it listens.
//!
//! `main` prints the coded line to stderr and exits with status 1.

use std::fmt;
use std::io;

use crate::http_server::ConfigError;

/// Stable `SPD_CLI_*` tag printed ahead of the message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Bad `--addr`, `SERVER_ADDR` or `./config/.env`
    ConfigError,
    /// Listener could not bind, or serving stopped on a socket error
    IoError,
    /// Tokio runtime could not be built
    BootFailed,
}

impl CliErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "SPD_CLI_CONFIG_ERROR",
            Self::IoError => "SPD_CLI_IO_ERROR",
            Self::BootFailed => "SPD_CLI_BOOT_FAILED",
        }
    }
}

/// Startup failure with its tag
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    pub fn boot_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::BootFailed, msg)
    }

    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Human-readable part, without the tag
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::config_error(e.to_string())
    }
}

pub type CliResult<T> = Result<T, CliError>;
