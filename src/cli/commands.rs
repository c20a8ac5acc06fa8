//! CLI command implementations

use std::path::Path;

use crate::http_server::config::DEFAULT_ENV_FILE;
use crate::http_server::{HttpServer, HttpServerConfig};
use crate::observability::{init_tracing, LogFormat};

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    run_command(Cli::parse_args().command)
}

pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Serve { addr, log_format } => serve(addr.as_deref(), log_format),
    }
}

/// Start the HTTP server and block until it shuts down
pub fn serve(addr: Option<&str>, log_format: LogFormat) -> CliResult<()> {
    // the env file may carry RUST_LOG, so it is loaded before the subscriber
    let config = HttpServerConfig::load(addr, Path::new(DEFAULT_ENV_FILE))?;
    init_tracing(log_format);
    tracing::debug!(addr = %config.socket_addr(), "resolved server configuration");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::boot_failed(format!("Failed to start runtime: {}", e)))?;

    runtime.block_on(HttpServer::with_config(config).start())?;
    Ok(())
}
