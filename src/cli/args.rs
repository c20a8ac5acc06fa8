//! CLI argument definitions using clap
//!
//! Commands:
//! - solar-panel-data serve [--addr <host:port>] [--log-format <pretty|json>]

use clap::{Parser, Subcommand};

use crate::observability::LogFormat;

/// Solar panel data CRUD service
#[derive(Parser, Debug)]
#[command(name = "solar-panel-data")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Listen address, overrides SERVER_ADDR
        #[arg(long)]
        addr: Option<String>,

        /// Log output format
        #[arg(long, default_value_t = LogFormat::Pretty)]
        log_format: LogFormat,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
