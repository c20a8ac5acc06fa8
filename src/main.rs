//! Solar panel data service entry point
//!
//! Parses CLI arguments, dispatches to the CLI module and exits non-zero
//! on failure. All logic is delegated to the CLI module.

use solar_panel_data::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
