//! Startup helpers and fatal error handling.
//!
//! This module provides startup helpers shared by the binary: CLI parsing
//! and fatal error reporting.

/// Handle a fatal startup error.
///
/// Prints to stderr and exits with code 1.
pub fn handle_error(error: anyhow::Error) -> ! {
    eprintln!();
    eprintln!("Error starting Orca:");
    eprintln!("{error:#}");
    eprintln!();
    eprintln!("Try running with --help for usage information.");
    std::process::exit(1);
}

/// Parse command line arguments.
pub fn get_cli_args() -> crate::core::config::CliArgs {
    use clap::Parser;
    crate::core::config::CliArgs::parse()
}
