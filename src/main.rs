//! next-metadata: scaffold a Next.js SEO metadata module and wire it into
//! the app layout.
//!
//! This is the main entry point for the `next-metadata` CLI. It parses
//! arguments, dispatches to the appropriate command handler, and handles
//! errors with proper exit codes.

mod cli;
mod commands;
pub mod context;
pub mod dialect;
pub mod error;
pub mod exit_codes;
pub mod fs;
pub mod output;
pub mod patch;
pub mod prompt;
pub mod render;
#[cfg(test)]
mod test_support;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match commands::dispatch(cli.command) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
