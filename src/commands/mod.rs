//! Command implementations for next-metadata.

mod init;

use crate::cli::{Command, InitArgs};
use crate::error::Result;

/// Dispatch a command to its implementation.
///
/// Invoking the binary with no subcommand runs `init` with defaults, which
/// prompts interactively on a terminal.
pub fn dispatch(command: Option<Command>) -> Result<()> {
    match command {
        Some(Command::Init(args)) => init::cmd_init(args),
        None => init::cmd_init(InitArgs::default()),
    }
}
