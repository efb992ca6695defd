//! Exit code constants for the next-metadata CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, not a Next.js project)
//! - 2: Template read failure
//! - 3: File I/O failure (read or write)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or the current directory is not a Next.js project.
pub const USER_ERROR: i32 = 1;

/// The metadata template could not be loaded.
pub const TEMPLATE_FAILURE: i32 = 2;

/// A file read or write failed.
pub const IO_FAILURE: i32 = 3;
