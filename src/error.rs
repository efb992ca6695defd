//! Error types for the next-metadata CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.
//!
//! Two outcomes that look like errors deliberately are not: the absence of a
//! patchable layout file is reported as `Ok(None)` by the patcher, and a
//! declaration-pattern mismatch selects the additive fallback strategy
//! instead of propagating.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for next-metadata operations.
///
/// Each variant maps to a specific exit code.
#[derive(Error, Debug)]
pub enum MetaError {
    /// User provided invalid arguments or the environment is not usable.
    #[error("{0}")]
    UserError(String),

    /// The metadata template could not be loaded.
    #[error("failed to read template: {0}")]
    TemplateRead(String),

    /// An existing file could not be read.
    #[error("failed to read file: {0}")]
    FileRead(String),

    /// A file could not be written.
    #[error("failed to write file: {0}")]
    FileWrite(String),
}

impl MetaError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            MetaError::UserError(_) => exit_codes::USER_ERROR,
            MetaError::TemplateRead(_) => exit_codes::TEMPLATE_FAILURE,
            MetaError::FileRead(_) => exit_codes::IO_FAILURE,
            MetaError::FileWrite(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for next-metadata operations.
pub type Result<T> = std::result::Result<T, MetaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = MetaError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn template_read_has_correct_exit_code() {
        let err = MetaError::TemplateRead("no such file".to_string());
        assert_eq!(err.exit_code(), exit_codes::TEMPLATE_FAILURE);
    }

    #[test]
    fn io_errors_have_correct_exit_code() {
        let err = MetaError::FileRead("layout.tsx: permission denied".to_string());
        assert_eq!(err.exit_code(), exit_codes::IO_FAILURE);

        let err = MetaError::FileWrite("disk full".to_string());
        assert_eq!(err.exit_code(), exit_codes::IO_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = MetaError::TemplateRead("custom.js: not found".to_string());
        assert_eq!(err.to_string(), "failed to read template: custom.js: not found");

        let err = MetaError::UserError("not a Next.js project".to_string());
        assert_eq!(err.to_string(), "not a Next.js project");
    }
}
