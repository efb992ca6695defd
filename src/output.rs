//! Console output styling.
//!
//! Colors are applied only when stdout is a TTY; otherwise messages fall
//! back to plain text with the same markers so output stays greppable in
//! CI logs.

use colored::Colorize;

/// Output styling configuration.
pub struct OutputStyle {
    pub use_colors: bool,
}

impl Default for OutputStyle {
    fn default() -> Self {
        Self {
            use_colors: atty::is(atty::Stream::Stdout),
        }
    }
}

impl OutputStyle {
    /// Format a success message.
    pub fn success(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "✓".green().bold(), msg)
        } else {
            format!("✓ {}", msg)
        }
    }

    /// Format an error message.
    #[allow(dead_code)]
    pub fn error(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "✗".red().bold(), msg)
        } else {
            format!("✗ {}", msg)
        }
    }

    /// Format a warning message.
    pub fn warning(&self, msg: &str) -> String {
        if self.use_colors {
            format!("{} {}", "⚠".yellow(), msg)
        } else {
            format!("⚠ {}", msg)
        }
    }

    /// Format an informational message.
    pub fn info(&self, msg: &str) -> String {
        if self.use_colors {
            msg.blue().to_string()
        } else {
            msg.to_string()
        }
    }

    /// Format an interactive prompt.
    pub fn prompt(&self, question: &str) -> String {
        if self.use_colors {
            format!("{} ", question.cyan().bold())
        } else {
            format!("{} ", question)
        }
    }
}
