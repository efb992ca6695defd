//! Interactive stdin prompting.
//!
//! Used by `init` when running on a TTY without `--yes`. Every question
//! carries a default so pressing Enter always produces a usable value.

use crate::error::{MetaError, Result};
use crate::output::OutputStyle;
use std::io::{self, BufRead, Write};

/// Ask a question and return the answer, falling back to `default` on an
/// empty line.
pub fn prompt_default(style: &OutputStyle, question: &str, default: &str) -> Result<String> {
    let answer = read_answer(style, &format!("{} [{}]:", question, default))?;
    if answer.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(answer)
    }
}

/// Ask a yes/no question. An empty answer returns `default`.
pub fn confirm(style: &OutputStyle, question: &str, default: bool) -> Result<bool> {
    let hint = if default { "Y/n" } else { "y/N" };
    loop {
        let answer = read_answer(style, &format!("{} [{}]:", question, hint))?;
        match answer.to_lowercase().as_str() {
            "" => return Ok(default),
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => println!("Please answer 'y' or 'n'."),
        }
    }
}

fn read_answer(style: &OutputStyle, question: &str) -> Result<String> {
    print!("{}", style.prompt(question));
    io::stdout()
        .flush()
        .map_err(|e| MetaError::UserError(format!("failed to flush stdout: {}", e)))?;

    let mut input = String::new();
    io::stdin()
        .lock()
        .read_line(&mut input)
        .map_err(|e| MetaError::UserError(format!("failed to read input: {}", e)))?;

    Ok(input.trim().to_string())
}
