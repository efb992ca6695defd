//! Import statement insertion.

use super::patterns::LayoutPatterns;

/// Insert `import_line` into `content`, preserving existing import order.
///
/// The new line goes immediately after the last existing import statement,
/// or at the very start of the file when there are none. `import_line`
/// must not carry its own trailing newline.
pub fn insert_import(content: &str, import_line: &str, patterns: &LayoutPatterns) -> String {
    match patterns.last_import_end(content) {
        Some(end) => format!("{}\n{}{}", &content[..end], import_line, &content[end..]),
        None => format!("{}\n{}", import_line, content),
    }
}
