//! Target language dialect for generated and patched files.

use std::path::Path;

/// Whether generated/patched code targets a typed or untyped source variant.
///
/// The dialect decides the generated module's file extension, whether the
/// renderer injects a type-declaration block, and whether the patched layout
/// re-export carries a type annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Dialect {
    /// Plain JavaScript.
    #[default]
    Untyped,
    /// TypeScript.
    Typed,
}

impl Dialect {
    /// File extension for the generated metadata module.
    pub fn module_extension(&self) -> &'static str {
        match self {
            Dialect::Untyped => "js",
            Dialect::Typed => "ts",
        }
    }

    /// Detect the dialect of a layout file purely from its extension.
    ///
    /// A typed-extension suffix (`.tsx` or `.ts`) means Typed; anything
    /// else, including a missing extension, means Untyped.
    pub fn from_layout_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("tsx") | Some("ts") => Dialect::Typed,
            _ => Dialect::Untyped,
        }
    }

    /// True when this is the typed dialect.
    pub fn is_typed(&self) -> bool {
        matches!(self, Dialect::Typed)
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::Untyped => write!(f, "JavaScript"),
            Dialect::Typed => write!(f, "TypeScript"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn module_extensions() {
        assert_eq!(Dialect::Untyped.module_extension(), "js");
        assert_eq!(Dialect::Typed.module_extension(), "ts");
    }

    #[test]
    fn detects_typed_from_tsx() {
        let path = PathBuf::from("app/layout.tsx");
        assert_eq!(Dialect::from_layout_path(&path), Dialect::Typed);
    }

    #[test]
    fn detects_untyped_from_js() {
        let path = PathBuf::from("src/app/layout.js");
        assert_eq!(Dialect::from_layout_path(&path), Dialect::Untyped);
    }

    #[test]
    fn missing_extension_is_untyped() {
        let path = PathBuf::from("app/layout");
        assert_eq!(Dialect::from_layout_path(&path), Dialect::Untyped);
    }

    #[test]
    fn display_names() {
        assert_eq!(Dialect::Untyped.to_string(), "JavaScript");
        assert_eq!(Dialect::Typed.to_string(), "TypeScript");
    }

    #[test]
    fn jsx_is_untyped() {
        let path = PathBuf::from("app/layout.jsx");
        assert_eq!(Dialect::from_layout_path(&path), Dialect::Untyped);
    }
}
