//! Compiled layout pattern matching.
//!
//! The patcher works on semi-structured text with no guaranteed grammar, so
//! the declaration shapes it recognizes are scoped to a minimal,
//! well-documented set of regexes. Anything they miss falls through to the
//! additive fallback; a mismatch is never an error.

use crate::error::{MetaError, Result};
use regex::Regex;

/// The declaration name the layout must export.
pub const EXPORTED_NAME: &str = "metadata";

/// The binding the generated module is imported under. Distinct from
/// [`EXPORTED_NAME`] so the re-export never references itself.
pub const IMPORTED_BINDING: &str = "siteMetadata";

/// Type annotation applied to the re-export in typed layouts.
pub const METADATA_TYPE: &str = "Metadata";

/// Compiled patterns for locating and classifying layout declarations.
///
/// Compile once per patch run via [`LayoutPatterns::for_module`].
pub struct LayoutPatterns {
    /// `export const metadata[: Type] = { ... };` — an exported object
    /// literal, optionally type-annotated, non-greedy to the nearest `};`.
    /// A body containing an inner `};` (e.g. an arrow function) truncates
    /// the match; the unmatched remainder is preserved by the caller, which
    /// bounds the damage of this known limitation.
    declaration: Regex,
    /// The re-export this tool itself writes: `export const
    /// metadata[: Type] = siteMetadata;`. Checked before `declaration` so a
    /// second run recognizes an already-patched file.
    reexport: Regex,
    /// Any `import ... from '...';` line.
    import_any: Regex,
    /// The import of our generated module specifically.
    import_module: Regex,
}

impl std::fmt::Debug for LayoutPatterns {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutPatterns")
            .field("declaration", &self.declaration.as_str())
            .field("reexport", &self.reexport.as_str())
            .field("import_any", &self.import_any.as_str())
            .field("import_module", &self.import_module.as_str())
            .finish()
    }
}

impl LayoutPatterns {
    /// Compile the patterns for a generated module with the given basename.
    pub fn for_module(module_basename: &str) -> Result<Self> {
        let annotation = r"(?:\s*:\s*[A-Za-z_$][\w$]*\s*)?";

        let declaration = compile(&format!(
            r"export\s+const\s+{EXPORTED_NAME}{annotation}\s*=\s*\{{[\s\S]*?\}}\s*;"
        ))?;
        let reexport = compile(&format!(
            r"export\s+const\s+{EXPORTED_NAME}{annotation}\s*=\s*{IMPORTED_BINDING}\s*;"
        ))?;
        let import_any = compile(r#"import\s+[^;\n]+?from\s+['"][^'"\n]+['"];?"#)?;
        let import_module = compile(&format!(
            r#"import\s+{IMPORTED_BINDING}\s+from\s+['"][^'"\n]*{}(?:\.[a-z]+)?['"];?"#,
            regex::escape(module_basename)
        ))?;

        Ok(Self {
            declaration,
            reexport,
            import_any,
            import_module,
        })
    }

    /// Byte range of the exported object-literal declaration, if present.
    pub fn declaration_span(&self, content: &str) -> Option<(usize, usize)> {
        self.declaration.find(content).map(|m| (m.start(), m.end()))
    }

    /// True when the content already carries this tool's re-export.
    pub fn is_already_patched(&self, content: &str) -> bool {
        self.reexport.is_match(content)
    }

    /// True when the content already imports the generated module.
    pub fn has_module_import(&self, content: &str) -> bool {
        self.import_module.is_match(content)
    }

    /// End offset of the last import statement, if any imports exist.
    pub fn last_import_end(&self, content: &str) -> Option<usize> {
        self.import_any.find_iter(content).last().map(|m| m.end())
    }
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern)
        .map_err(|e| MetaError::UserError(format!("invalid layout pattern '{}': {}", pattern, e)))
}
