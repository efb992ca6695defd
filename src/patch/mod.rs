//! Idempotent layout patching.
//!
//! The patcher rewrites an existing Next.js layout file so it imports the
//! generated metadata module and re-exports it under the canonical
//! `metadata` name. It never parses the file; it classifies it with the
//! scoped patterns from [`patterns`] and picks one of three strategies:
//!
//! 1. Already patched — the file carries our re-export; nothing is written
//!    (second runs are byte-identical), except to restore a missing import.
//! 2. Replace — an exported `metadata` object literal is swapped for the
//!    minimal re-export.
//! 3. Append — nothing matched; the import is inserted and the re-export
//!    appended, leaving every existing byte in place.

mod imports;
mod patterns;

pub use patterns::{EXPORTED_NAME, IMPORTED_BINDING, METADATA_TYPE};

use crate::dialect::Dialect;
use crate::error::{MetaError, Result};
use crate::fs::atomic_write_file;
use patterns::LayoutPatterns;
use std::fs;
use std::path::PathBuf;

/// A layout file location the patcher may rewrite.
///
/// `depth` is the candidate's directory depth below the project root
/// (`app/` is 1, `src/app/` is 2); the relative import back to the
/// generated module is computed from it structurally, without filesystem
/// traversal.
#[derive(Debug, Clone)]
pub struct LayoutCandidate {
    pub path: PathBuf,
    pub depth: usize,
}

impl LayoutCandidate {
    pub fn new(path: PathBuf, depth: usize) -> Self {
        Self { path, depth }
    }
}

/// Explicit patcher configuration.
#[derive(Debug, Clone)]
pub struct PatcherConfig {
    /// Basename of the generated module the layout should import.
    pub module_basename: String,
}

/// How a candidate file was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchStrategy {
    /// The file already carried the re-export; at most the import was restored.
    AlreadyPatched,
    /// An exported metadata object literal was replaced with the re-export.
    Replaced,
    /// No declaration matched; import and re-export were added around the
    /// existing content.
    Appended,
}

/// Result of a successful patch of one candidate.
#[derive(Debug, Clone)]
pub struct PatchOutcome {
    pub path: PathBuf,
    pub strategy: PatchStrategy,
}

/// Rewrites a layout file to use the generated metadata module.
pub struct LayoutPatcher {
    config: PatcherConfig,
    patterns: LayoutPatterns,
}

impl LayoutPatcher {
    pub fn new(config: PatcherConfig) -> Result<Self> {
        let patterns = LayoutPatterns::for_module(&config.module_basename)?;
        Ok(Self { config, patterns })
    }

    /// Patch the first candidate that exists on disk.
    ///
    /// Only one file is ever patched per invocation, even when several
    /// candidates exist. Returns `Ok(None)` when no candidate exists; that
    /// is a normal outcome, not an error.
    pub fn patch(&self, candidates: &[LayoutCandidate]) -> Result<Option<PatchOutcome>> {
        for candidate in candidates {
            if candidate.path.exists() {
                return self.patch_file(candidate).map(Some);
            }
        }
        Ok(None)
    }

    fn patch_file(&self, candidate: &LayoutCandidate) -> Result<PatchOutcome> {
        let content = fs::read_to_string(&candidate.path)
            .map_err(|e| MetaError::FileRead(format!("{}: {}", candidate.path.display(), e)))?;

        let dialect = Dialect::from_layout_path(&candidate.path);
        let import_line = self.import_line(candidate, dialect);
        let export_line = reexport_line(dialect);

        let (updated, strategy) = if self.patterns.is_already_patched(&content) {
            if self.patterns.has_module_import(&content) {
                (None, PatchStrategy::AlreadyPatched)
            } else {
                // Re-export survived but the import was lost; restore it.
                let restored = imports::insert_import(&content, &import_line, &self.patterns);
                (Some(restored), PatchStrategy::AlreadyPatched)
            }
        } else if let Some((start, end)) = self.patterns.declaration_span(&content) {
            let mut replaced = String::with_capacity(content.len());
            replaced.push_str(&content[..start]);
            replaced.push_str(&export_line);
            replaced.push_str(&content[end..]);
            let with_import = imports::insert_import(&replaced, &import_line, &self.patterns);
            (Some(with_import), PatchStrategy::Replaced)
        } else {
            // Pattern mismatch: conservative additive fallback. Nothing in
            // the original content is altered or removed.
            let mut appended = imports::insert_import(&content, &import_line, &self.patterns);
            if !appended.ends_with('\n') {
                appended.push('\n');
            }
            appended.push_str(&export_line);
            appended.push('\n');
            (Some(appended), PatchStrategy::Appended)
        };

        if let Some(text) = updated {
            atomic_write_file(&candidate.path, &text)?;
        }

        Ok(PatchOutcome {
            path: candidate.path.clone(),
            strategy,
        })
    }

    /// Import statement for a candidate, pointing back at the generated
    /// module with the dialect's extension.
    fn import_line(&self, candidate: &LayoutCandidate, dialect: Dialect) -> String {
        format!(
            "import {} from '{}{}.{}';",
            IMPORTED_BINDING,
            "../".repeat(candidate.depth),
            self.config.module_basename,
            dialect.module_extension()
        )
    }
}

/// The minimal re-export the patcher leaves behind.
fn reexport_line(dialect: Dialect) -> String {
    match dialect {
        Dialect::Typed => format!(
            "export const {}: {} = {};",
            EXPORTED_NAME, METADATA_TYPE, IMPORTED_BINDING
        ),
        Dialect::Untyped => format!("export const {} = {};", EXPORTED_NAME, IMPORTED_BINDING),
    }
}
