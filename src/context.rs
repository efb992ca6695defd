//! Project context resolution for next-metadata.
//!
//! This module is the "environment inspection" layer: it locates the
//! project root, decides whether it looks like a Next.js project, resolves
//! the target dialect from the project's TypeScript markers, and produces
//! the ordered layout-candidate list the patcher consumes.

use crate::dialect::Dialect;
use crate::error::{MetaError, Result};
use crate::patch::LayoutCandidate;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Basename of the generated metadata module (extension comes from the
/// dialect).
pub const MODULE_BASENAME: &str = "next-metadata";

/// Relevant slice of a package.json manifest. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct PackageJson {
    #[serde(default)]
    dependencies: BTreeMap<String, String>,
    #[serde(default, rename = "devDependencies")]
    dev_dependencies: BTreeMap<String, String>,
}

/// Resolved project paths and detection helpers.
#[derive(Debug, Clone)]
pub struct ProjectContext {
    /// Absolute path to the project root (where package.json lives).
    pub root: PathBuf,
}

impl ProjectContext {
    /// Resolve the context from the current working directory.
    pub fn resolve() -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            MetaError::UserError(format!("failed to get current working directory: {}", e))
        })?;
        Ok(Self::resolve_from(cwd))
    }

    /// Resolve the context from a specific directory. Useful for tests.
    pub fn resolve_from<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Path to the project's package.json.
    pub fn package_json_path(&self) -> PathBuf {
        self.root.join("package.json")
    }

    /// Path to the project's tsconfig.json.
    pub fn tsconfig_path(&self) -> PathBuf {
        self.root.join("tsconfig.json")
    }

    /// Whether the root looks like a Next.js project: package.json exists
    /// and lists `next` in dependencies or devDependencies. Any read or
    /// parse failure counts as "not a Next.js project" rather than an error.
    pub fn is_next_project(&self) -> bool {
        match self.read_package_json() {
            Some(pkg) => {
                pkg.dependencies.contains_key("next") || pkg.dev_dependencies.contains_key("next")
            }
            None => false,
        }
    }

    /// Decide the dialect from the project's TypeScript markers: a
    /// tsconfig.json or a `typescript` devDependency means Typed.
    pub fn detect_dialect(&self) -> Dialect {
        if self.tsconfig_path().exists() {
            return Dialect::Typed;
        }
        match self.read_package_json() {
            Some(pkg) if pkg.dev_dependencies.contains_key("typescript") => Dialect::Typed,
            _ => Dialect::Untyped,
        }
    }

    /// Ordered layout candidates: app-root layout first, then src/app, with
    /// the typed variant ahead of the untyped one at each location.
    pub fn layout_candidates(&self) -> Vec<LayoutCandidate> {
        let app = self.root.join("app");
        let src_app = self.root.join("src").join("app");
        vec![
            LayoutCandidate::new(app.join("layout.tsx"), 1),
            LayoutCandidate::new(app.join("layout.js"), 1),
            LayoutCandidate::new(src_app.join("layout.tsx"), 2),
            LayoutCandidate::new(src_app.join("layout.js"), 2),
        ]
    }

    /// Default site name: the project directory's basename.
    pub fn default_site_name(&self) -> String {
        self.root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "my-site".to_string())
    }

    fn read_package_json(&self) -> Option<PackageJson> {
        let raw = fs::read_to_string(self.package_json_path()).ok()?;
        serde_json::from_str(&raw).ok()
    }
}
