//! Parameterized metadata module rendering.
//!
//! The renderer turns a template plus a [`ParameterSet`] into the final
//! metadata module text in two independent passes: placeholder substitution
//! first, then (Typed dialect only) the type decoration pass from
//! [`typed`]. The result is written atomically to the configured output
//! directory with the dialect's extension.

mod substitute;
mod typed;

pub use substitute::{ParameterSet, substitute};

use crate::dialect::Dialect;
use crate::error::{MetaError, Result};
use crate::fs::atomic_write_file;
use std::fs;
use std::path::PathBuf;

/// Template bundled with the binary.
const BUILTIN_TEMPLATE: &str = include_str!("../../templates/next-metadata.template.js");

/// Where the renderer loads its template from.
#[derive(Debug, Clone, Default)]
pub enum TemplateSource {
    /// The template compiled into the binary.
    #[default]
    Builtin,
    /// A user-supplied template file, read at render time.
    File(PathBuf),
}

/// Explicit renderer configuration. There are no module-level globals; the
/// caller decides where output goes and what the module is called.
#[derive(Debug, Clone)]
pub struct RendererConfig {
    /// Template to render.
    pub template: TemplateSource,
    /// Directory the module file is written into.
    pub output_dir: PathBuf,
    /// Module file name without extension (e.g. `next-metadata`).
    pub module_basename: String,
}

/// A rendered and persisted metadata module.
#[derive(Debug, Clone)]
pub struct RenderedModule {
    /// Path the module text was written to.
    pub path: PathBuf,
    /// Dialect the module was rendered for.
    pub dialect: Dialect,
}

/// Renders the metadata module from a template and parameters.
pub struct ModuleRenderer {
    config: RendererConfig,
}

impl ModuleRenderer {
    pub fn new(config: RendererConfig) -> Self {
        Self { config }
    }

    /// Render the template with `params` for `dialect` and write the result.
    ///
    /// Substitution replaces every occurrence of each provided placeholder;
    /// unknown tokens stay verbatim. For [`Dialect::Typed`] the decoration
    /// pass inserts the `interface SiteConfig` block and annotates the
    /// site-configuration declaration. The whole buffer is written in one
    /// atomic operation; template read and file write failures are fatal to
    /// the call.
    pub fn render(&self, params: &ParameterSet, dialect: Dialect) -> Result<RenderedModule> {
        let template = self.load_template()?;

        let mut body = substitute(&template, params);
        if dialect.is_typed() {
            body = typed::decorate(&body);
        }

        let path = self.module_path(dialect);
        atomic_write_file(&path, &body)?;

        Ok(RenderedModule { path, dialect })
    }

    /// Output path for a given dialect.
    pub fn module_path(&self, dialect: Dialect) -> PathBuf {
        self.config.output_dir.join(format!(
            "{}.{}",
            self.config.module_basename,
            dialect.module_extension()
        ))
    }

    fn load_template(&self) -> Result<String> {
        match &self.config.template {
            TemplateSource::Builtin => Ok(BUILTIN_TEMPLATE.to_string()),
            TemplateSource::File(path) => fs::read_to_string(path)
                .map_err(|e| MetaError::TemplateRead(format!("{}: {}", path.display(), e))),
        }
    }
}
