use std::path::Path;
use tempfile::TempDir;

/// Declarative description of a Next.js project fixture.
#[derive(Debug, Clone, Default)]
pub(crate) struct ProjectFixture {
    tsconfig: bool,
    typescript_dev_dep: bool,
    layouts: Vec<(&'static str, &'static str)>,
}

impl ProjectFixture {
    pub(crate) fn with_tsconfig(mut self) -> Self {
        self.tsconfig = true;
        self
    }

    pub(crate) fn with_typescript_dev_dep(mut self) -> Self {
        self.typescript_dev_dep = true;
        self
    }

    /// Add a layout file at a project-relative path with the given content.
    pub(crate) fn with_layout(mut self, rel_path: &'static str, content: &'static str) -> Self {
        self.layouts.push((rel_path, content));
        self
    }
}

/// Create a temporary Next.js project directory from a fixture description.
///
/// Always writes a package.json listing `next`; tsconfig.json, the
/// `typescript` devDependency, and layout files are opt-in.
pub(crate) fn create_next_project(fixture: ProjectFixture) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    let dev_deps = if fixture.typescript_dev_dep {
        r#"{"typescript": "^5.0.0"}"#
    } else {
        "{}"
    };
    let package_json = format!(
        r#"{{
  "name": "fixture-app",
  "dependencies": {{ "next": "^14.0.0", "react": "^18.0.0" }},
  "devDependencies": {}
}}
"#,
        dev_deps
    );
    std::fs::write(root.join("package.json"), package_json).unwrap();

    if fixture.tsconfig {
        std::fs::write(root.join("tsconfig.json"), "{ \"compilerOptions\": {} }\n").unwrap();
    }

    for (rel_path, content) in &fixture.layouts {
        write_file(root, rel_path, content);
    }

    temp_dir
}

fn write_file(root: &Path, rel_path: &str, content: &str) {
    let path = root.join(rel_path);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}
