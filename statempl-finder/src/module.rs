//! Go module path resolution from `go.mod`.

use std::fmt;
use std::path::Path;

use crate::error::{Error, Result};

/// The root import path of the current project, read once per run from the
/// `module` directive of `go.mod`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModulePath(String);

impl ModulePath {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModulePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Read the module path from `<project_root>/go.mod`.
pub fn resolve_module_path(project_root: &Path) -> Result<ModulePath> {
    let gomod = project_root.join("go.mod");
    let content = std::fs::read_to_string(&gomod).map_err(|source| {
        Box::new(Error::GoModNotFound {
            path: project_root.to_path_buf(),
            source,
        })
    })?;

    for line in content.lines() {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix("module") {
            // "moduleX" is a valid identifier start, not a directive
            if rest.starts_with(char::is_whitespace) {
                let path = rest.trim().trim_matches('"');
                if !path.is_empty() {
                    return Ok(ModulePath(path.to_string()));
                }
            }
        }
    }

    Err(Box::new(Error::ModuleDirectiveMissing { path: gomod }))
}
