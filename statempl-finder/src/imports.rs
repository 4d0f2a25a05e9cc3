//! Import path resolution for discovered components.

use indexmap::IndexSet;
use statempl_core::slash_path;

use crate::extract::ComponentFn;
use crate::module::ModulePath;

/// Compute the unique, sorted set of import paths required to reference
/// every component function from the generated driver.
///
/// Each entry is `module + "/" + dir`; a component at the project root maps
/// to the module path itself. Total function; no failure modes.
pub fn resolve_imports(module: &ModulePath, components: &[ComponentFn]) -> Vec<String> {
    let mut set = IndexSet::new();
    for component in components {
        set.insert(import_path(module, component));
    }
    let mut imports: Vec<String> = set.into_iter().collect();
    imports.sort();
    imports
}

/// The import path owning a single component.
pub fn import_path(module: &ModulePath, component: &ComponentFn) -> String {
    let dir = slash_path(&component.dir);
    if dir.is_empty() {
        module.as_str().to_string()
    } else {
        format!("{}/{}", module.as_str(), dir)
    }
}
