//! Component discovery for templ projects.
//!
//! This crate turns a source tree into the data the driver generator needs:
//! the Go module path, a three-way partition of the files under the input
//! directory, the exported component functions found in generated
//! `_templ.go` sources, and the unique import paths referencing them.

mod classify;
mod error;
mod extract;
mod imports;
mod module;

pub use classify::{GroupedFiles, group_files};
pub use error::{Error, Result};
pub use extract::{ComponentFn, find_component_fns};
pub use imports::{import_path, resolve_imports};
pub use module::{ModulePath, resolve_module_path};
