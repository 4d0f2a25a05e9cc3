//! Core utilities for the statempl site generator.
//!
//! This crate provides the filesystem primitives and version constants
//! shared by the statempl pipeline crates.

mod fs;
mod paths;
mod version;

// File operations
pub use fs::{clear_and_create_dir, copy_file, copy_files_into, write_file};
// Path formatting
pub use paths::{normalized, slash_path};
// Wrapped templ runtime version
pub use version::{TEMPL_MODULE, TEMPL_VERSION, version_line};
