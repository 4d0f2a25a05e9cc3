use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result type for finder operations (boxed to reduce size on stack)
pub type Result<T> = std::result::Result<T, Box<Error>>;

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("input directory '{path}' does not exist")]
    #[diagnostic(
        code(statempl::directory_not_found),
        help("pass the pages directory with '-i <dir>', relative to the project root")
    )]
    DirectoryNotFound { path: PathBuf },

    #[error("failed to traverse '{path}'")]
    #[diagnostic(code(statempl::directory_unreadable))]
    DirectoryUnreadable {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to read 'go.mod' in '{path}'")]
    #[diagnostic(
        code(statempl::module_not_found),
        help("run statempl from the root of a Go module")
    )]
    GoModNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("no module directive in '{path}'")]
    #[diagnostic(
        code(statempl::module_directive_missing),
        help("add a 'module <import-path>' line to go.mod")
    )]
    ModuleDirectiveMissing { path: PathBuf },

    #[error("failed to read '{path}'")]
    #[diagnostic(code(statempl::unreadable_source))]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse '{path}'")]
    #[diagnostic(
        code(statempl::parse_error),
        help("this file was produced by 'templ generate'; re-run it and retry")
    )]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("syntax error here")]
        span: SourceSpan,
        path: PathBuf,
    },

    #[error("failed to load the Go grammar: {message}")]
    #[diagnostic(code(statempl::grammar))]
    Grammar { message: String },
}
