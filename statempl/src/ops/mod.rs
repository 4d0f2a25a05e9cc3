//! Core operations.
//!
//! Business logic for statempl commands, separated from CLI argument
//! parsing and output rendering.

pub mod build;

pub use build::{BuildOptions, build};

/// Render a finder diagnostic (source spans included) into the error
/// report surfaced to the operator.
pub(crate) fn diagnostic(error: Box<statempl_finder::Error>) -> eyre::Report {
    eyre::eyre!("{:?}", miette::Report::new(*error))
}
