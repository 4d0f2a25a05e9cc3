//! Report data structures for commands.
//!
//! Commands build reports, then render them to an Output target, keeping
//! data collection separate from terminal formatting.

mod build;
mod output;

pub use build::BuildReport;
pub use output::{Output, Report, TerminalOutput};
