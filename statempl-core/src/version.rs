//! Version information for the wrapped templ runtime.

/// Import path of the templ module the generated driver targets.
pub const TEMPL_MODULE: &str = "github.com/a-h/templ";

/// Pinned templ runtime version this release was built against.
pub const TEMPL_VERSION: &str = "0.2.731";

/// Format the full version line shown by `statempl version`.
pub fn version_line(tool_version: &str) -> String {
    format!("statempl v{tool_version} (built with {TEMPL_MODULE}@v{TEMPL_VERSION})")
}
