//! Path formatting helpers.

use std::path::{Component, Path, PathBuf};

/// Render a path with forward slashes, the separator used by Go import
/// paths and by the paths embedded in the generated driver.
pub fn slash_path(path: &Path) -> String {
    let mut out = String::new();
    for component in path.components() {
        match component {
            Component::RootDir => out.push('/'),
            component => {
                if !out.is_empty() && !out.ends_with('/') {
                    out.push('/');
                }
                out.push_str(&component.as_os_str().to_string_lossy());
            }
        }
    }
    out
}

/// Drop `.` components and trailing separators, so that paths taken from
/// command-line flags (`./web/pages`, `dist/`) compare and strip cleanly
/// against paths assembled component by component.
pub fn normalized(path: &Path) -> PathBuf {
    path.components()
        .filter(|component| !matches!(component, Component::CurDir))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slash_path() {
        let path: PathBuf = ["web", "pages", "a"].iter().collect();
        assert_eq!(slash_path(&path), "web/pages/a");
    }

    #[test]
    fn test_slash_path_empty() {
        assert_eq!(slash_path(Path::new("")), "");
    }

    #[test]
    fn test_slash_path_single_component() {
        assert_eq!(slash_path(Path::new("dist")), "dist");
    }

    #[test]
    fn test_normalized_strips_leading_dot() {
        assert_eq!(normalized(Path::new("./web/pages")), PathBuf::from("web/pages"));
    }

    #[test]
    fn test_normalized_strips_inner_dot_and_trailing_separator() {
        assert_eq!(normalized(Path::new("web/./pages/")), PathBuf::from("web/pages"));
    }

    #[test]
    fn test_normalized_keeps_plain_paths() {
        assert_eq!(normalized(Path::new("dist")), PathBuf::from("dist"));
        assert_eq!(normalized(Path::new("")), PathBuf::new());
    }

    #[cfg(unix)]
    #[test]
    fn test_slash_path_absolute() {
        assert_eq!(slash_path(Path::new("/tmp/site/dist")), "/tmp/site/dist");
    }
}
