//! Three-way partition of the files under the input directory.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Suffix of human-authored templ sources.
const TEMPL_SUFFIX: &str = ".templ";

/// Suffix of the Go files emitted by 'templ generate'.
const GENERATED_SUFFIX: &str = "_templ.go";

/// Every regular file under the scanned root, partitioned by role.
///
/// The three lists are pairwise disjoint, their union is the full set of
/// regular files found, and each list is sorted lexicographically by full
/// path so downstream stages are reproducible.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GroupedFiles {
    /// Human-authored `.templ` sources.
    pub templ_sources: Vec<PathBuf>,
    /// Generated `_templ.go` component files.
    pub generated_go: Vec<PathBuf>,
    /// Everything else; copied verbatim into the output tree.
    pub other: Vec<PathBuf>,
}

impl GroupedFiles {
    /// Total number of regular files scanned.
    pub fn len(&self) -> usize {
        self.templ_sources.len() + self.generated_go.len() + self.other.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Recursively enumerate regular files under `root` and assign each to
/// exactly one group.
///
/// Fails without a partial result if the root does not exist or cannot be
/// traversed.
pub fn group_files(root: &Path) -> Result<GroupedFiles> {
    if !root.is_dir() {
        return Err(Box::new(Error::DirectoryNotFound {
            path: root.to_path_buf(),
        }));
    }

    let mut grouped = GroupedFiles::default();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.map_err(|source| {
            let path = source
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf());
            Box::new(Error::DirectoryUnreadable { path, source })
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        let path = entry.into_path();
        if name.ends_with(GENERATED_SUFFIX) {
            grouped.generated_go.push(path);
        } else if name.ends_with(TEMPL_SUFFIX) {
            grouped.templ_sources.push(path);
        } else {
            grouped.other.push(path);
        }
    }

    // sort_by_file_name is per-directory; make the full-path order explicit
    grouped.templ_sources.sort();
    grouped.generated_go.sort();
    grouped.other.sort();
    Ok(grouped)
}
