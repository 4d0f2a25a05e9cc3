//! Filesystem primitives used by the build pipeline.

use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// Write `content` to `path`, creating parent directories as needed.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    std::fs::write(path, content)
        .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
    Ok(())
}

/// Copy a single file, creating parent directories of the destination.
/// Copying a file onto itself is a no-op.
pub fn copy_file(from: &Path, to: &Path) -> Result<()> {
    // std::fs::copy truncates the destination before reading the source
    if from == to {
        return Ok(());
    }
    if let Some(parent) = to.parent() {
        std::fs::create_dir_all(parent)
            .wrap_err_with(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    std::fs::copy(from, to).wrap_err_with(|| {
        format!("failed to copy '{}' to '{}'", from.display(), to.display())
    })?;
    Ok(())
}

/// Copy files into the output tree, preserving each file's path relative
/// to `input_root`.
///
/// Files that do not live under `input_root` are rejected rather than
/// silently flattened.
pub fn copy_files_into(files: &[PathBuf], input_root: &Path, output_root: &Path) -> Result<()> {
    for file in files {
        let relative = file.strip_prefix(input_root).wrap_err_with(|| {
            format!(
                "'{}' is not inside the input directory '{}'",
                file.display(),
                input_root.display()
            )
        })?;
        copy_file(file, &output_root.join(relative))?;
    }
    Ok(())
}

/// Remove `dir` if it exists, then recreate it empty.
pub fn clear_and_create_dir(dir: &Path) -> Result<()> {
    if dir.exists() {
        std::fs::remove_dir_all(dir)
            .wrap_err_with(|| format!("failed to remove '{}'", dir.display()))?;
    }
    std::fs::create_dir_all(dir)
        .wrap_err_with(|| format!("failed to create '{}'", dir.display()))?;
    Ok(())
}
