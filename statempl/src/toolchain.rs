//! External tool invocation.
//!
//! The pipeline delegates three things to subprocesses: formatting templ
//! sources, regenerating `_templ.go` files, and running the synthesized
//! driver. All three are synchronous invoke-and-block calls; there is no
//! cancellation or timeout, an operator terminates externally.

use std::path::{Path, PathBuf};
use std::process::Command;

use eyre::{Result, WrapErr, eyre};

/// The external commands the build pipeline delegates to.
///
/// Kept behind a trait so orchestration tests can record invocations
/// instead of spawning processes.
pub trait Toolchain {
    /// Run `templ fmt` over the given templ sources.
    fn templ_fmt(&self, sources: &[PathBuf], project_root: &Path) -> Result<()>;

    /// Run `templ generate` in the project root.
    fn templ_generate(&self, project_root: &Path) -> Result<()>;

    /// Compile and execute the synthesized driver with `go run`.
    fn go_run(&self, script: &Path, project_root: &Path) -> Result<()>;
}

/// Spawns the real `templ` and `go` binaries, inheriting stdio so their
/// output stays visible to the operator.
pub struct SystemToolchain;

impl SystemToolchain {
    fn run(mut command: Command, label: &str) -> Result<()> {
        let status = command
            .status()
            .wrap_err_with(|| format!("failed to start '{label}'"))?;
        if !status.success() {
            return Err(eyre!("'{label}' exited with {status}"));
        }
        Ok(())
    }
}

impl Toolchain for SystemToolchain {
    fn templ_fmt(&self, sources: &[PathBuf], project_root: &Path) -> Result<()> {
        if sources.is_empty() {
            return Ok(());
        }
        let mut command = Command::new("templ");
        command.arg("fmt").args(sources).current_dir(project_root);
        Self::run(command, "templ fmt")
    }

    fn templ_generate(&self, project_root: &Path) -> Result<()> {
        let mut command = Command::new("templ");
        command.arg("generate").current_dir(project_root);
        Self::run(command, "templ generate")
    }

    fn go_run(&self, script: &Path, project_root: &Path) -> Result<()> {
        let mut command = Command::new("go");
        command.arg("run").arg(script).current_dir(project_root);
        Self::run(command, "go run")
    }
}
