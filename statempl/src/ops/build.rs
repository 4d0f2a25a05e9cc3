//! Build operation - the discovery, synthesis and execution pipeline.

use std::path::Path;

use eyre::{Result, WrapErr, bail};
use statempl_codegen::{DriverScript, GenerationMode, SCRIPT_FILE_NAME, output_path};
use statempl_core::{clear_and_create_dir, copy_files_into, normalized, slash_path, write_file};
use statempl_finder::{find_component_fns, group_files, resolve_imports, resolve_module_path};

use crate::{ops::diagnostic, reports::BuildReport, toolchain::Toolchain};

/// Options for the build operation.
pub struct BuildOptions<'a> {
    /// Root of the Go module (where go.mod lives).
    pub project_root: &'a Path,
    /// Pages directory, relative to the project root.
    pub input_dir: &'a Path,
    /// Output directory, relative to the project root.
    pub output_dir: &'a Path,
    /// Whether to run 'templ fmt' before discovery.
    pub run_fmt: bool,
    /// Whether to run 'templ generate' before discovery.
    pub run_generate: bool,
    /// Whether to keep the ephemeral work directory.
    pub debug: bool,
    /// Page layout in the output tree.
    pub mode: GenerationMode,
}

/// Execute the build pipeline.
///
/// Every step is fail-fast: the first error aborts the remaining steps
/// and surfaces with the originating stage attached. Side effects already
/// performed (a cleared output directory, copied assets) are not rolled
/// back.
pub fn build(opts: BuildOptions, toolchain: &dyn Toolchain) -> Result<BuildReport> {
    // flag values may carry '.' components or trailing separators that
    // would defeat prefix stripping below
    let input_dir = normalized(opts.input_dir);
    let output_dir = normalized(opts.output_dir);
    let input = opts.project_root.join(&input_dir);
    let output = opts.project_root.join(&output_dir);

    if output != input {
        clear_and_create_dir(&output).wrap_err("failed to prepare the output directory")?;
    }

    let module = resolve_module_path(opts.project_root).map_err(diagnostic)?;
    let mut grouped = group_files(&input).map_err(diagnostic)?;

    if opts.run_fmt {
        toolchain.templ_fmt(&grouped.templ_sources, opts.project_root)?;
    }
    if opts.run_generate {
        toolchain.templ_generate(opts.project_root)?;
        // generation may have produced new _templ.go files
        grouped = group_files(&input).map_err(diagnostic)?;
    }

    let components =
        find_component_fns(&grouped.generated_go, opts.project_root).map_err(diagnostic)?;
    if components.is_empty() {
        bail!("no components found under '{}'", input.display());
    }

    let work_dir = tempfile::Builder::new()
        .prefix(".statempl-")
        .tempdir_in(opts.project_root)
        .wrap_err("failed to create the work directory")?;

    copy_files_into(&grouped.other, &input, &output).wrap_err("failed to copy static assets")?;

    // input as seen from inside the module, for import-path arithmetic
    let input_rel = input_dir.strip_prefix(opts.project_root).unwrap_or(&input_dir);

    let imports = resolve_imports(&module, &components);
    let script = DriverScript::new(
        &module,
        &imports,
        &components,
        input_rel,
        &output_dir,
        opts.mode,
    )
    .render()
    .wrap_err("failed to render the driver script")?;

    let script_path = work_dir.path().join(SCRIPT_FILE_NAME);
    write_file(&script_path, &script).wrap_err("failed to write the driver script")?;

    toolchain
        .go_run(&script_path, opts.project_root)
        .wrap_err("driver script failed")?;

    let pages = components
        .iter()
        .map(|c| slash_path(&output_path(c, input_rel, &output_dir, opts.mode)))
        .collect();

    let kept_work_dir = if opts.debug {
        Some(work_dir.keep())
    } else {
        work_dir
            .close()
            .wrap_err("failed to remove the work directory")?;
        None
    };

    Ok(BuildReport {
        module: module.to_string(),
        component_count: components.len(),
        pages,
        output_dir,
        kept_work_dir,
    })
}
