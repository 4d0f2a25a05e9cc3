use std::path::PathBuf;

use clap::Args;
use eyre::{Result, WrapErr};
use statempl_codegen::GenerationMode;

use crate::{
    ops::{self, BuildOptions},
    reports::{Report, TerminalOutput},
    toolchain::SystemToolchain,
};

#[derive(Args)]
pub struct BuildCommand {
    /// Input directory, relative to the project root
    #[arg(short, long, default_value = "web/pages")]
    pub input: PathBuf,

    /// Output directory
    #[arg(short, long, default_value = "dist")]
    pub output: PathBuf,

    /// Run 'templ fmt' over the templ sources first
    #[arg(short = 'f', long = "fmt")]
    pub run_fmt: bool,

    /// Run 'templ generate' before discovery
    #[arg(short = 'g', long = "generate")]
    pub run_generate: bool,

    /// Keep the driver script directory after completion for inspection
    #[arg(short, long)]
    pub debug: bool,

    /// Page layout: 'standard' (<Name>.html) or 'index' (<name>/index.html)
    #[arg(short, long, default_value_t = GenerationMode::Standard)]
    pub mode: GenerationMode,
}

impl BuildCommand {
    /// Run the build pipeline from the current directory.
    pub fn run(&self) -> Result<()> {
        let project_root =
            std::env::current_dir().wrap_err("failed to resolve the project root")?;

        let report = ops::build(
            BuildOptions {
                project_root: &project_root,
                input_dir: &self.input,
                output_dir: &self.output,
                run_fmt: self.run_fmt,
                run_generate: self.run_generate,
                debug: self.debug,
                mode: self.mode,
            },
            &SystemToolchain,
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
