mod build;
mod completions;
mod version;

use build::BuildCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use version::VersionCommand;

#[derive(Parser)]
#[command(name = "statempl")]
#[command(version)]
#[command(about = "Generate a static site from a templ project")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Build(cmd) => cmd.run(),
            Commands::Version(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Discover component functions and render the static site
    Build(BuildCommand),

    /// Display version information, including the wrapped templ runtime
    Version(VersionCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
