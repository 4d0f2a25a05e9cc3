use clap::Args;
use eyre::Result;
use statempl_core::version_line;

#[derive(Args)]
pub struct VersionCommand {}

impl VersionCommand {
    pub fn run(&self) -> Result<()> {
        println!("{}", version_line(env!("CARGO_PKG_VERSION")));
        Ok(())
    }
}
