use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use quill_manifest::{Manifest, load_program};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
    target::TargetSupport,
};

#[derive(Args)]
pub struct CheckCommand {
    /// Program file (JSON)
    pub program: PathBuf,

    /// Path to quill.toml (defaults to ./quill.toml; missing means defaults)
    #[arg(short, long, default_value = "quill.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file_or_default(&self.config).unwrap_or_exit();
        let program = load_program(&self.program).unwrap_or_exit();
        let target = TargetSupport::get(manifest.generator.target);

        let report = ops::check(&program, &manifest, &target, &self.program)?;
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
