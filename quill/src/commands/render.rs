use std::path::PathBuf;

use clap::Args;
use eyre::Result;
use quill_manifest::{Manifest, Target, load_program};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
    target::TargetSupport,
};

#[derive(Args)]
pub struct RenderCommand {
    /// Program file (JSON)
    pub program: PathBuf,

    /// Path to quill.toml (defaults to ./quill.toml; missing means defaults)
    #[arg(short, long, default_value = "quill.toml")]
    pub config: PathBuf,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Target language (overrides quill.toml setting)
    #[arg(short, long)]
    pub target: Option<Target>,
}

impl RenderCommand {
    /// Run the render command
    pub fn run(&self) -> Result<()> {
        let manifest = Manifest::from_file_or_default(&self.config).unwrap_or_exit();
        let program = load_program(&self.program).unwrap_or_exit();
        let target = TargetSupport::get(self.target.unwrap_or(manifest.generator.target));

        let generated = ops::render(&program, &manifest, &target)?;
        match &self.output {
            Some(path) => {
                let report = ops::write(&generated, path, &target)?;
                report.render(&mut TerminalOutput::new());
            }
            None => print!("{}", generated.code),
        }
        Ok(())
    }
}
