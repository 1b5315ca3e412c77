use clap::Args;
use eyre::Result;
use quill_manifest::Target;

use crate::{
    ops,
    reports::{Report, TerminalOutput},
    target::TargetSupport,
};

#[derive(Args)]
pub struct OrdersCommand {
    /// Target language
    #[arg(short, long, default_value = "php")]
    pub target: Target,
}

impl OrdersCommand {
    pub fn run(&self) -> Result<()> {
        let report = ops::orders(&TargetSupport::get(self.target));
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
