mod check;
mod completions;
mod orders;
mod render;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use orders::OrdersCommand;
use render::RenderCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for quill_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "quill")]
#[command(version)]
#[command(about = "Render block programs to source code")]
pub(crate) struct Cli {
    /// Enable debug logging (QUILL_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Render(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Orders(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate target code from a program file
    Render(RenderCommand),

    /// Run a generation pass without writing and summarize it
    Check(CheckCommand),

    /// Print a target's operator precedence table
    Orders(OrdersCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}
