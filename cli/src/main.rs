mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::{export, render, summary, verify};

pub fn run() -> anyhow::Result<()> {
    use clap::Parser;

    let cli = Cli::parse();
    match &cli.command {
        Commands::Render(args) => render::run(&cli, args),
        Commands::Export(args) => export::run(&cli, args),
        Commands::Verify(args) => verify::run(&cli, args),
        Commands::Summary(args) => summary::run(&cli, args),
    }
}

fn main() -> anyhow::Result<()> { run() }
