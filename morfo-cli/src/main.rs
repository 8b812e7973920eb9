//! Command-line entry point for morfo

use clap::Parser;
use morfo_cli::commands::Commands;
use morfo_cli::CliResult;

/// Morphological segmentation of Esperanto words
#[derive(Debug, Parser)]
#[command(name = "morfo", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> CliResult<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
