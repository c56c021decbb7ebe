//! chunkwise command-line interface

use anyhow::Result;
use chunkwise_cli::commands::Commands;
use clap::Parser;

/// Split sequences into fixed-size chunks and compare chunking strategies
#[derive(Debug, Parser)]
#[command(name = "chunkwise", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}
