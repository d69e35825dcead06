mod types;
mod utils;
mod analyzers;
mod generators;
mod cli;

use clap::Parser;
use cli::Cli;
use cli::commands::run_stats;
use anyhow::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    run_stats(&cli.path, cli.json, cli.legacy, cli.verbose)?;
    Ok(())
}
