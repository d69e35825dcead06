use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "ngx-stats")]
#[command(about = "Counts Angular modules, services, components, directives, and pipes")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// Path to the Angular project directory
    #[arg(short, long, default_value = ".")]
    pub path: PathBuf,

    /// Output the results in JSON format
    #[arg(short, long)]
    pub json: bool,

    /// Legacy detection: declarations default to non-standalone (Angular v14-v18)
    #[arg(short, long)]
    pub legacy: bool,

    /// Print a trace line for each notable classification
    #[arg(short, long)]
    pub verbose: bool,
}
