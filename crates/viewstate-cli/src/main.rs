mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "viewstate", about = "Viewport overlay and presentation id tool")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve the presentation id of one viewport in a snapshot
    Resolve(commands::resolve::ResolveArgs),
    /// Assign presentation ids to every viewport in a snapshot
    Assign(commands::assign::AssignArgs),
    /// Replay a viewport event log through the loading overlay
    Replay(commands::replay::ReplayArgs),
    /// Print or save the default config
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Resolve(args) => commands::resolve::run(args),
        Commands::Assign(args) => commands::assign::run(args),
        Commands::Replay(args) => commands::replay::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
