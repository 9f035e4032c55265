//! Reversi CLI - Command-line interface
//!
//! Commands:
//! - play: Play a single game (AI, single heuristic, random or human players)
//! - match: Play a series of games and report statistics

mod config;
mod console;
mod match_cmd;
mod play_cmd;
mod render;
mod runner;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "reversi")]
#[command(about = "Reversi on hexagonal and square boards")]
struct Cli {
    /// Random seed for reproducible games
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Log every move and turn change
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single game
    Play(play_cmd::PlayArgs),
    /// Play a series of games and report statistics
    Match(match_cmd::MatchArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose);

    match cli.command {
        Commands::Play(args) => play_cmd::run(args, cli.seed),
        Commands::Match(args) => match_cmd::run(args, cli.seed),
    }
}

/// Logs go to stderr so JSON output on stdout stays parseable
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
