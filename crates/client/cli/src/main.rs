//! Command-line front end for the player evaluation engine.
//!
//! Loads game tables and a turn snapshot from a data directory and prints
//! scores, planet evaluations, design ratings or the score sheet digest.
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use commands::{Designs, Digest, PlanetInfo, ScoreTurn};
use config::CliConfig;

/// Stars! player evaluation
#[derive(Parser)]
#[command(name = "stars-score")]
#[command(about = "Score Stars! turns from snapshot files", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Score every player of a turn
    Score(ScoreTurn),

    /// Evaluate one planet for one player
    Planet(PlanetInfo),

    /// Rate the design slots of one player
    Designs(Designs),

    /// Print the score sheet digest
    Digest(Digest),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for SCORE_DATA_DIR and other env vars)
    let _ = dotenvy::dotenv();

    setup_logging();

    let cli = Cli::parse();
    let config = CliConfig::from_env();

    match cli.command {
        Command::Score(cmd) => cmd.execute(&config),
        Command::Planet(cmd) => cmd.execute(&config),
        Command::Designs(cmd) => cmd.execute(&config),
        Command::Digest(cmd) => cmd.execute(&config),
    }
}

/// Logs go to stderr so table and JSON output stay clean on stdout.
fn setup_logging() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
