//! Subcommands and the inputs they share.

mod designs;
mod digest;
mod planet;
mod score;

pub use designs::Designs;
pub use digest::Digest;
pub use planet::PlanetInfo;
pub use score::ScoreTurn;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use score_content::{ContentFactory, TurnLoader};
use score_core::{FailurePolicy, OracleSnapshot, ScoreConfig, TurnState};
use serde::Serialize;

use crate::config::CliConfig;

/// Arguments every subcommand takes to locate its inputs.
#[derive(Args)]
pub struct InputArgs {
    /// Turn file, or the name of a turn under `<data-dir>/turns/`
    #[arg(value_name = "TURN")]
    turn: String,

    /// Directory holding config.toml, the game tables and turns
    #[arg(short, long, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Failure policy, overriding config.toml and SCORE_FAILURE_POLICY
    #[arg(short, long, value_name = "POLICY", value_parser = parse_policy)]
    policy: Option<FailurePolicy>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Everything one evaluation needs, loaded from disk.
pub struct Inputs {
    pub config: ScoreConfig,
    pub oracles: OracleSnapshot,
    pub turn: TurnState,
}

impl Inputs {
    pub fn load(args: &InputArgs, cli: &CliConfig) -> Result<Self> {
        let factory = ContentFactory::new(cli.data_dir(args.data_dir.clone()));

        let mut config = if factory.data_dir().join("config.toml").exists() {
            factory.load_config()?
        } else {
            ScoreConfig::default()
        };
        if let Some(policy) = args.policy.or(cli.failure_policy) {
            config.failure_policy = policy;
        }

        let oracles = factory.load_oracles().with_context(|| {
            format!("Failed to load game tables from {}", factory.data_dir().display())
        })?;

        let path = PathBuf::from(&args.turn);
        let turn = if path.is_file() {
            TurnLoader::load(&path)?
        } else {
            factory.load_turn(&args.turn)?
        };

        tracing::info!(
            "loaded turn {} ({} players) with {} policy",
            turn.year,
            turn.players.len(),
            config.failure_policy
        );
        Ok(Self {
            config,
            oracles,
            turn,
        })
    }
}

fn parse_policy(value: &str) -> Result<FailurePolicy, String> {
    value
        .parse()
        .map_err(|_| format!("expected `abort` or `substitute`, got `{}`", value))
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize output to JSON")?;
    println!("{}", json);
    Ok(())
}
