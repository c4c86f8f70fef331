//! Print the digest of a turn's score sheet.

use anyhow::Result;
use clap::Parser;
use score_core::{GameError, ScoreEngine, SnapshotOracleBundle};
use serde::Serialize;

use super::{InputArgs, Inputs, OutputFormat, print_json};
use crate::config::CliConfig;

/// Print the SHA-256 digest of every player's score record
#[derive(Parser)]
pub struct Digest {
    #[command(flatten)]
    input: InputArgs,
}

#[derive(Serialize)]
struct DigestOutput {
    year: u16,
    players: usize,
    digest: String,
}

impl Digest {
    pub fn execute(self, cli: &CliConfig) -> Result<()> {
        let inputs = Inputs::load(&self.input, cli)?;
        let bundle = SnapshotOracleBundle::new(&inputs.oracles);
        let engine = ScoreEngine::with_config(&inputs.turn, bundle.as_env(), inputs.config.clone());

        let sheet = engine
            .score_all()
            .map_err(|e| anyhow::anyhow!("{}: {}", e.error_code(), e))?;
        let output = DigestOutput {
            year: sheet.year,
            players: sheet.scores.len(),
            digest: hex::encode(sheet.digest()),
        };

        match self.input.format {
            OutputFormat::Json => print_json(&output),
            OutputFormat::Table => {
                println!("{}", output.digest);
                Ok(())
            }
        }
    }
}
