//! Score every player of a turn, or report one player in full.

use anyhow::Result;
use clap::Parser;
use console::style;
use score_core::{
    GameError, PlayerId, Ranking, ScoreEngine, ScoreReport, ScoreSheet, SnapshotOracleBundle,
};
use serde::Serialize;

use super::{InputArgs, Inputs, OutputFormat, print_json};
use crate::config::CliConfig;

/// Score a turn
#[derive(Parser)]
pub struct ScoreTurn {
    #[command(flatten)]
    input: InputArgs,

    /// Print the full report of a single player instead of the sheet
    #[arg(long, value_name = "PLAYER")]
    player: Option<u8>,
}

#[derive(Serialize)]
struct SheetOutput<'a> {
    #[serde(flatten)]
    sheet: &'a ScoreSheet,
    rankings: Vec<Ranking>,
    digest: String,
}

impl ScoreTurn {
    pub fn execute(self, cli: &CliConfig) -> Result<()> {
        let inputs = Inputs::load(&self.input, cli)?;
        let bundle = SnapshotOracleBundle::new(&inputs.oracles);
        let engine = ScoreEngine::with_config(&inputs.turn, bundle.as_env(), inputs.config.clone());

        if let Some(player) = self.player {
            let report = engine
                .evaluate(PlayerId(player))
                .map_err(|e| anyhow::anyhow!("{}: {}", e.error_code(), e))?;
            return match self.input.format {
                OutputFormat::Json => print_json(&report),
                OutputFormat::Table => {
                    print_report(&report);
                    Ok(())
                }
            };
        }

        let sheet = engine
            .score_all()
            .map_err(|e| anyhow::anyhow!("{}: {}", e.error_code(), e))?;
        match self.input.format {
            OutputFormat::Json => print_json(&SheetOutput {
                sheet: &sheet,
                rankings: sheet.rankings(),
                digest: hex::encode(sheet.digest()),
            }),
            OutputFormat::Table => {
                print_sheet(&sheet);
                Ok(())
            }
        }
    }
}

fn print_sheet(sheet: &ScoreSheet) {
    println!("{}", style(format!("=== Scores, {} ===", sheet.year)).bold().green());
    println!();
    println!(
        "{:>4}  {:<6} {:>8} {:>7} {:>7} {:>5} {:>9} {:>5}  {:>17}",
        "Rank", "Player", "Score", "Legacy", "Planets", "Bases", "Resources", "Tech", "Ships U/E/C"
    );
    for ranking in sheet.rankings() {
        let Some(score) = sheet.get(ranking.player) else {
            continue;
        };
        let [unarmed, escort, capital] = score.ships.as_array();
        println!(
            "{:>4}  {:<6} {:>8} {:>7} {:>7} {:>5} {:>9} {:>5}  {:>17}",
            ranking.rank,
            score.player.to_string(),
            score.total,
            score.legacy_total(),
            score.planets,
            score.starbases,
            score.resources,
            score.tech_levels,
            format!("{}/{}/{}", unarmed, escort, capital),
        );
    }
    println!();
    println!(
        "{} {}",
        style("Digest:").bold().cyan(),
        hex::encode(sheet.digest())
    );
}

fn print_report(report: &ScoreReport) {
    let score = &report.score;
    println!(
        "{}",
        style(format!("=== Score of {} ===", score.player)).bold().green()
    );
    println!();
    println!("  Total:       {} (legacy {})", score.total, score.legacy_total());
    println!("  Planets:     {}", score.planets);
    println!("  Starbases:   {}", score.starbases);
    println!("  Resources:   {}", score.resources);
    println!("  Tech levels: {}", score.tech_levels);
    println!(
        "  Ships:       {} unarmed, {} escort, {} capital",
        report.tally.unarmed, report.tally.escort, report.tally.capital
    );
    println!();

    println!("{}", style("Planets:").bold().yellow());
    for planet in &report.planets {
        println!(
            "  {:<6} capacity {:>7}  population {:>7}  resources {:>5}",
            planet.planet.to_string(),
            planet.max_population,
            planet.effective_population,
            planet.resources
        );
    }
    println!();

    if !report.substitutions.is_empty() {
        println!("{}", style("Substituted:").bold().red());
        for substitution in &report.substitutions {
            println!("  {}", substitution);
        }
    }
}
