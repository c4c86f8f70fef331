//! Rate every design slot of a player.

use anyhow::Result;
use clap::Parser;
use console::style;
use score_core::{
    DesignSlot, GameError, PlayerId, PowerBreakdown, ScoreEngine, ShipClass, SnapshotOracleBundle,
};
use serde::Serialize;

use super::{InputArgs, Inputs, OutputFormat, print_json};
use crate::config::CliConfig;

/// List the power rating and class of each design slot
#[derive(Parser)]
pub struct Designs {
    #[command(flatten)]
    input: InputArgs,

    /// Player whose designs are rated
    #[arg(long, value_name = "PLAYER")]
    player: u8,
}

#[derive(Serialize)]
struct DesignOutput {
    slot: DesignSlot,
    class: ShipClass,
    power: Option<PowerBreakdown>,
    /// Error code when the rating failed.
    error: Option<String>,
}

impl Designs {
    pub fn execute(self, cli: &CliConfig) -> Result<()> {
        let inputs = Inputs::load(&self.input, cli)?;
        let bundle = SnapshotOracleBundle::new(&inputs.oracles);
        let engine = ScoreEngine::with_config(&inputs.turn, bundle.as_env(), inputs.config.clone());
        let player = PlayerId(self.player);

        let rows = design_rows(&engine, player)?;

        match self.input.format {
            OutputFormat::Json => print_json(&rows),
            OutputFormat::Table => {
                print_designs(player, &rows);
                Ok(())
            }
        }
    }
}

/// One row per design slot, built from the engine's classification.
fn design_rows(engine: &ScoreEngine<'_>, player: PlayerId) -> Result<Vec<DesignOutput>> {
    let designs = &engine
        .state()
        .player(player)
        .ok_or_else(|| anyhow::anyhow!("player {} not found", player))?
        .designs;

    let ratings = engine
        .classify_designs(player)
        .map_err(|e| anyhow::anyhow!("{}: {}", e.error_code(), e))?;

    let rows = ratings
        .into_iter()
        .zip(designs.iter())
        .map(|(rating, design)| {
            // Substituted ratings come back unrated; recover the cause for display.
            let error = match rating.breakdown {
                None if !design.is_deleted() => engine
                    .design_power(player, rating.slot)
                    .err()
                    .map(|err| err.error_code().to_string()),
                _ => None,
            };
            DesignOutput {
                slot: rating.slot,
                class: rating.class,
                power: rating.breakdown,
                error,
            }
        })
        .collect();
    Ok(rows)
}

fn print_designs(player: PlayerId, rows: &[DesignOutput]) {
    println!("{}", style(format!("=== Designs of {} ===", player)).bold().green());
    println!();
    println!(
        "{:<8} {:<8} {:>6} {:>6} {:>6} {:>5} {:>6} {:>6}",
        "Slot", "Class", "Beam", "Torp", "Bomb", "Cap%", "Speed", "Power"
    );
    for row in rows {
        match (&row.power, &row.error) {
            (Some(power), _) => println!(
                "{:<8} {:<8} {:>6} {:>6} {:>6} {:>5} {:>6} {:>6}",
                row.slot.to_string(),
                row.class.to_string(),
                power.beam,
                power.torpedo,
                power.bomb,
                power.capacitor_pct.map_or_else(|| "-".to_string(), |pct| pct.to_string()),
                power.speed,
                power.total()
            ),
            (None, Some(error)) => println!(
                "{:<8} {:<8} {}",
                row.slot.to_string(),
                row.class.to_string(),
                style(error).red()
            ),
            (None, None) => println!(
                "{:<8} {}",
                row.slot.to_string(),
                style(row.class.to_string()).dim()
            ),
        }
    }
}
