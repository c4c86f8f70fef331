//! Evaluate one planet for one player.

use anyhow::Result;
use clap::Parser;
use console::style;
use score_core::{PlanetId, PlanetResources, PlayerId, ScoreEngine, SnapshotOracleBundle};
use serde::Serialize;

use super::{InputArgs, Inputs, OutputFormat, print_json};
use crate::config::CliConfig;

/// Show habitability, capacity and resources of a planet for a player
#[derive(Parser)]
pub struct PlanetInfo {
    #[command(flatten)]
    input: InputArgs,

    /// Player the planet is evaluated for
    #[arg(long, value_name = "PLAYER")]
    player: u8,

    /// Planet id
    #[arg(long, value_name = "PLANET")]
    planet: u16,
}

#[derive(Serialize)]
struct PlanetOutput {
    player: PlayerId,
    habitability: Option<i16>,
    resources: PlanetResources,
}

impl PlanetInfo {
    pub fn execute(self, cli: &CliConfig) -> Result<()> {
        let inputs = Inputs::load(&self.input, cli)?;
        let bundle = SnapshotOracleBundle::new(&inputs.oracles);
        let engine = ScoreEngine::with_config(&inputs.turn, bundle.as_env(), inputs.config.clone());

        let player = PlayerId(self.player);
        let planet = PlanetId(self.planet);

        let resources = engine.planet_resources(planet, player)?;
        // Alternate Reality races never consult habitability.
        let race = &engine
            .state()
            .player(player)
            .ok_or_else(|| anyhow::anyhow!("player {} not found", player))?
            .race;
        let habitability = if race.primary_trait.is_alternate_reality() {
            None
        } else {
            Some(engine.habitability(planet, player)?)
        };

        let output = PlanetOutput {
            player,
            habitability,
            resources,
        };
        match self.input.format {
            OutputFormat::Json => print_json(&output),
            OutputFormat::Table => {
                print_planet(&output);
                Ok(())
            }
        }
    }
}

fn print_planet(output: &PlanetOutput) {
    let resources = &output.resources;
    println!(
        "{}",
        style(format!("=== Planet {} for {} ===", resources.planet, output.player))
            .bold()
            .green()
    );
    println!();
    match output.habitability {
        Some(habitability) => println!("  Habitability:         {}%", habitability),
        None => println!("  Habitability:         n/a (orbital population)"),
    }
    println!("  Max population:       {}", resources.max_population);
    println!("  Effective population: {}", resources.effective_population);
    println!("  From population:      {}", resources.from_population);
    println!("  From factories:       {}", resources.from_factories);
    println!("  Resources:            {}", resources.resources);
}
