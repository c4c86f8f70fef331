//! Player score aggregation.
//!
//! The [`ScoreEngine`] orchestrates the evaluators over one turn snapshot. A
//! player's score is built in five ordered phases:
//!
//! 1. planet scan: population points, starbases, resources
//! 2. tech scan (skipped for eliminated players)
//! 3. design classification, cached for the duration of the call
//! 4. fleet tally by class
//! 5. ship points
//!
//! Sub-computation failures are handled per [`FailurePolicy`]: either the
//! evaluation aborts, or the documented default is used and recorded in the
//! [`ScoreReport`].

mod report;
mod sheet;

pub use report::{DesignRating, ScoreReport, Substitution};
pub use sheet::{Ranking, ScoreSheet};

use crate::config::{FailurePolicy, ScoreConfig};
use crate::env::{HullOracle, OracleError, ScoreEnv};
use crate::eval::{
    self, EvalError, PlanetResources, PowerBreakdown, Score, ShipClass, ShipCounts, ShipTally,
    tech_points,
};
use crate::state::{DesignSlot, Planet, PlanetId, Player, PlayerId, TurnState};

/// Read-only scoring engine over one turn snapshot.
///
/// Holds only shared references, so one engine can score players from several
/// threads when the oracles are `Sync`.
pub struct ScoreEngine<'a> {
    state: &'a TurnState,
    env: ScoreEnv<'a>,
    config: ScoreConfig,
}

impl<'a> ScoreEngine<'a> {
    pub fn new(state: &'a TurnState, env: ScoreEnv<'a>) -> Self {
        Self::with_config(state, env, ScoreConfig::default())
    }

    pub fn with_config(state: &'a TurnState, env: ScoreEnv<'a>, config: ScoreConfig) -> Self {
        Self { state, env, config }
    }

    pub fn config(&self) -> &ScoreConfig {
        &self.config
    }

    pub fn state(&self) -> &'a TurnState {
        self.state
    }

    fn player(&self, id: PlayerId) -> Result<&'a Player, EvalError> {
        self.state.player(id).ok_or(EvalError::UnknownPlayer(id))
    }

    fn planet(&self, id: PlanetId) -> Result<&'a Planet, EvalError> {
        self.state.planet(id).ok_or(EvalError::UnknownPlanet(id))
    }

    // ========================================================================
    // Single evaluators
    // ========================================================================

    /// Habitability of a planet for a player's race, in `-45..=100`.
    pub fn habitability(&self, planet: PlanetId, player: PlayerId) -> Result<i16, EvalError> {
        eval::planet_habitability(self.planet(planet)?, self.player(player)?)
    }

    /// Maximum population of a planet for a player, in colonists.
    pub fn max_population(&self, planet: PlanetId, player: PlayerId) -> Result<i64, EvalError> {
        eval::max_population(
            self.planet(planet)?,
            self.player(player)?,
            self.env.tables()?,
        )
    }

    /// Resources a planet yields for a player this turn.
    pub fn planet_resources(
        &self,
        planet: PlanetId,
        player: PlayerId,
    ) -> Result<PlanetResources, EvalError> {
        eval::planet_resources(self.planet(planet)?, self.player(player)?, &self.env)
    }

    /// Power rating of one design slot, deleted or not.
    pub fn design_power(
        &self,
        player: PlayerId,
        slot: DesignSlot,
    ) -> Result<PowerBreakdown, EvalError> {
        let player = self.player(player)?;
        let design = player
            .design(slot)
            .ok_or(EvalError::DesignSlotOutOfRange {
                player: player.id,
                slot,
            })?;
        eval::design_power(player, slot, design, self.env.parts()?, self.env.rules()?)
    }

    /// Classifies every design slot of a player.
    ///
    /// Under [`FailurePolicy::Substitute`] a design whose power cannot be rated
    /// is reported as [`ShipClass::Deleted`].
    pub fn classify_designs(&self, player: PlayerId) -> Result<Vec<DesignRating>, EvalError> {
        let player = self.player(player)?;
        let mut substitutions = Vec::new();
        self.rate_designs(player, &mut substitutions)
    }

    // ========================================================================
    // Aggregation
    // ========================================================================

    /// Scores one player and returns the full report.
    ///
    /// # Errors
    ///
    /// Under [`FailurePolicy::Abort`], the first sub-computation failure. Under
    /// either policy, an unknown player, a missing oracle, or (when
    /// `validate_state` is set) a malformed snapshot.
    pub fn evaluate(&self, player: PlayerId) -> Result<ScoreReport, EvalError> {
        if self.config.validate_state {
            self.state.validate()?;
        }
        self.evaluate_player(self.player(player)?)
    }

    /// Legacy entry point: fills `out` with the full score and returns the
    /// 16-bit truncated total.
    pub fn calc_player_score(
        &self,
        player: PlayerId,
        out: Option<&mut Score>,
    ) -> Result<i16, EvalError> {
        let report = self.evaluate(player)?;
        if let Some(out) = out {
            *out = report.score;
        }
        Ok(report.score.legacy_total())
    }

    /// Scores every player in the snapshot.
    pub fn score_all(&self) -> Result<ScoreSheet, EvalError> {
        if self.config.validate_state {
            self.state.validate()?;
        }
        let mut scores = Vec::with_capacity(self.state.players.len());
        for id in self.state.player_ids() {
            let report = self.evaluate_player(self.player(id)?)?;
            scores.push(report.score);
        }
        tracing::info!(
            "scored {} players for year {}",
            scores.len(),
            self.state.year
        );
        Ok(ScoreSheet::new(self.state.year, scores))
    }

    fn evaluate_player(&self, player: &'a Player) -> Result<ScoreReport, EvalError> {
        let _span = tracing::debug_span!("score", player = %player.id).entered();
        let hulls = self.env.hulls()?;
        let pack = self.env.pack()?;

        let mut substitutions = Vec::new();
        let mut score = Score {
            player: player.id,
            ..Score::default()
        };

        // Phase 1: planets, starbases, resources.
        let mut planets = Vec::new();
        for planet in self.state.planets_owned_by(player.id) {
            score.planets += 1;
            score.total += (i64::from(planet.population) / ScoreConfig::POPULATION_PER_POINT)
                .min(ScoreConfig::MAX_POPULATION_POINTS);

            if let Some(slot) = planet.starbase {
                match starbase_has_dock(player, slot, hulls) {
                    Ok(true) => score.starbases += 1,
                    Ok(false) => {}
                    Err(error) => self.substitute(
                        &mut substitutions,
                        Substitution::Starbase {
                            planet: planet.id,
                            error,
                        },
                    )?,
                }
            }

            match eval::planet_resources(planet, player, &self.env) {
                Ok(resources) => {
                    score.resources += resources.resources;
                    planets.push(resources);
                }
                Err(error) => {
                    self.substitute(
                        &mut substitutions,
                        Substitution::PlanetResources {
                            planet: planet.id,
                            error,
                        },
                    )?;
                    planets.push(PlanetResources {
                        planet: planet.id,
                        ..PlanetResources::default()
                    });
                }
            }
        }
        score.total += score.resources / ScoreConfig::RESOURCES_PER_POINT
            + i64::from(score.starbases) * ScoreConfig::STARBASE_POINTS;
        tracing::debug!(
            "planets {} starbases {} resources {} -> {}",
            score.planets,
            score.starbases,
            score.resources,
            score.total
        );

        // Phase 2: tech levels.
        if !player.is_eliminated() {
            for level in player.tech.iter() {
                score.tech_levels += u32::from(level);
                score.total += tech_points(level);
            }
            tracing::debug!("tech levels {} -> {}", score.tech_levels, score.total);
        }

        // Phase 3: design classes, valid for this call only.
        let designs = self.rate_designs(player, &mut substitutions)?;

        // Phase 4: fleet tally.
        let mut tally = ShipTally::default();
        for fleet in self.state.fleets_owned_by(player.id) {
            if fleet.is_in_transit() {
                continue;
            }
            for (slot, count) in fleet.stacks() {
                let count = i64::from(count);
                match designs[slot.index()].class {
                    ShipClass::Deleted => {}
                    ShipClass::Unarmed => tally.unarmed += count,
                    ShipClass::Escort => tally.escort += count,
                    ShipClass::Capital => tally.capital += count,
                }
            }
        }

        // Phase 5: ship points.
        let planets_owned = i64::from(score.planets);
        score.total += tally.unarmed.min(planets_owned) / 2;
        if tally.capital > 0 {
            let numerator = i128::from(planets_owned) * i128::from(planets_owned)
                * i128::from(tally.capital);
            let bonus = numerator / i128::from(planets_owned + tally.capital);
            score.total += i64::try_from(bonus).unwrap_or(i64::MAX);
        }
        tracing::debug!(
            "ships {}/{}/{} -> {}",
            tally.unarmed,
            tally.escort,
            tally.capital,
            score.total
        );

        score.ships = ShipCounts {
            unarmed: pack.pack(tally.unarmed),
            escort: pack.pack(tally.escort),
            capital: pack.pack(tally.capital),
        };

        Ok(ScoreReport {
            score,
            tally,
            designs,
            planets,
            substitutions,
        })
    }

    fn rate_designs(
        &self,
        player: &Player,
        substitutions: &mut Vec<Substitution>,
    ) -> Result<Vec<DesignRating>, EvalError> {
        let parts = self.env.parts()?;
        let rules = self.env.rules()?;

        let mut ratings = Vec::with_capacity(ScoreConfig::MAX_DESIGNS);
        for (slot, design) in DesignSlot::all().zip(player.designs.iter()) {
            let rating = if design.is_deleted() {
                DesignRating::unrated(slot)
            } else {
                match eval::design_power(player, slot, design, parts, rules) {
                    Ok(power) => DesignRating::rated(slot, power),
                    Err(error) => {
                        self.substitute(substitutions, Substitution::DesignPower { slot, error })?;
                        DesignRating::unrated(slot)
                    }
                }
            };
            ratings.push(rating);
        }
        Ok(ratings)
    }

    /// Records `substitution`, or returns its error when the policy forbids it.
    fn substitute(
        &self,
        substitutions: &mut Vec<Substitution>,
        substitution: Substitution,
    ) -> Result<(), EvalError> {
        let error = substitution.error();
        if self.config.failure_policy == FailurePolicy::Abort || error.is_structural() {
            return Err(error.clone());
        }
        tracing::warn!("{}: {}", substitution, error);
        substitutions.push(substitution);
        Ok(())
    }
}

/// Whether the starbase in `slot` is a real starbase (its hull can dock fleets).
fn starbase_has_dock<H>(player: &Player, slot: DesignSlot, hulls: &H) -> Result<bool, EvalError>
where
    H: HullOracle + ?Sized,
{
    let design = player
        .design(slot)
        .ok_or(EvalError::DesignSlotOutOfRange {
            player: player.id,
            slot,
        })?;
    let hull = hulls
        .hull(design.hull)
        .ok_or(OracleError::HullNotFound(design.hull))?;
    Ok(hull.has_dock())
}
