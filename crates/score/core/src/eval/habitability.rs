//! Planet habitability for a race, in `-45..=100`.

use super::arith::sqrt_trunc;
use super::error::{Degenerate, EvalError};
use crate::state::{EnvAxis, Environment, Planet, Player, StateError};

/// Comfort credited to an axis the race is immune to.
const IMMUNE_COMFORT: i64 = 10_000;
/// Largest penalty a single hostile axis contributes.
const MAX_AXIS_PENALTY: i64 = 15;
/// Fixed-point unity of the comfort modifier (100.00%).
const MODIFIER_UNIT: i64 = 10_000;

/// Scores how suitable `planet` is for `player`'s race.
///
/// Positive results are the truncated root of the mean squared comfort, scaled
/// down when a value sits in the outer half of a tolerance window. Any axis
/// outside its window makes the result the negated sum of capped distances.
///
/// # Errors
///
/// - [`StateError::EnvironmentOutOfDomain`] for environment values outside `1..=100`
/// - [`StateError::ToleranceInverted`] for an unordered, non-immune tolerance
/// - [`Degenerate::ToleranceRangeHalf`] when the ideal sits on the bound facing the value
pub fn planet_habitability(planet: &Planet, player: &Player) -> Result<i16, EvalError> {
    let mut positive: i64 = 0;
    let mut negative: i64 = 0;
    let mut modifier: i64 = MODIFIER_UNIT;

    for axis in EnvAxis::ALL {
        let value = planet.environment.get(axis);
        if !Environment::in_domain(value) {
            return Err(StateError::EnvironmentOutOfDomain {
                planet: planet.id,
                axis,
                value,
            }
            .into());
        }

        let tol = player.race.tolerance(axis);
        if tol.is_immune() {
            positive += IMMUNE_COMFORT;
            continue;
        }
        if !(tol.min <= tol.ideal && tol.ideal <= tol.max) {
            return Err(StateError::ToleranceInverted {
                player: player.id,
                axis,
                min: tol.min,
                ideal: tol.ideal,
                max: tol.max,
            }
            .into());
        }

        let (value, ideal, min, max) = (
            i64::from(value),
            i64::from(tol.ideal),
            i64::from(tol.min),
            i64::from(tol.max),
        );

        if !tol.contains(planet.environment.get(axis)) {
            let distance = if value < min { min - value } else { value - max };
            negative += distance.min(MAX_AXIS_PENALTY);
            continue;
        }

        let distance = (value - ideal).abs();
        let range_half = if value < ideal { ideal - min } else { max - ideal };
        if range_half == 0 {
            return Err(EvalError::degenerate(
                player.id,
                Degenerate::ToleranceRangeHalf { axis },
            ));
        }

        let pct = distance * 100 / range_half;
        positive += (100 - pct) * (100 - pct);

        let penalty = distance * 2 - range_half;
        if penalty > 0 {
            modifier = modifier * (range_half * 2 - penalty) / (range_half * 2);
        }
    }

    let result = if negative == 0 {
        let base = sqrt_trunc(positive as f64 / 3.0);
        base * modifier / MODIFIER_UNIT
    } else {
        -negative
    };

    tracing::trace!(
        "habitability of {} for {}: {} (comfort {}, modifier {})",
        planet.id,
        player.id,
        result,
        positive,
        modifier
    );

    Ok(result as i16)
}
