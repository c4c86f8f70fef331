use core::fmt;

use crate::error::GameError;
use crate::eval::{EvalError, PlanetResources, PowerBreakdown, Score, ShipClass, ShipTally};
use crate::state::{DesignSlot, PlanetId};

/// A sub-computation that failed and was replaced by its documented default.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Substitution {
    /// Planet contributed 0 resources.
    PlanetResources { planet: PlanetId, error: EvalError },
    /// Starbase was not counted.
    Starbase { planet: PlanetId, error: EvalError },
    /// Design was excluded like a deleted slot.
    DesignPower { slot: DesignSlot, error: EvalError },
}

impl Substitution {
    pub fn error(&self) -> &EvalError {
        match self {
            Self::PlanetResources { error, .. }
            | Self::Starbase { error, .. }
            | Self::DesignPower { error, .. } => error,
        }
    }
}

impl fmt::Display for Substitution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlanetResources { planet, error } => {
                write!(f, "planet {planet} resources set to 0 ({})", error.error_code())
            }
            Self::Starbase { planet, error } => {
                write!(f, "starbase at planet {planet} not counted ({})", error.error_code())
            }
            Self::DesignPower { slot, error } => {
                write!(f, "design {slot} excluded ({})", error.error_code())
            }
        }
    }
}

/// Power rating and class of one design slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DesignRating {
    pub slot: DesignSlot,
    pub class: ShipClass,
    /// `None` for deleted or substituted designs.
    pub breakdown: Option<PowerBreakdown>,
}

impl DesignRating {
    /// A deleted slot, or one whose rating was substituted.
    pub(crate) fn unrated(slot: DesignSlot) -> Self {
        Self {
            slot,
            class: ShipClass::Deleted,
            breakdown: None,
        }
    }

    pub(crate) fn rated(slot: DesignSlot, breakdown: PowerBreakdown) -> Self {
        Self {
            slot,
            class: breakdown.class(),
            breakdown: Some(breakdown),
        }
    }

    pub fn power(&self) -> Option<i64> {
        self.breakdown.map(|breakdown| breakdown.total())
    }
}

/// Full outcome of scoring one player.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreReport {
    pub score: Score,
    /// Ship tallies before packing.
    pub tally: ShipTally,
    pub designs: Vec<DesignRating>,
    pub planets: Vec<PlanetResources>,
    pub substitutions: Vec<Substitution>,
}

impl ScoreReport {
    pub fn is_exact(&self) -> bool {
        self.substitutions.is_empty()
    }

    pub fn design(&self, slot: DesignSlot) -> Option<&DesignRating> {
        self.designs.iter().find(|rating| rating.slot == slot)
    }
}
