//! Turn snapshot validation errors.

use super::types::{DesignSlot, EnvAxis, FleetId, PlanetId, PlayerId};
use crate::error::{ErrorKind, ErrorSeverity, GameError};

/// A turn snapshot violates one of its structural invariants.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateError {
    #[error("planet {planet} has {axis} value {value} outside 1..=100")]
    EnvironmentOutOfDomain {
        planet: PlanetId,
        axis: EnvAxis,
        value: i16,
    },

    #[error("player {player} {axis} tolerance is not ordered (min {min}, ideal {ideal}, max {max})")]
    ToleranceInverted {
        player: PlayerId,
        axis: EnvAxis,
        min: i16,
        ideal: i16,
        max: i16,
    },

    #[error("player id {0} exceeds the player table")]
    PlayerOutOfRange(PlayerId),

    #[error("player {0} appears more than once")]
    DuplicatePlayer(PlayerId),

    #[error("planet {0} appears more than once")]
    DuplicatePlanet(PlanetId),

    #[error("planet {planet} is owned by unknown player {owner}")]
    UnknownOwner { planet: PlanetId, owner: PlayerId },

    #[error("fleet {fleet} is owned by unknown player {owner}")]
    UnknownFleetOwner { fleet: FleetId, owner: PlayerId },

    #[error("planet {planet} references starbase design slot {slot} outside the design table")]
    StarbaseSlotOutOfRange { planet: PlanetId, slot: DesignSlot },
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn kind(&self) -> ErrorKind {
        use StateError::*;
        match self {
            UnknownOwner { .. } | UnknownFleetOwner { .. } | StarbaseSlotOutOfRange { .. } => {
                ErrorKind::InvalidReference
            }
            EnvironmentOutOfDomain { .. }
            | ToleranceInverted { .. }
            | PlayerOutOfRange(_)
            | DuplicatePlayer(_)
            | DuplicatePlanet(_) => ErrorKind::MalformedState,
        }
    }

    fn error_code(&self) -> &'static str {
        use StateError::*;
        match self {
            EnvironmentOutOfDomain { .. } => "STATE_ENVIRONMENT_OUT_OF_DOMAIN",
            ToleranceInverted { .. } => "STATE_TOLERANCE_INVERTED",
            PlayerOutOfRange(_) => "STATE_PLAYER_OUT_OF_RANGE",
            DuplicatePlayer(_) => "STATE_DUPLICATE_PLAYER",
            DuplicatePlanet(_) => "STATE_DUPLICATE_PLANET",
            UnknownOwner { .. } => "STATE_UNKNOWN_OWNER",
            UnknownFleetOwner { .. } => "STATE_UNKNOWN_FLEET_OWNER",
            StarbaseSlotOutOfRange { .. } => "STATE_STARBASE_SLOT_OUT_OF_RANGE",
        }
    }
}
