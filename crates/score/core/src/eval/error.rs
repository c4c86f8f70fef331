//! Evaluator errors.

use crate::env::OracleError;
use crate::error::{ErrorKind, ErrorSeverity, GameError};
use crate::state::{DesignSlot, EnvAxis, PlanetId, PlayerId, StateError};

/// A divisor or square-root operand that a formula needs to be non-zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Degenerate {
    /// The ideal value coincides with the tolerance bound on the planet's side.
    #[error("{axis} tolerance half-range is zero")]
    ToleranceRangeHalf { axis: EnvAxis },

    #[error("colonists per resource is zero")]
    ColonistsPerResource,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EvalError {
    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    State(#[from] StateError),

    #[error("player {0} not found")]
    UnknownPlayer(PlayerId),

    #[error("planet {0} not found")]
    UnknownPlanet(PlanetId),

    #[error("player {player} has no design {slot}")]
    DesignSlotOutOfRange { player: PlayerId, slot: DesignSlot },

    #[error("player {player}: {degenerate}")]
    ArithmeticDegenerate {
        player: PlayerId,
        degenerate: Degenerate,
    },
}

impl EvalError {
    pub fn degenerate(player: PlayerId, degenerate: Degenerate) -> Self {
        Self::ArithmeticDegenerate { player, degenerate }
    }

    /// Returns true if no evaluation of this player can succeed, regardless of
    /// failure policy.
    pub fn is_structural(&self) -> bool {
        match self {
            Self::UnknownPlayer(_) | Self::State(_) => true,
            Self::Oracle(err) => err.severity() == ErrorSeverity::Fatal,
            _ => false,
        }
    }
}

impl GameError for EvalError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Oracle(err) => err.severity(),
            Self::State(err) => err.severity(),
            Self::UnknownPlayer(_) | Self::UnknownPlanet(_) | Self::DesignSlotOutOfRange { .. } => {
                ErrorSeverity::Validation
            }
            Self::ArithmeticDegenerate { .. } => ErrorSeverity::Internal,
        }
    }

    fn kind(&self) -> ErrorKind {
        match self {
            Self::Oracle(err) => err.kind(),
            Self::State(err) => err.kind(),
            Self::UnknownPlayer(_) | Self::UnknownPlanet(_) | Self::DesignSlotOutOfRange { .. } => {
                ErrorKind::InvalidReference
            }
            Self::ArithmeticDegenerate { .. } => ErrorKind::ArithmeticDegenerate,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::Oracle(err) => err.error_code(),
            Self::State(err) => err.error_code(),
            Self::UnknownPlayer(_) => "EVAL_UNKNOWN_PLAYER",
            Self::UnknownPlanet(_) => "EVAL_UNKNOWN_PLANET",
            Self::DesignSlotOutOfRange { .. } => "EVAL_DESIGN_SLOT_OUT_OF_RANGE",
            Self::ArithmeticDegenerate {
                degenerate: Degenerate::ToleranceRangeHalf { .. },
                ..
            } => "EVAL_DEGENERATE_TOLERANCE_RANGE",
            Self::ArithmeticDegenerate {
                degenerate: Degenerate::ColonistsPerResource,
                ..
            } => "EVAL_DEGENERATE_COLONISTS_PER_RESOURCE",
        }
    }
}
