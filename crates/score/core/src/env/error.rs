//! Oracle access errors.

use crate::error::{ErrorKind, ErrorSeverity, GameError};
use crate::state::{HullId, PartCategory, PartId};

/// Errors that occur when accessing oracle data.
///
/// A missing oracle is fatal: no evaluation can run without hull, part, table,
/// rules and pack collaborators. A lookup miss is an invalid reference in the
/// turn snapshot.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OracleError {
    #[error("HullOracle not available")]
    HullsNotAvailable,

    #[error("PartOracle not available")]
    PartsNotAvailable,

    #[error("TablesOracle not available")]
    TablesNotAvailable,

    #[error("RulesOracle not available")]
    RulesNotAvailable,

    #[error("PackOracle not available")]
    PackNotAvailable,

    #[error("{0} not found")]
    HullNotFound(HullId),

    #[error("{category} {part} not found")]
    PartNotFound { category: PartCategory, part: PartId },

    #[error("no orbital capacity entry for {0}")]
    OrbitalEntryNotFound(HullId),
}

impl GameError for OracleError {
    fn severity(&self) -> ErrorSeverity {
        use OracleError::*;
        match self {
            HullsNotAvailable | PartsNotAvailable | TablesNotAvailable | RulesNotAvailable
            | PackNotAvailable => ErrorSeverity::Fatal,

            HullNotFound(_) | PartNotFound { .. } | OrbitalEntryNotFound(_) => {
                ErrorSeverity::Validation
            }
        }
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidReference
    }

    fn error_code(&self) -> &'static str {
        use OracleError::*;
        match self {
            HullsNotAvailable => "ORACLE_HULLS_NOT_AVAILABLE",
            PartsNotAvailable => "ORACLE_PARTS_NOT_AVAILABLE",
            TablesNotAvailable => "ORACLE_TABLES_NOT_AVAILABLE",
            RulesNotAvailable => "ORACLE_RULES_NOT_AVAILABLE",
            PackNotAvailable => "ORACLE_PACK_NOT_AVAILABLE",
            HullNotFound(_) => "ORACLE_HULL_NOT_FOUND",
            PartNotFound { .. } => "ORACLE_PART_NOT_FOUND",
            OrbitalEntryNotFound(_) => "ORACLE_ORBITAL_ENTRY_NOT_FOUND",
        }
    }
}
