//! Common error infrastructure for score-core.
//!
//! Domain errors live next to the code that raises them: [`crate::env::OracleError`]
//! for oracle lookups, [`crate::state::StateError`] for malformed snapshots and
//! [`crate::eval::EvalError`] for the evaluators. Each implements [`GameError`] so
//! callers can classify failures uniformly.

/// Severity level of an error, used for categorization and logging.
///
/// - **Validation**: the snapshot or a reference in it is invalid
/// - **Internal**: an arithmetic precondition the evaluators rely on was violated
/// - **Fatal**: a required oracle is missing, so no evaluation can run
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input; rejecting it is the expected outcome.
    Validation,

    /// Degenerate data reached a division or square root.
    Internal,

    /// The engine cannot proceed at all.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Error taxonomy shared by every evaluator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ErrorKind {
    /// An id does not resolve: player, planet, design slot, hull, part or table entry.
    InvalidReference,
    /// A value lies outside its documented domain.
    MalformedState,
    /// A divisor or square-root operand the formula needs is zero.
    ArithmeticDegenerate,
}

/// Common trait for all score-core errors.
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Taxonomy bucket of this error.
    fn kind(&self) -> ErrorKind;

    /// Stable identifier for this error variant, used in logs and tests.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
