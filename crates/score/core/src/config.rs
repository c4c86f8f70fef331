/// How the aggregator reacts when a sub-computation fails.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum FailurePolicy {
    /// The first failure fails the whole evaluation.
    #[default]
    Abort,
    /// Failed sub-computations fall back to a fixed default and are recorded.
    Substitute,
}

/// Scoring configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScoreConfig {
    pub failure_policy: FailurePolicy,
    /// Run [`crate::TurnState::validate`] before scoring.
    pub validate_state: bool,
}

impl ScoreConfig {
    // ===== compile-time constants used as type parameters =====
    pub const MAX_PLAYERS: usize = 16;
    pub const MAX_DESIGNS: usize = 16;
    pub const MAX_HARDWARE_SLOTS: usize = 16;
    pub const TECH_FIELDS: usize = 6;
    pub const ENV_AXES: usize = 3;

    // ===== scoring rules =====
    /// Design power at or above which a ship counts as a capital ship.
    pub const CAPITAL_POWER: i64 = 2000;
    /// Colonists per population point.
    pub const POPULATION_PER_POINT: i64 = 1000;
    /// Cap on population points a single planet contributes.
    pub const MAX_POPULATION_POINTS: i64 = 6;
    /// Resources per resource point.
    pub const RESOURCES_PER_POINT: i64 = 30;
    /// Points per counted starbase.
    pub const STARBASE_POINTS: i64 = 3;

    pub fn new() -> Self {
        Self {
            failure_policy: FailurePolicy::default(),
            validate_state: true,
        }
    }

    #[must_use]
    pub fn with_failure_policy(mut self, failure_policy: FailurePolicy) -> Self {
        self.failure_policy = failure_policy;
        self
    }

    #[must_use]
    pub fn with_validation(mut self, validate_state: bool) -> Self {
        self.validate_state = validate_state;
        self
    }
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    #[test]
    fn defaults_abort_and_validate() {
        let config = ScoreConfig::default();
        assert_eq!(config.failure_policy, FailurePolicy::Abort);
        assert!(config.validate_state);
    }

    #[test]
    fn failure_policy_parses_case_insensitively() {
        assert_eq!(
            FailurePolicy::from_str("Substitute").unwrap(),
            FailurePolicy::Substitute
        );
        assert_eq!(FailurePolicy::Abort.as_ref(), "abort");
        assert!(FailurePolicy::from_str("retry").is_err());
    }
}
