//! Common error infrastructure for game-core.
//!
//! Play never fails: an out-of-range or unreadable selection is narrated and
//! the scenario moves on. The only failures are construction-time ones, where
//! content tables or combatant stats would break an invariant the play loop
//! relies on. Those are rejected eagerly so a campaign is either fully valid
//! or never built.

/// Severity level of an error, used for categorization and recovery strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input, should not retry without changes.
    ///
    /// Examples: mismatched choice tables, zero attack power
    Validation,

    /// Unrecoverable, the content cannot be played at all.
    ///
    /// Examples: a campaign with no scenarios
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }
}

/// Common trait for all game-core errors.
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}

/// Content that violates a construction-time invariant.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ContentError {
    #[error(
        "choice tables differ in length: {choices} choices, {outcomes} outcomes, {results} results"
    )]
    MismatchedChoiceTables {
        choices: usize,
        outcomes: usize,
        results: usize,
    },

    #[error("choice scenario has no options")]
    EmptyChoices,

    #[error("combatant '{name}' must start with positive health (got {health})")]
    NonPositiveHealth { name: String, health: i32 },

    #[error("combatant '{name}' must have positive attack power (got {attack_power})")]
    NonPositiveAttack { name: String, attack_power: i32 },

    #[error("heal amount must be positive (got {amount})")]
    NonPositiveHealAmount { amount: i32 },

    #[error("campaign has no scenarios")]
    EmptyCampaign,
}

impl GameError for ContentError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::EmptyCampaign => ErrorSeverity::Fatal,
            _ => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MismatchedChoiceTables { .. } => "MISMATCHED_CHOICE_TABLES",
            Self::EmptyChoices => "EMPTY_CHOICES",
            Self::NonPositiveHealth { .. } => "NON_POSITIVE_HEALTH",
            Self::NonPositiveAttack { .. } => "NON_POSITIVE_ATTACK",
            Self::NonPositiveHealAmount { .. } => "NON_POSITIVE_HEAL_AMOUNT",
            Self::EmptyCampaign => "EMPTY_CAMPAIGN",
        }
    }
}
