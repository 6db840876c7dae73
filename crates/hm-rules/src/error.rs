//! Error types for the validation engine.
//!
//! Legality problems found in a roster are never errors — they are
//! returned as [`Violation`](crate::Violation) records. These variants
//! cover configuration faults where the engine cannot validate at all.

use crate::book::PointsBracket;

/// Alias for `Result<T, RulesError>`.
pub type RulesResult<T> = Result<T, RulesError>;

/// Configuration faults raised by the validation engine.
#[derive(Debug, thiserror::Error)]
pub enum RulesError {
    /// Neither the requested composition nor the default has a table.
    #[error("unknown composition \"{0}\" and no default table to fall back to")]
    UnknownComposition(String),

    /// The sixth-edition tables have no entry for this bracket and
    /// army. There is no fallback in that dialect: validating against
    /// nothing would silently hide every legality problem.
    #[error("no sixth-edition rules for army \"{army}\" ({bracket})")]
    MissingSixthRules {
        /// The point bracket that was selected.
        bracket: PointsBracket,
        /// The army key that had no table.
        army: String,
    },

    /// A rulebook failed to parse.
    #[error("invalid rulebook: {0}")]
    Parse(#[from] serde_json::Error),
}
