//! Roster validation engine for Heermeister.
//!
//! Takes an assembled army list plus the rulebook for its composition
//! and produces the complete, deterministic set of legality violations.
//! Two rule dialects are supported: the modern one with a unified
//! characters bucket and composition-keyed tables, and the legacy
//! sixth-edition one with split lords/heroes buckets and tables keyed
//! by point bracket and army.
//!
//! Validation never mutates the roster and never throws for legality
//! problems — those come back as [`Violation`] records. Only a missing
//! rule table is an actual error.

pub mod book;
pub mod context;
pub mod entry;
pub mod error;
pub mod evaluate;
pub mod names;
pub mod preset;
pub mod violation;

pub use book::{ArmyRules, DEFAULT_COMPOSITION, PointsBracket, Rulebook, SixthTables};
pub use context::RosterContext;
pub use entry::{DependencyGate, Gate, GeneralGate, OptionRef, RuleEntry, Scope};
pub use error::{RulesError, RulesResult};
pub use evaluate::{validate_roster, validate_sixth_roster};
pub use violation::{Violation, ViolationKind};
