//! Core types for Heermeister: rosters, units, and list metadata.
//!
//! This crate defines the data model that the validation engine in
//! `hm-rules` consumes. It is independent of any rulebook — you can
//! construct a [`Roster`] programmatically or deserialize one from JSON.

/// Error types used throughout the crate.
pub mod error;
/// Name resolution from identifiers to display names.
pub mod lexicon;
/// The roster: section buckets and list metadata.
pub mod roster;
/// Roster section names shared by both rule dialects.
pub mod section;
/// Unit records: command group, mounts, options, and magic items.
pub mod unit;

/// Re-export error types.
pub use error::{CoreError, CoreResult};
/// Re-export name-resolution types.
pub use lexicon::{MessageCatalog, NameResolver};
/// Re-export roster types.
pub use roster::{Edition, Roster};
/// Re-export the section type.
pub use section::Section;
/// Re-export unit types.
pub use unit::{Unit, UnitId};
