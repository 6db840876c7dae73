//! Rule entries: count bounds plus typed requirement gates.
//!
//! One [`RuleEntry`] is one rulebook-table row. The count bound (min,
//! max, optional point scaling) lives on the entry itself; everything
//! conditional is expressed as a [`Gate`] attached to it. An entry may
//! carry several gates of different kinds — the evaluator runs each
//! kind's check in a fixed order, so authored gate order never affects
//! the produced violation order.

use hm_core::{Section, Unit};
use serde::{Deserialize, Serialize};

/// Reference to an option on a specific unit type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionRef {
    /// Base id of the unit type carrying the option.
    pub unit: String,
    /// Option id that must be active.
    pub id: String,
}

/// Where a dependency gate searches for its required units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// Every section the dialect exposes to roster-wide searches.
    All,
    /// A single named section.
    Section(Section),
}

/// Requirement carried by [`Gate::General`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneralGate {
    /// Base ids acceptable as the army general.
    pub requires: Vec<String>,
    /// The general must additionally have this option active.
    #[serde(default)]
    pub option: Option<OptionRef>,
}

/// Requirement carried by [`Gate::Dependency`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyGate {
    /// Base ids of the units this entry depends on.
    pub requires: Vec<String>,
    /// Sections searched for the required units.
    pub scope: Scope,
    /// Scale the allowance per required unit instead of flat.
    #[serde(default)]
    pub per_unit: bool,
}

/// A requirement gate on a rule entry.
///
/// Only the first gate of each kind on an entry is consulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Gate {
    /// The army general must be one of the required unit types.
    General(GeneralGate),
    /// Matched units of the referenced type must have the option
    /// active.
    Option(OptionRef),
    /// Matched units must ride an active mount.
    Mounted,
    /// Matched units are only allowed alongside the required units.
    Dependency(DependencyGate),
    /// Some general must carry the named magic item.
    MagicItem {
        /// Item name as it appears in a unit's selected items.
        item: String,
    },
}

/// One rulebook-table row: a count bound over a group of unit types,
/// plus the requirement gates that condition it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleEntry {
    /// Base ids this entry matches.
    pub ids: Vec<String>,
    /// Minimum number of matching units (0 = optional).
    #[serde(default)]
    pub min: u32,
    /// Maximum number of matching units. `None` means no cap — a
    /// requirement-style entry. `Some(0)` is a real zero bound.
    #[serde(default)]
    pub max: Option<u32>,
    /// When set, `min` and `max` apply once per full multiple of this
    /// many points in the roster's declared total.
    #[serde(default)]
    pub points: Option<u32>,
    /// Requirement gates attached to this entry.
    #[serde(default)]
    pub gates: Vec<Gate>,
}

impl RuleEntry {
    /// True if the unit's base id is one this entry governs.
    pub fn matches(&self, unit: &Unit) -> bool {
        self.ids.iter().any(|id| id.as_str() == unit.id.base())
    }

    /// Effective bounds for a roster total, applying point scaling.
    ///
    /// With `points` set, each bound is multiplied by the number of
    /// full point multiples in the roster total; a total below the
    /// threshold floors a capped bound to a real zero.
    pub fn scaled_bounds(&self, roster_points: u32) -> (u32, Option<u32>) {
        match self.points {
            Some(per) if per > 0 => {
                let multiples = roster_points / per;
                (self.min * multiples, self.max.map(|m| m * multiples))
            }
            _ => (self.min, self.max),
        }
    }

    /// First general gate on this entry, if any.
    pub fn general_gate(&self) -> Option<&GeneralGate> {
        self.gates.iter().find_map(|g| match g {
            Gate::General(gate) => Some(gate),
            _ => None,
        })
    }

    /// First standalone option gate on this entry, if any.
    pub fn option_gate(&self) -> Option<&OptionRef> {
        self.gates.iter().find_map(|g| match g {
            Gate::Option(option) => Some(option),
            _ => None,
        })
    }

    /// True if this entry requires its units to be mounted.
    pub fn requires_mount(&self) -> bool {
        self.gates.iter().any(|g| matches!(g, Gate::Mounted))
    }

    /// First dependency gate on this entry, if any.
    pub fn dependency_gate(&self) -> Option<&DependencyGate> {
        self.gates.iter().find_map(|g| match g {
            Gate::Dependency(gate) => Some(gate),
            _ => None,
        })
    }

    /// Item name of the first magic-item gate on this entry, if any.
    pub fn magic_item_gate(&self) -> Option<&str> {
        self.gates.iter().find_map(|g| match g {
            Gate::MagicItem { item } => Some(item.as_str()),
            _ => None,
        })
    }
}
