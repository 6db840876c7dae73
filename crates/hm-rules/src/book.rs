//! Rulebooks: composition-keyed rule tables and their lookup.
//!
//! The modern dialect keys its tables by composition name and falls
//! back to the grand-army default when a key has no table. The
//! sixth-edition dialect keys its tables by point bracket crossed with
//! army and has no fallback — an absent combination is a configuration
//! fault, never an empty rule set.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use hm_core::Section;
use serde::{Deserialize, Serialize};

use crate::entry::RuleEntry;
use crate::error::{RulesError, RulesResult};

/// Composition key used when a roster's own key has no table.
pub const DEFAULT_COMPOSITION: &str = "grand-army";

/// The rule tables of one composition: an ordered entry list per
/// section. Sections without a table yield an empty slice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArmyRules {
    sections: BTreeMap<Section, Vec<RuleEntry>>,
}

impl ArmyRules {
    /// Create an empty set of tables.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the entry list for a section, replacing any existing table.
    #[must_use]
    pub fn with_section(mut self, section: Section, entries: Vec<RuleEntry>) -> Self {
        self.sections.insert(section, entries);
        self
    }

    /// The ordered rule entries for a section.
    pub fn entries(&self, section: Section) -> &[RuleEntry] {
        match self.sections.get(&section) {
            Some(entries) => entries,
            None => &[],
        }
    }

    /// Sections with a table, in display order, with their entries.
    pub fn tables(&self) -> impl Iterator<Item = (Section, &[RuleEntry])> {
        self.sections.iter().map(|(&s, e)| (s, e.as_slice()))
    }
}

/// Point bracket selecting a sixth-edition sub-table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PointsBracket {
    /// Lists up to and including 2000 points.
    UpToTwoThousand,
    /// Lists above 2000 points.
    AboveTwoThousand,
}

impl PointsBracket {
    /// The bracket governing a roster's declared point total.
    pub fn for_points(points: u32) -> Self {
        if points > 2000 {
            Self::AboveTwoThousand
        } else {
            Self::UpToTwoThousand
        }
    }

    /// The section holding the army general in this bracket.
    pub fn general_section(self) -> Section {
        match self {
            Self::UpToTwoThousand => Section::Heroes,
            Self::AboveTwoThousand => Section::Lords,
        }
    }
}

impl fmt::Display for PointsBracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UpToTwoThousand => write!(f, "up to 2000 points"),
            Self::AboveTwoThousand => write!(f, "above 2000 points"),
        }
    }
}

/// Sixth-edition tables: one army map per point bracket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SixthTables {
    /// Tables for lists up to 2000 points, keyed by army.
    #[serde(default)]
    pub up_to_two_thousand: HashMap<String, ArmyRules>,
    /// Tables for lists above 2000 points, keyed by army.
    #[serde(default)]
    pub above_two_thousand: HashMap<String, ArmyRules>,
}

impl SixthTables {
    fn bracket(&self, bracket: PointsBracket) -> &HashMap<String, ArmyRules> {
        match bracket {
            PointsBracket::UpToTwoThousand => &self.up_to_two_thousand,
            PointsBracket::AboveTwoThousand => &self.above_two_thousand,
        }
    }
}

/// Every rule table the engine can validate against.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Rulebook {
    /// Modern-dialect tables keyed by composition.
    #[serde(default)]
    pub compositions: HashMap<String, ArmyRules>,
    /// Sixth-edition tables keyed by bracket and army.
    #[serde(default)]
    pub sixth: SixthTables,
}

impl Rulebook {
    /// Parse a rulebook from JSON.
    pub fn from_json(json: &str) -> RulesResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Modern lookup: the composition's tables, falling back to the
    /// grand-army default when the key has no table of its own.
    pub fn composition(&self, key: &str) -> RulesResult<&ArmyRules> {
        self.compositions
            .get(key)
            .or_else(|| self.compositions.get(DEFAULT_COMPOSITION))
            .ok_or_else(|| RulesError::UnknownComposition(key.to_string()))
    }

    /// Sixth-edition lookup by point bracket and army key. No
    /// fallback: a missing combination fails fast.
    pub fn sixth_army(&self, points: u32, army: &str) -> RulesResult<&ArmyRules> {
        let bracket = PointsBracket::for_points(points);
        self.sixth
            .bracket(bracket)
            .get(army)
            .ok_or_else(|| RulesError::MissingSixthRules {
                bracket,
                army: army.to_string(),
            })
    }

    /// Composition keys with tables, sorted for stable display.
    pub fn composition_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.compositions.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }
}
