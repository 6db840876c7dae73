use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::section::Section;
use crate::unit::Unit;

/// Which rule dialect governs a roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Edition {
    /// The modern dialect with a unified characters bucket.
    #[default]
    TheOldWorld,
    /// The legacy dialect with split lords and heroes buckets.
    SixthEdition,
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TheOldWorld => write!(f, "The Old World"),
            Self::SixthEdition => write!(f, "Sixth Edition"),
        }
    }
}

/// An army list: section buckets plus list metadata.
///
/// Every bucket exists on the struct and defaults to empty; the rule
/// dialect decides which ones are consulted. Sections are disjoint —
/// category reassignment happens upstream, before validation, so a
/// unit appears in exactly one bucket here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Roster {
    /// Display name of the list.
    pub name: String,
    /// Declared point budget for the list.
    pub points: u32,
    /// Modern-dialect composition key (e.g. `"grand-army"`).
    #[serde(default)]
    pub composition: String,
    /// Faction key, used as the sixth-edition table key.
    #[serde(default)]
    pub army: String,
    /// Which rule dialect governs this roster.
    #[serde(default)]
    pub edition: Edition,
    /// Unified character bucket (modern dialect).
    #[serde(default)]
    pub characters: Vec<Unit>,
    /// Lord-level characters (sixth edition).
    #[serde(default)]
    pub lords: Vec<Unit>,
    /// Hero-level characters (sixth edition).
    #[serde(default)]
    pub heroes: Vec<Unit>,
    /// Core units.
    #[serde(default)]
    pub core: Vec<Unit>,
    /// Special units.
    #[serde(default)]
    pub special: Vec<Unit>,
    /// Rare units.
    #[serde(default)]
    pub rare: Vec<Unit>,
    /// Allied contingents.
    #[serde(default)]
    pub allies: Vec<Unit>,
    /// Mercenary units.
    #[serde(default)]
    pub mercenaries: Vec<Unit>,
    /// When the list was created.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
    /// When the list was last modified.
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Roster {
    /// Create an empty list with the given name and point budget.
    pub fn new(name: impl Into<String>, points: u32) -> Self {
        let now = Utc::now();
        Self {
            name: name.into(),
            points,
            composition: String::new(),
            army: String::new(),
            edition: Edition::default(),
            characters: Vec::new(),
            lords: Vec::new(),
            heroes: Vec::new(),
            core: Vec::new(),
            special: Vec::new(),
            rare: Vec::new(),
            allies: Vec::new(),
            mercenaries: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// The units in the given section, in list order.
    pub fn units(&self, section: Section) -> &[Unit] {
        match section {
            Section::Characters => &self.characters,
            Section::Lords => &self.lords,
            Section::Heroes => &self.heroes,
            Section::Core => &self.core,
            Section::Special => &self.special,
            Section::Rare => &self.rare,
            Section::Allies => &self.allies,
            Section::Mercenaries => &self.mercenaries,
        }
    }

    /// Append a unit to a section bucket.
    pub fn add_unit(&mut self, section: Section, unit: Unit) {
        let bucket = match section {
            Section::Characters => &mut self.characters,
            Section::Lords => &mut self.lords,
            Section::Heroes => &mut self.heroes,
            Section::Core => &mut self.core,
            Section::Special => &mut self.special,
            Section::Rare => &mut self.rare,
            Section::Allies => &mut self.allies,
            Section::Mercenaries => &mut self.mercenaries,
        };
        bucket.push(unit);
        self.updated_at = Utc::now();
    }

    /// Total number of units across all buckets.
    pub fn unit_count(&self) -> usize {
        Section::all().iter().map(|&s| self.units(s).len()).sum()
    }

    /// Sum of the configured unit costs. Display only — the engine
    /// never does budget arithmetic with it.
    pub fn spent_points(&self) -> u32 {
        Section::all()
            .iter()
            .flat_map(|&s| self.units(s))
            .map(|u| u.points)
            .sum()
    }
}
