use std::fmt;

use serde::{Deserialize, Serialize};

/// Canonical English name of the general command role.
const GENERAL: &str = "General";
/// Substring identifying the battle-standard command role.
const BATTLE_STANDARD: &str = "Battle Standard Bearer";
/// Mount name meaning the unit has no actual mount.
const ON_FOOT: &str = "On foot";

/// Composite unit identifier: `"<base>.<suffix>"`.
///
/// The base id (everything before the first `.`) is the unit-type
/// identity that rule entries match on; the suffix distinguishes
/// multiple copies of the same unit type within one list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnitId(String);

impl UnitId {
    /// Create a unit id from its full composite form.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The unit-type identity: everything before the first `.`.
    pub fn base(&self) -> &str {
        self.0.split('.').next().unwrap_or(&self.0)
    }

    /// The full composite id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A command-group upgrade on a unit (champion, standard, General, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandOption {
    /// English canonical name. Role detection matches on this field.
    pub name_en: String,
    /// Whether the upgrade is currently taken.
    #[serde(default)]
    pub active: bool,
}

/// A mount choice on a unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MountOption {
    /// English canonical name of the mount.
    pub name_en: String,
    /// Whether the mount is currently selected.
    #[serde(default)]
    pub active: bool,
}

/// A wargear or upgrade option on a unit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnitOption {
    /// Option identifier referenced by rule entries.
    pub id: String,
    /// Whether the option is currently taken.
    #[serde(default)]
    pub active: bool,
}

/// A single magic item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    /// Item name as printed in the army book.
    pub name: String,
}

/// One magic-item slot on a unit (talismans, enchanted items, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemSlot {
    /// Items currently selected in this slot.
    #[serde(default)]
    pub selected: Vec<Item>,
}

/// A single roster entry.
///
/// Units are value-like records owned by the roster. The validation
/// engine only ever reads them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    /// Composite identifier; the base part is the unit-type identity.
    pub id: UnitId,
    /// Display name, resolved upstream. Used verbatim in violation
    /// messages that name actual roster units.
    pub name: String,
    /// Points cost of the unit as configured.
    #[serde(default)]
    pub points: u32,
    /// Command-group upgrades.
    #[serde(default)]
    pub command: Vec<CommandOption>,
    /// Mount choices.
    #[serde(default)]
    pub mounts: Vec<MountOption>,
    /// Wargear and upgrade options.
    #[serde(default)]
    pub options: Vec<UnitOption>,
    /// Magic-item slots.
    #[serde(default)]
    pub items: Vec<ItemSlot>,
}

impl Unit {
    /// Create a unit with the given id and display name and nothing
    /// else selected.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: UnitId::new(id),
            name: name.into(),
            points: 0,
            command: Vec::new(),
            mounts: Vec::new(),
            options: Vec::new(),
            items: Vec::new(),
        }
    }

    /// True if an active command entry is named exactly "General".
    ///
    /// Role detection is a string contract at the data-ingestion
    /// boundary: the English canonical name decides, nothing else.
    pub fn is_general(&self) -> bool {
        self.command.iter().any(|c| c.active && c.name_en == GENERAL)
    }

    /// True if an active command entry contains "Battle Standard
    /// Bearer" (substring match, so army-specific standard names like
    /// "Skaven Battle Standard Bearer" qualify).
    pub fn is_battle_standard_bearer(&self) -> bool {
        self.command
            .iter()
            .any(|c| c.active && c.name_en.contains(BATTLE_STANDARD))
    }

    /// True if the unit rides an active mount other than "On foot".
    pub fn is_mounted(&self) -> bool {
        self.mounts
            .iter()
            .any(|m| m.active && m.name_en != ON_FOOT)
    }

    /// True if the option with the given id is taken.
    pub fn has_active_option(&self, option_id: &str) -> bool {
        self.options.iter().any(|o| o.active && o.id == option_id)
    }

    /// True if any item slot has an item with the given name selected.
    pub fn carries_item(&self, item_name: &str) -> bool {
        self.items
            .iter()
            .any(|slot| slot.selected.iter().any(|item| item.name == item_name))
    }
}
