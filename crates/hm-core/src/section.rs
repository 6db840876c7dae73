use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A roster section.
///
/// The modern dialect buckets all characters together; the legacy
/// sixth-edition dialect splits them into lords and heroes. The
/// remaining sections are shared, so one enum covers every bucket a
/// roster can carry. Which buckets are actually consulted is decided
/// by the rule dialect, not by the roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Section {
    /// Unified character bucket (modern dialect).
    Characters,
    /// Lord-level characters (sixth edition).
    Lords,
    /// Hero-level characters (sixth edition).
    Heroes,
    /// Core units.
    Core,
    /// Special units.
    Special,
    /// Rare units.
    Rare,
    /// Allied contingents.
    Allies,
    /// Mercenary units.
    Mercenaries,
}

impl Section {
    /// All sections in roster display order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Characters,
            Self::Lords,
            Self::Heroes,
            Self::Core,
            Self::Special,
            Self::Rare,
            Self::Allies,
            Self::Mercenaries,
        ]
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Characters => write!(f, "characters"),
            Self::Lords => write!(f, "lords"),
            Self::Heroes => write!(f, "heroes"),
            Self::Core => write!(f, "core"),
            Self::Special => write!(f, "special"),
            Self::Rare => write!(f, "rare"),
            Self::Allies => write!(f, "allies"),
            Self::Mercenaries => write!(f, "mercenaries"),
        }
    }
}

impl FromStr for Section {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "characters" => Ok(Self::Characters),
            "lords" => Ok(Self::Lords),
            "heroes" => Ok(Self::Heroes),
            "core" => Ok(Self::Core),
            "special" => Ok(Self::Special),
            "rare" => Ok(Self::Rare),
            "allies" => Ok(Self::Allies),
            "mercenaries" => Ok(Self::Mercenaries),
            other => Err(CoreError::UnknownSection(other.to_string())),
        }
    }
}
