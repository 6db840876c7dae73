//! Violation records returned by the validation engine.
//!
//! Violations are data, not errors: the engine reports every legality
//! problem it finds in one flat, ordered list and leaves rendering to
//! the caller. Kinds serialize to the message ids a UI layer
//! interpolates.

use std::fmt;

use hm_core::Section;
use serde::Serialize;

/// The kind of a legality violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ViolationKind {
    /// No unit holds the General command role.
    NoGeneral,
    /// More than one unit holds the General command role.
    MultipleGenerals,
    /// More than one unit carries the Battle Standard.
    #[serde(rename = "multipleBSBs")]
    MultipleBsbs,
    /// Fewer matching units than the rule's minimum.
    MinUnits,
    /// More matching units than the rule's maximum.
    MaxUnits,
    /// The army general is not one of the required unit types.
    RequiresGeneral,
    /// A required option is not active.
    RequiresOption,
    /// Matched units must be mounted but are on foot.
    RequiresMounted,
    /// Matched units lack the other units they depend on.
    RequiresUnits,
    /// No general carries the required magic item.
    RequiresMagicItem,
}

/// One reported legality problem.
///
/// The optional fields carry interpolation data for the kind at hand;
/// absent fields are skipped during serialization. Emission order is
/// significant and preserved — callers must not expect any sorting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Violation {
    /// What went wrong.
    pub kind: ViolationKind,
    /// The roster section the finding is attributed to.
    pub section: Section,
    /// Display names involved, already joined for interpolation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// The effective minimum that was not met.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<u32>,
    /// How far over the allowance the roster is.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff: Option<u32>,
    /// Display name of the option that must be active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub option: Option<String>,
}

impl Violation {
    /// A violation with no interpolation data.
    pub fn new(kind: ViolationKind, section: Section) -> Self {
        Self {
            kind,
            section,
            name: None,
            min: None,
            diff: None,
            option: None,
        }
    }

    /// Too few units of the named types.
    pub fn min_units(section: Section, name: String, min: u32) -> Self {
        Self {
            name: Some(name),
            min: Some(min),
            ..Self::new(ViolationKind::MinUnits, section)
        }
    }

    /// Too many of the named units.
    pub fn max_units(section: Section, name: String, diff: u32) -> Self {
        Self {
            name: Some(name),
            diff: Some(diff),
            ..Self::new(ViolationKind::MaxUnits, section)
        }
    }

    /// The general must be one of the named unit types.
    pub fn requires_general(section: Section, name: String) -> Self {
        Self {
            name: Some(name),
            ..Self::new(ViolationKind::RequiresGeneral, section)
        }
    }

    /// The named unit must have the named option active.
    pub fn requires_option(section: Section, name: String, option: String) -> Self {
        Self {
            name: Some(name),
            option: Some(option),
            ..Self::new(ViolationKind::RequiresOption, section)
        }
    }

    /// The named units must be mounted.
    pub fn requires_mounted(section: Section, name: String) -> Self {
        Self {
            name: Some(name),
            ..Self::new(ViolationKind::RequiresMounted, section)
        }
    }

    /// More of the named units are needed before these can be fielded.
    pub fn requires_units(section: Section, name: String, diff: u32) -> Self {
        Self {
            name: Some(name),
            diff: Some(diff),
            ..Self::new(ViolationKind::RequiresUnits, section)
        }
    }

    /// A general must carry the named magic item.
    pub fn requires_magic_item(section: Section, name: String) -> Self {
        Self {
            name: Some(name),
            ..Self::new(ViolationKind::RequiresMagicItem, section)
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name.as_deref().unwrap_or("units");
        match self.kind {
            ViolationKind::NoGeneral => write!(f, "no unit leads the army as General"),
            ViolationKind::MultipleGenerals => {
                write!(f, "more than one unit is marked as General")
            }
            ViolationKind::MultipleBsbs => {
                write!(f, "more than one unit carries the Battle Standard")
            }
            ViolationKind::MinUnits => {
                write!(f, "needs at least {} {name}", self.min.unwrap_or(0))
            }
            ViolationKind::MaxUnits => {
                write!(f, "{} too many of {name}", self.diff.unwrap_or(0))
            }
            ViolationKind::RequiresGeneral => {
                write!(f, "requires {name} as the army general")
            }
            ViolationKind::RequiresOption => write!(
                f,
                "{name} requires the {} option",
                self.option.as_deref().unwrap_or("required")
            ),
            ViolationKind::RequiresMounted => write!(f, "{name} must be mounted"),
            ViolationKind::RequiresUnits => {
                write!(f, "{} more than the fielded {name} allow", self.diff.unwrap_or(0))
            }
            ViolationKind::RequiresMagicItem => {
                write!(f, "a general must carry {name}")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_serialize_to_message_ids() {
        let cases = [
            (ViolationKind::NoGeneral, "\"noGeneral\""),
            (ViolationKind::MultipleGenerals, "\"multipleGenerals\""),
            (ViolationKind::MultipleBsbs, "\"multipleBSBs\""),
            (ViolationKind::MinUnits, "\"minUnits\""),
            (ViolationKind::MaxUnits, "\"maxUnits\""),
            (ViolationKind::RequiresGeneral, "\"requiresGeneral\""),
            (ViolationKind::RequiresOption, "\"requiresOption\""),
            (ViolationKind::RequiresMounted, "\"requiresMounted\""),
            (ViolationKind::RequiresUnits, "\"requiresUnits\""),
            (ViolationKind::RequiresMagicItem, "\"requiresMagicItem\""),
        ];
        for (kind, expected) in cases {
            assert_eq!(serde_json::to_string(&kind).unwrap(), expected);
        }
    }

    #[test]
    fn absent_fields_are_skipped() {
        let violation = Violation::new(ViolationKind::NoGeneral, Section::Characters);
        let json = serde_json::to_string(&violation).unwrap();
        assert_eq!(json, r#"{"kind":"noGeneral","section":"characters"}"#);
    }

    #[test]
    fn interpolated_fields_serialize() {
        let violation = Violation::min_units(Section::Core, "State Troops".to_string(), 3);
        let json = serde_json::to_string(&violation).unwrap();
        assert!(json.contains("\"min\":3"));
        assert!(json.contains("\"name\":\"State Troops\""));
    }

    #[test]
    fn display_is_human_readable() {
        let violation = Violation::min_units(Section::Core, "State Troops".to_string(), 2);
        assert_eq!(violation.to_string(), "needs at least 2 State Troops");

        let violation = Violation::max_units(Section::Rare, "Steam Tank".to_string(), 1);
        assert_eq!(violation.to_string(), "1 too many of Steam Tank");

        let violation = Violation::new(ViolationKind::NoGeneral, Section::Characters);
        assert_eq!(violation.to_string(), "no unit leads the army as General");
    }
}
