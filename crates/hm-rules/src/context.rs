//! Roster-wide facts shared by every rule check.

use hm_core::{Roster, Section, Unit};

/// Command-role context extracted once per validation call.
///
/// Several checks need to know which units hold the General role and
/// who carries the Battle Standard, so both sets are computed up front
/// and passed by reference into every rule evaluation instead of being
/// re-derived per entry.
#[derive(Debug)]
pub struct RosterContext<'a> {
    /// Units holding the General command role.
    pub generals: Vec<&'a Unit>,
    /// Units carrying the Battle Standard.
    pub bsbs: Vec<&'a Unit>,
}

impl<'a> RosterContext<'a> {
    /// Scan the given character-bearing sections of a roster.
    pub fn extract(roster: &'a Roster, sections: &[Section]) -> Self {
        let mut generals = Vec::new();
        let mut bsbs = Vec::new();
        for &section in sections {
            for unit in roster.units(section) {
                if unit.is_general() {
                    generals.push(unit);
                }
                if unit.is_battle_standard_bearer() {
                    bsbs.push(unit);
                }
            }
        }
        Self { generals, bsbs }
    }

    /// The first general whose base id is in the given set, if any.
    pub fn general_among(&self, ids: &[String]) -> Option<&'a Unit> {
        self.generals
            .iter()
            .copied()
            .find(|g| ids.iter().any(|id| id.as_str() == g.id.base()))
    }
}
