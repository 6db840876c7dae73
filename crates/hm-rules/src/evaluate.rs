//! The rule evaluator: one pass over every (section, entry) pair.
//!
//! Both validation entry points share this evaluator. A dialect
//! profile decides which sections are consulted, which gates are
//! enabled, and where the command-role findings are attributed. The
//! sixth-edition dialect keeps its mount and unit-option gates
//! disabled, matching the composition documents it models.
//!
//! Checks are independent boolean gates, each firing on its own
//! condition, so a single rule entry can report several problems at
//! once. The engine favors a complete diagnosis over a terse verdict.

use hm_core::{NameResolver, Roster, Section, Unit};

use crate::book::{ArmyRules, PointsBracket, Rulebook};
use crate::context::RosterContext;
use crate::entry::{DependencyGate, RuleEntry, Scope};
use crate::error::RulesResult;
use crate::names::{join_ids_or, join_units_and, join_units_or, resolve_or_id};
use crate::violation::{Violation, ViolationKind};

/// Which checks a rule dialect runs and which roster shape it reads.
struct DialectProfile {
    /// Sections evaluated against rule tables, in emission order.
    section_order: &'static [Section],
    /// Sections scanned for command roles.
    command_sections: &'static [Section],
    /// Sections searched by dependency gates with [`Scope::All`].
    all_scope: &'static [Section],
    /// Section that general-cardinality findings are attributed to.
    general_section: Section,
    /// Section that battle-standard findings are attributed to.
    bsb_section: Section,
    /// Whether mount gates are evaluated.
    mounted_gates: bool,
    /// Whether standalone unit-option gates are evaluated.
    option_gates: bool,
}

impl DialectProfile {
    fn the_old_world() -> Self {
        Self {
            section_order: &[
                Section::Characters,
                Section::Core,
                Section::Special,
                Section::Rare,
                Section::Allies,
                Section::Mercenaries,
            ],
            command_sections: &[Section::Characters],
            all_scope: &[
                Section::Characters,
                Section::Core,
                Section::Special,
                Section::Rare,
            ],
            general_section: Section::Characters,
            bsb_section: Section::Characters,
            mounted_gates: true,
            option_gates: true,
        }
    }

    fn sixth_edition(bracket: PointsBracket) -> Self {
        Self {
            section_order: &[
                Section::Lords,
                Section::Heroes,
                Section::Core,
                Section::Special,
                Section::Rare,
            ],
            command_sections: &[Section::Lords, Section::Heroes],
            all_scope: &[
                Section::Lords,
                Section::Heroes,
                Section::Core,
                Section::Special,
                Section::Rare,
            ],
            general_section: bracket.general_section(),
            bsb_section: Section::Heroes,
            mounted_gates: false,
            option_gates: false,
        }
    }
}

/// Validate a modern-dialect roster against its composition's tables.
///
/// The composition key falls back to the grand-army default. The
/// returned violations are in a fixed, deterministic order: the
/// command checks first, then every rule entry per section in table
/// order. The roster itself is never mutated.
pub fn validate_roster(
    roster: &Roster,
    book: &Rulebook,
    names: &dyn NameResolver,
) -> RulesResult<Vec<Violation>> {
    let tables = book.composition(&roster.composition)?;
    Ok(run(roster, tables, &DialectProfile::the_old_world(), names))
}

/// Validate a legacy sixth-edition roster.
///
/// The rule table is selected by point bracket and army key; a
/// missing combination is a configuration fault, not a legal roster.
pub fn validate_sixth_roster(
    roster: &Roster,
    book: &Rulebook,
    names: &dyn NameResolver,
) -> RulesResult<Vec<Violation>> {
    let tables = book.sixth_army(roster.points, &roster.army)?;
    let bracket = PointsBracket::for_points(roster.points);
    Ok(run(roster, tables, &DialectProfile::sixth_edition(bracket), names))
}

fn run(
    roster: &Roster,
    tables: &ArmyRules,
    profile: &DialectProfile,
    names: &dyn NameResolver,
) -> Vec<Violation> {
    let ctx = RosterContext::extract(roster, profile.command_sections);
    let mut violations = Vec::new();

    command_checks(&ctx, profile, &mut violations);

    for &section in profile.section_order {
        for entry in tables.entries(section) {
            check_entry(entry, section, roster, &ctx, profile, names, &mut violations);
        }
    }
    violations
}

/// Army-wide command checks that run regardless of any rule table.
fn command_checks(ctx: &RosterContext<'_>, profile: &DialectProfile, out: &mut Vec<Violation>) {
    if ctx.generals.is_empty() {
        out.push(Violation::new(
            ViolationKind::NoGeneral,
            profile.general_section,
        ));
    }
    if ctx.generals.len() > 1 {
        out.push(Violation::new(
            ViolationKind::MultipleGenerals,
            profile.general_section,
        ));
    }
    if ctx.bsbs.len() > 1 {
        out.push(Violation::new(
            ViolationKind::MultipleBsbs,
            profile.bsb_section,
        ));
    }
}

/// Run every applicable check of one rule entry against one section.
fn check_entry(
    entry: &RuleEntry,
    section: Section,
    roster: &Roster,
    ctx: &RosterContext<'_>,
    profile: &DialectProfile,
    names: &dyn NameResolver,
    out: &mut Vec<Violation>,
) {
    let matched: Vec<&Unit> = roster
        .units(section)
        .iter()
        .filter(|u| entry.matches(u))
        .collect();
    let fielded = matched.len() as u32;
    let (min, max) = entry.scaled_bounds(roster.points);
    let dependency = entry.dependency_gate();

    // Direct count bounds. Dependency entries run their own counting
    // logic further down instead.
    if dependency.is_none() {
        if fielded < min {
            out.push(Violation::min_units(
                section,
                join_ids_or(names, &entry.ids),
                min,
            ));
        }
        if let Some(cap) = max
            && fielded > cap
        {
            out.push(Violation::max_units(
                section,
                join_units_or(&matched),
                fielded - cap,
            ));
        }
    }

    // The army general must be one of the required unit types.
    if let Some(gate) = entry.general_gate()
        && !matched.is_empty()
    {
        let commanding = ctx.general_among(&gate.requires);
        if commanding.is_none() {
            out.push(Violation::requires_general(
                section,
                join_ids_or(names, &gate.requires),
            ));
        }
        if let Some(option) = &gate.option {
            let outfitted = ctx
                .generals
                .iter()
                .any(|g| g.id.base() == option.unit && g.has_active_option(&option.id));
            if !outfitted
                && let Some(general) = commanding
                && general.id.base() == option.unit
            {
                out.push(Violation::requires_option(
                    section,
                    resolve_or_id(names, &option.unit),
                    resolve_or_id(names, &option.id),
                ));
            }
        }
    }

    if profile.mounted_gates && entry.requires_mount() {
        let on_foot: Vec<&Unit> = matched.iter().copied().filter(|u| !u.is_mounted()).collect();
        if !on_foot.is_empty() {
            out.push(Violation::requires_mounted(
                section,
                join_units_and(&on_foot),
            ));
        }
    }

    if profile.option_gates
        && let Some(option) = entry.option_gate()
    {
        let concerned: Vec<&Unit> = matched
            .iter()
            .copied()
            .filter(|u| u.id.base() == option.unit)
            .collect();
        if !concerned.is_empty() && !concerned.iter().any(|u| u.has_active_option(&option.id)) {
            out.push(Violation::requires_option(
                section,
                resolve_or_id(names, &option.unit),
                resolve_or_id(names, &option.id),
            ));
        }
    }

    if let Some(gate) = dependency {
        let required = required_count(roster, gate, profile);

        // Requirement-style entries still enforce their own floor.
        if max.is_none() && gate.per_unit && fielded < min {
            out.push(Violation::min_units(
                section,
                join_ids_or(names, &entry.ids),
                min,
            ));
        }

        if gate.per_unit && max.is_some() && fielded > required {
            // Each required unit allows one matching unit.
            out.push(Violation::requires_units(
                section,
                join_ids_or(names, &gate.requires),
                fielded - required,
            ));
        } else if gate.per_unit && max.is_none() && fielded > required + min {
            // Same, with the entry's floor granted unconditionally.
            out.push(Violation::requires_units(
                section,
                join_ids_or(names, &gate.requires),
                fielded - required - min,
            ));
        } else if !gate.per_unit && required == 0 && fielded > 0 {
            // Flat dependency: at least one required unit must exist.
            out.push(Violation::requires_units(
                section,
                join_ids_or(names, &gate.requires),
                1,
            ));
        }

        if !gate.per_unit
            && let Some(cap) = max
            && fielded > cap
        {
            out.push(Violation::max_units(
                section,
                join_units_or(&matched),
                fielded - cap,
            ));
        }
    }

    // A general must carry the named magic item.
    if let Some(item) = entry.magic_item_gate()
        && !matched.is_empty()
        && !ctx.generals.iter().any(|g| g.carries_item(item))
    {
        out.push(Violation::requires_magic_item(
            section,
            resolve_or_id(names, item),
        ));
    }
}

/// Count the units the gate's scope provides as prerequisites.
fn required_count(roster: &Roster, gate: &DependencyGate, profile: &DialectProfile) -> u32 {
    let count_in = |section: Section| {
        roster
            .units(section)
            .iter()
            .filter(|u| gate.requires.iter().any(|id| id.as_str() == u.id.base()))
            .count()
    };
    let total: usize = match gate.scope {
        Scope::All => profile.all_scope.iter().map(|&s| count_in(s)).sum(),
        Scope::Section(section) => count_in(section),
    };
    total as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::book::{ArmyRules, DEFAULT_COMPOSITION};
    use crate::entry::{Gate, GeneralGate, OptionRef};
    use hm_core::unit::{CommandOption, Item, ItemSlot, MountOption, UnitOption};
    use hm_core::{Edition, MessageCatalog};

    fn troop(id: &str, name: &str) -> Unit {
        Unit::new(format!("{id}.0"), name)
    }

    fn nth_troop(id: &str, n: u32, name: &str) -> Unit {
        Unit::new(format!("{id}.{n}"), name)
    }

    fn general(id: &str, name: &str) -> Unit {
        let mut unit = troop(id, name);
        unit.command.push(CommandOption {
            name_en: "General".to_string(),
            active: true,
        });
        unit
    }

    fn bsb(id: &str, name: &str) -> Unit {
        let mut unit = troop(id, name);
        unit.command.push(CommandOption {
            name_en: "Battle Standard Bearer".to_string(),
            active: true,
        });
        unit
    }

    fn catalog() -> MessageCatalog {
        [
            ("empire:state-troops", "State Troops"),
            ("empire:archer-detachment", "Archer Detachment"),
            ("empire:captain", "Captain"),
            ("empire:steam-tank", "Steam Tank"),
            ("bretonnia:duke", "Duke"),
            ("bretonnia:grail-vow", "Grail Vow"),
            ("The Grail Shard", "The Grail Shard"),
        ]
        .into_iter()
        .collect()
    }

    /// A modern book whose grand-army table has one entry in one section.
    fn book_with(section: Section, entry: RuleEntry) -> Rulebook {
        let mut book = Rulebook::default();
        book.compositions.insert(
            DEFAULT_COMPOSITION.to_string(),
            ArmyRules::new().with_section(section, vec![entry]),
        );
        book
    }

    /// A roster with one general, satisfying the command checks.
    fn led_roster(points: u32) -> Roster {
        let mut roster = Roster::new("Muster", points);
        roster.composition = DEFAULT_COMPOSITION.to_string();
        roster.add_unit(Section::Characters, general("empire:captain", "Captain"));
        roster
    }

    fn kinds(violations: &[Violation]) -> Vec<ViolationKind> {
        violations.iter().map(|v| v.kind).collect()
    }

    #[test]
    fn baseline_roster_is_legal() {
        let book = book_with(
            Section::Core,
            RuleEntry {
                ids: vec!["empire:state-troops".to_string()],
                min: 1,
                max: Some(3),
                ..RuleEntry::default()
            },
        );
        let mut roster = led_roster(2000);
        roster.add_unit(Section::Core, troop("empire:state-troops", "State Troops"));

        let violations = validate_roster(&roster, &book, &catalog()).unwrap();
        assert!(violations.is_empty(), "unexpected: {violations:?}");
    }

    #[test]
    fn min_and_max_boundaries() {
        let book = book_with(
            Section::Core,
            RuleEntry {
                ids: vec!["empire:state-troops".to_string()],
                min: 1,
                max: Some(2),
                ..RuleEntry::default()
            },
        );

        for count in 0..4u32 {
            let mut roster = led_roster(2000);
            for n in 0..count {
                roster.add_unit(
                    Section::Core,
                    nth_troop("empire:state-troops", n, "State Troops"),
                );
            }
            let violations = validate_roster(&roster, &book, &catalog()).unwrap();
            match count {
                0 => {
                    assert_eq!(kinds(&violations), vec![ViolationKind::MinUnits]);
                    assert_eq!(violations[0].min, Some(1));
                    assert_eq!(violations[0].name.as_deref(), Some("State Troops"));
                }
                1 | 2 => assert!(violations.is_empty(), "{count}: {violations:?}"),
                _ => {
                    assert_eq!(kinds(&violations), vec![ViolationKind::MaxUnits]);
                    assert_eq!(violations[0].diff, Some(1));
                }
            }
        }
    }

    #[test]
    fn point_scaled_cap() {
        let book = book_with(
            Section::Rare,
            RuleEntry {
                ids: vec!["empire:steam-tank".to_string()],
                min: 0,
                max: Some(1),
                points: Some(1000),
                ..RuleEntry::default()
            },
        );
        let mut roster = led_roster(2500);
        for n in 0..3 {
            roster.add_unit(Section::Rare, nth_troop("empire:steam-tank", n, "Steam Tank"));
        }

        let violations = validate_roster(&roster, &book, &catalog()).unwrap();
        assert_eq!(kinds(&violations), vec![ViolationKind::MaxUnits]);
        assert_eq!(violations[0].diff, Some(1));
    }

    #[test]
    fn scaled_minimum_counts_per_thousand() {
        let book = book_with(
            Section::Core,
            RuleEntry {
                ids: vec!["empire:state-troops".to_string()],
                min: 1,
                max: None,
                points: Some(1000),
                ..RuleEntry::default()
            },
        );
        let mut roster = led_roster(3000);
        roster.add_unit(Section::Core, troop("empire:state-troops", "State Troops"));

        let violations = validate_roster(&roster, &book, &catalog()).unwrap();
        assert_eq!(kinds(&violations), vec![ViolationKind::MinUnits]);
        assert_eq!(violations[0].min, Some(3));
    }

    #[test]
    fn missing_general_is_reported_once() {
        let book = book_with(
            Section::Core,
            RuleEntry {
                ids: vec!["empire:state-troops".to_string()],
                min: 0,
                max: Some(6),
                ..RuleEntry::default()
            },
        );
        let mut roster = Roster::new("Leaderless", 2000);
        roster.composition = DEFAULT_COMPOSITION.to_string();
        roster.add_unit(Section::Core, troop("empire:state-troops", "State Troops"));

        let violations = validate_roster(&roster, &book, &catalog()).unwrap();
        assert_eq!(kinds(&violations), vec![ViolationKind::NoGeneral]);
        assert_eq!(violations[0].section, Section::Characters);
    }

    #[test]
    fn two_generals_are_reported_once() {
        let book = Rulebook {
            compositions: [(DEFAULT_COMPOSITION.to_string(), ArmyRules::new())]
                .into_iter()
                .collect(),
            ..Rulebook::default()
        };
        let mut roster = led_roster(2000);
        roster.add_unit(Section::Characters, general("empire:captain", "Captain"));

        let violations = validate_roster(&roster, &book, &catalog()).unwrap();
        assert_eq!(kinds(&violations), vec![ViolationKind::MultipleGenerals]);
    }

    #[test]
    fn two_battle_standards_are_reported() {
        let book = book_with(Section::Core, RuleEntry::default());
        let mut roster = led_roster(2000);
        roster.add_unit(Section::Characters, bsb("empire:captain", "Captain"));
        roster.add_unit(Section::Characters, bsb("empire:captain", "Captain"));

        let violations = validate_roster(&roster, &book, &catalog()).unwrap();
        assert_eq!(kinds(&violations), vec![ViolationKind::MultipleBsbs]);
    }

    #[test]
    fn command_checks_precede_table_findings() {
        let book = book_with(
            Section::Core,
            RuleEntry {
                ids: vec!["empire:state-troops".to_string()],
                min: 2,
                max: None,
                ..RuleEntry::default()
            },
        );
        let roster = {
            let mut roster = Roster::new("Leaderless", 2000);
            roster.composition = DEFAULT_COMPOSITION.to_string();
            roster
        };

        let violations = validate_roster(&roster, &book, &catalog()).unwrap();
        assert_eq!(
            kinds(&violations),
            vec![ViolationKind::NoGeneral, ViolationKind::MinUnits]
        );
    }

    #[test]
    fn dependency_per_unit_capped() {
        let book = book_with(
            Section::Core,
            RuleEntry {
                ids: vec!["empire:archer-detachment".to_string()],
                min: 0,
                max: Some(3),
                gates: vec![Gate::Dependency(DependencyGate {
                    requires: vec!["empire:captain".to_string()],
                    scope: Scope::All,
                    per_unit: true,
                })],
                ..RuleEntry::default()
            },
        );
        let mut roster = led_roster(2000);
        roster.add_unit(Section::Characters, troop("empire:captain", "Captain"));
        for n in 0..3 {
            roster.add_unit(
                Section::Core,
                nth_troop("empire:archer-detachment", n, "Archer Detachment"),
            );
        }

        // Two captains present (the general is one), three dependents.
        let violations = validate_roster(&roster, &book, &catalog()).unwrap();
        assert_eq!(kinds(&violations), vec![ViolationKind::RequiresUnits]);
        assert_eq!(violations[0].diff, Some(1));
        assert_eq!(violations[0].name.as_deref(), Some("Captain"));
    }

    #[test]
    fn dependency_per_unit_uncapped_grants_floor() {
        let book = book_with(
            Section::Special,
            RuleEntry {
                ids: vec!["empire:archer-detachment".to_string()],
                min: 1,
                max: None,
                gates: vec![Gate::Dependency(DependencyGate {
                    requires: vec!["empire:state-troops".to_string()],
                    scope: Scope::Section(Section::Core),
                    per_unit: true,
                })],
                ..RuleEntry::default()
            },
        );
        let mut roster = led_roster(2000);
        roster.add_unit(Section::Core, troop("empire:state-troops", "State Troops"));
        for n in 0..3 {
            roster.add_unit(
                Section::Special,
                nth_troop("empire:archer-detachment", n, "Archer Detachment"),
            );
        }

        // One required unit plus a floor of one allows two; three exceed it.
        let violations = validate_roster(&roster, &book, &catalog()).unwrap();
        assert_eq!(kinds(&violations), vec![ViolationKind::RequiresUnits]);
        assert_eq!(violations[0].diff, Some(1));
    }

    #[test]
    fn flat_dependency_needs_one_required_unit() {
        let book = book_with(
            Section::Special,
            RuleEntry {
                ids: vec!["empire:archer-detachment".to_string()],
                min: 0,
                max: Some(4),
                gates: vec![Gate::Dependency(DependencyGate {
                    requires: vec!["empire:state-troops".to_string()],
                    scope: Scope::Section(Section::Core),
                    per_unit: false,
                })],
                ..RuleEntry::default()
            },
        );
        let mut roster = led_roster(2000);
        roster.add_unit(
            Section::Special,
            troop("empire:archer-detachment", "Archer Detachment"),
        );

        let violations = validate_roster(&roster, &book, &catalog()).unwrap();
        assert_eq!(kinds(&violations), vec![ViolationKind::RequiresUnits]);
        assert_eq!(violations[0].diff, Some(1));
        assert_eq!(violations[0].name.as_deref(), Some("State Troops"));
    }

    #[test]
    fn dependency_entries_skip_direct_count_checks() {
        let book = book_with(
            Section::Special,
            RuleEntry {
                ids: vec!["empire:archer-detachment".to_string()],
                min: 2,
                max: Some(4),
                gates: vec![Gate::Dependency(DependencyGate {
                    requires: vec!["empire:state-troops".to_string()],
                    scope: Scope::Section(Section::Core),
                    per_unit: false,
                })],
                ..RuleEntry::default()
            },
        );
        let mut roster = led_roster(2000);
        roster.add_unit(Section::Core, troop("empire:state-troops", "State Troops"));

        // Zero dependents and min 2: a plain entry would flag MinUnits,
        // a dependency entry must not.
        let violations = validate_roster(&roster, &book, &catalog()).unwrap();
        assert!(violations.is_empty(), "unexpected: {violations:?}");
    }

    #[test]
    fn general_gate_flags_wrong_general() {
        let entry = RuleEntry {
            ids: vec!["bretonnia:grail-knights".to_string()],
            min: 0,
            max: None,
            gates: vec![Gate::General(GeneralGate {
                requires: vec!["bretonnia:duke".to_string()],
                option: None,
            })],
            ..RuleEntry::default()
        };
        let book = book_with(Section::Special, entry);

        let mut roster = led_roster(2000);
        roster.add_unit(
            Section::Special,
            troop("bretonnia:grail-knights", "Grail Knights"),
        );

        // The general is a captain, not a duke.
        let violations = validate_roster(&roster, &book, &catalog()).unwrap();
        assert_eq!(kinds(&violations), vec![ViolationKind::RequiresGeneral]);
        assert_eq!(violations[0].name.as_deref(), Some("Duke"));
    }

    #[test]
    fn general_gate_with_option_requires_it_active() {
        let entry = RuleEntry {
            ids: vec!["bretonnia:grail-knights".to_string()],
            min: 0,
            max: None,
            gates: vec![Gate::General(GeneralGate {
                requires: vec!["bretonnia:duke".to_string()],
                option: Some(OptionRef {
                    unit: "bretonnia:duke".to_string(),
                    id: "bretonnia:grail-vow".to_string(),
                }),
            })],
            ..RuleEntry::default()
        };
        let book = book_with(Section::Special, entry);

        let mut roster = Roster::new("Muster", 2000);
        roster.composition = DEFAULT_COMPOSITION.to_string();
        let mut duke = general("bretonnia:duke", "Duke");
        duke.options.push(UnitOption {
            id: "bretonnia:grail-vow".to_string(),
            active: false,
        });
        roster.add_unit(Section::Characters, duke);
        roster.add_unit(
            Section::Special,
            troop("bretonnia:grail-knights", "Grail Knights"),
        );

        let violations = validate_roster(&roster, &book, &catalog()).unwrap();
        assert_eq!(kinds(&violations), vec![ViolationKind::RequiresOption]);
        assert_eq!(violations[0].name.as_deref(), Some("Duke"));
        assert_eq!(violations[0].option.as_deref(), Some("Grail Vow"));

        // Taking the vow clears the finding.
        roster.characters[0].options[0].active = true;
        let violations = validate_roster(&roster, &book, &catalog()).unwrap();
        assert!(violations.is_empty(), "unexpected: {violations:?}");
    }

    #[test]
    fn mounted_gate_lists_units_on_foot() {
        let entry = RuleEntry {
            ids: vec!["bretonnia:paladin".to_string()],
            min: 0,
            max: Some(4),
            gates: vec![Gate::Mounted],
            ..RuleEntry::default()
        };
        let book = book_with(Section::Characters, entry);

        let mut roster = led_roster(2000);
        let mut walking = troop("bretonnia:paladin", "Paladin");
        walking.mounts.push(MountOption {
            name_en: "On foot".to_string(),
            active: true,
        });
        let mut riding = nth_troop("bretonnia:paladin", 1, "Paladin on Warhorse");
        riding.mounts.push(MountOption {
            name_en: "Barded Warhorse".to_string(),
            active: true,
        });
        roster.add_unit(Section::Characters, walking);
        roster.add_unit(Section::Characters, riding);

        let violations = validate_roster(&roster, &book, &catalog()).unwrap();
        assert_eq!(kinds(&violations), vec![ViolationKind::RequiresMounted]);
        assert_eq!(violations[0].name.as_deref(), Some("Paladin"));
    }

    #[test]
    fn option_gate_requires_one_active_carrier() {
        let entry = RuleEntry {
            ids: vec!["bretonnia:duke".to_string()],
            min: 0,
            max: Some(2),
            gates: vec![Gate::Option(OptionRef {
                unit: "bretonnia:duke".to_string(),
                id: "bretonnia:grail-vow".to_string(),
            })],
            ..RuleEntry::default()
        };
        let book = book_with(Section::Characters, entry);

        let mut roster = led_roster(2000);
        let mut duke = troop("bretonnia:duke", "Duke");
        duke.options.push(UnitOption {
            id: "bretonnia:grail-vow".to_string(),
            active: false,
        });
        roster.add_unit(Section::Characters, duke);

        let violations = validate_roster(&roster, &book, &catalog()).unwrap();
        assert_eq!(kinds(&violations), vec![ViolationKind::RequiresOption]);

        roster.characters[1].options[0].active = true;
        let violations = validate_roster(&roster, &book, &catalog()).unwrap();
        assert!(violations.is_empty(), "unexpected: {violations:?}");
    }

    #[test]
    fn magic_item_gate_checks_the_generals_items() {
        let entry = RuleEntry {
            ids: vec!["bretonnia:grail-knights".to_string()],
            min: 0,
            max: None,
            gates: vec![Gate::MagicItem {
                item: "The Grail Shard".to_string(),
            }],
            ..RuleEntry::default()
        };
        let book = book_with(Section::Rare, entry);

        let mut roster = led_roster(2000);
        roster.add_unit(
            Section::Rare,
            troop("bretonnia:grail-knights", "Grail Knights"),
        );

        let violations = validate_roster(&roster, &book, &catalog()).unwrap();
        assert_eq!(kinds(&violations), vec![ViolationKind::RequiresMagicItem]);

        roster.characters[0].items.push(ItemSlot {
            selected: vec![Item {
                name: "The Grail Shard".to_string(),
            }],
        });
        let violations = validate_roster(&roster, &book, &catalog()).unwrap();
        assert!(violations.is_empty(), "unexpected: {violations:?}");
    }

    #[test]
    fn unknown_composition_falls_back_to_grand_army() {
        let book = book_with(
            Section::Core,
            RuleEntry {
                ids: vec!["empire:state-troops".to_string()],
                min: 1,
                max: None,
                ..RuleEntry::default()
            },
        );
        let mut roster = led_roster(2000);
        roster.composition = "errantry-crusade".to_string();

        let violations = validate_roster(&roster, &book, &catalog()).unwrap();
        assert_eq!(kinds(&violations), vec![ViolationKind::MinUnits]);
    }

    #[test]
    fn validation_is_deterministic() {
        let book = book_with(
            Section::Core,
            RuleEntry {
                ids: vec!["empire:state-troops".to_string()],
                min: 2,
                max: Some(3),
                ..RuleEntry::default()
            },
        );
        let mut roster = Roster::new("Leaderless", 2000);
        roster.composition = DEFAULT_COMPOSITION.to_string();
        roster.add_unit(Section::Core, troop("empire:state-troops", "State Troops"));

        let first = validate_roster(&roster, &book, &catalog()).unwrap();
        let second = validate_roster(&roster, &book, &catalog()).unwrap();
        assert_eq!(first, second);
        assert_eq!(
            kinds(&first),
            vec![ViolationKind::NoGeneral, ViolationKind::MinUnits]
        );
    }

    // --- sixth-edition dialect ---

    fn sixth_book(section: Section, entry: RuleEntry, army: &str) -> Rulebook {
        let tables = ArmyRules::new().with_section(section, vec![entry]);
        let mut book = Rulebook::default();
        book.sixth
            .up_to_two_thousand
            .insert(army.to_string(), tables.clone());
        book.sixth
            .above_two_thousand
            .insert(army.to_string(), tables);
        book
    }

    fn sixth_roster(points: u32) -> Roster {
        let mut roster = Roster::new("Muster", points);
        roster.edition = Edition::SixthEdition;
        roster.army = "empire".to_string();
        roster
    }

    #[test]
    fn sixth_missing_table_fails_fast() {
        let book = sixth_book(Section::Core, RuleEntry::default(), "empire");
        let mut roster = sixth_roster(2000);
        roster.army = "dwarfs".to_string();

        let err = validate_sixth_roster(&roster, &book, &catalog()).unwrap_err();
        assert!(err.to_string().contains("dwarfs"));
    }

    #[test]
    fn sixth_general_findings_follow_the_bracket() {
        let book = sixth_book(Section::Core, RuleEntry::default(), "empire");

        let low = sixth_roster(1500);
        let violations = validate_sixth_roster(&low, &book, &catalog()).unwrap();
        assert_eq!(kinds(&violations), vec![ViolationKind::NoGeneral]);
        assert_eq!(violations[0].section, Section::Heroes);

        let high = sixth_roster(2500);
        let violations = validate_sixth_roster(&high, &book, &catalog()).unwrap();
        assert_eq!(violations[0].section, Section::Lords);
    }

    #[test]
    fn sixth_scans_lords_and_heroes_for_command_roles() {
        let book = sixth_book(Section::Core, RuleEntry::default(), "empire");
        let mut roster = sixth_roster(2500);
        roster.add_unit(Section::Lords, general("empire:elector-count", "Elector Count"));
        roster.add_unit(Section::Heroes, general("empire:captain", "Captain"));

        let violations = validate_sixth_roster(&roster, &book, &catalog()).unwrap();
        assert_eq!(kinds(&violations), vec![ViolationKind::MultipleGenerals]);
        assert_eq!(violations[0].section, Section::Lords);
    }

    #[test]
    fn sixth_dialect_ignores_mount_and_option_gates() {
        let entry = RuleEntry {
            ids: vec!["empire:captain".to_string()],
            min: 0,
            max: Some(4),
            gates: vec![
                Gate::Mounted,
                Gate::Option(OptionRef {
                    unit: "empire:captain".to_string(),
                    id: "empire:full-plate".to_string(),
                }),
            ],
            ..RuleEntry::default()
        };

        // Identical roster shape through both entry points: a captain
        // on foot without the option.
        let modern_book = book_with(Section::Characters, entry.clone());
        let modern = led_roster(2000);
        let violations = validate_roster(&modern, &modern_book, &catalog()).unwrap();
        assert_eq!(
            kinds(&violations),
            vec![
                ViolationKind::RequiresMounted,
                ViolationKind::RequiresOption
            ]
        );

        let sixth = {
            let book = sixth_book(Section::Heroes, entry, "empire");
            let mut roster = sixth_roster(2000);
            roster.add_unit(Section::Heroes, general("empire:captain", "Captain"));
            validate_sixth_roster(&roster, &book, &catalog()).unwrap()
        };
        assert!(sixth.is_empty(), "unexpected: {sixth:?}");
    }

    #[test]
    fn sixth_dialect_still_checks_magic_items() {
        let entry = RuleEntry {
            ids: vec!["empire:greatswords".to_string()],
            min: 0,
            max: None,
            gates: vec![Gate::MagicItem {
                item: "The Imperial Banner".to_string(),
            }],
            ..RuleEntry::default()
        };
        let book = sixth_book(Section::Special, entry, "empire");
        let mut roster = sixth_roster(2000);
        roster.add_unit(Section::Heroes, general("empire:captain", "Captain"));
        roster.add_unit(Section::Special, troop("empire:greatswords", "Greatswords"));

        let violations = validate_sixth_roster(&roster, &book, &catalog()).unwrap();
        assert_eq!(kinds(&violations), vec![ViolationKind::RequiresMagicItem]);
    }

    #[test]
    fn sixth_zero_cap_is_a_real_bound() {
        let entry = RuleEntry {
            ids: vec!["empire:elector-count".to_string()],
            min: 0,
            max: Some(0),
            ..RuleEntry::default()
        };
        let book = sixth_book(Section::Lords, entry, "empire");
        let mut roster = sixth_roster(1500);
        roster.add_unit(Section::Heroes, general("empire:captain", "Captain"));
        roster.add_unit(
            Section::Lords,
            troop("empire:elector-count", "Elector Count"),
        );

        let violations = validate_sixth_roster(&roster, &book, &catalog()).unwrap();
        assert_eq!(kinds(&violations), vec![ViolationKind::MaxUnits]);
        assert_eq!(violations[0].diff, Some(1));
    }
}
