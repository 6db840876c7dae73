//! Built-in reference rulebooks.
//!
//! These produce the same tables that the equivalent rulebook JSON
//! would, but without requiring a file. They cover the default
//! grand-army composition, a Bretonnian composition exercising the
//! general, option, mount, and item gates, and a sixth-edition Empire
//! list for both point brackets.

use hm_core::Section;

use crate::book::{ArmyRules, DEFAULT_COMPOSITION, Rulebook};
use crate::entry::{DependencyGate, Gate, GeneralGate, OptionRef, RuleEntry, Scope};

/// The grand-army composition: the modern default.
///
/// Senior characters and war machines scale with the point total,
/// state troops form the core backbone, and detachments are allowed
/// one per parent regiment.
pub fn grand_army() -> ArmyRules {
    ArmyRules::new()
        .with_section(
            Section::Characters,
            vec![
                RuleEntry {
                    ids: vec![
                        "empire:general-of-the-empire".to_string(),
                        "empire:grand-master".to_string(),
                    ],
                    min: 0,
                    max: Some(1),
                    points: Some(1000),
                    gates: vec![],
                },
                RuleEntry {
                    ids: vec!["empire:battle-wizard".to_string()],
                    min: 0,
                    max: Some(2),
                    points: Some(1000),
                    gates: vec![],
                },
            ],
        )
        .with_section(
            Section::Core,
            vec![
                RuleEntry {
                    ids: vec![
                        "empire:state-troops".to_string(),
                        "empire:state-missile-troops".to_string(),
                    ],
                    min: 1,
                    max: None,
                    points: Some(1000),
                    gates: vec![],
                },
                RuleEntry {
                    ids: vec!["empire:archer-detachment".to_string()],
                    min: 0,
                    max: Some(4),
                    points: None,
                    gates: vec![Gate::Dependency(DependencyGate {
                        requires: vec!["empire:state-troops".to_string()],
                        scope: Scope::Section(Section::Core),
                        per_unit: true,
                    })],
                },
            ],
        )
        .with_section(
            Section::Special,
            vec![
                RuleEntry {
                    ids: vec!["empire:demigryph-knights".to_string()],
                    min: 0,
                    max: Some(1),
                    points: Some(1000),
                    gates: vec![],
                },
                RuleEntry {
                    ids: vec!["empire:greatswords".to_string()],
                    min: 0,
                    max: None,
                    points: None,
                    gates: vec![Gate::General(GeneralGate {
                        requires: vec!["empire:general-of-the-empire".to_string()],
                        option: None,
                    })],
                },
            ],
        )
        .with_section(
            Section::Rare,
            vec![RuleEntry {
                ids: vec!["empire:steam-tank".to_string()],
                min: 0,
                max: Some(1),
                points: Some(2000),
                gates: vec![],
            }],
        )
        .with_section(
            Section::Mercenaries,
            vec![RuleEntry {
                ids: vec!["dogs-of-war:giant".to_string()],
                min: 0,
                max: Some(1),
                points: None,
                gates: vec![],
            }],
        )
}

/// The Kingdom of Bretonnia composition.
///
/// Knightly vows gate the elite units: questing knights follow only a
/// duke who has sworn the grail vow, grail knights ride with a general
/// carrying the Grail Shard, and paladins take the field mounted.
pub fn kingdom_of_bretonnia() -> ArmyRules {
    ArmyRules::new()
        .with_section(
            Section::Characters,
            vec![
                RuleEntry {
                    ids: vec!["bretonnia:duke".to_string()],
                    min: 0,
                    max: Some(1),
                    points: None,
                    gates: vec![],
                },
                RuleEntry {
                    ids: vec!["bretonnia:paladin".to_string()],
                    min: 0,
                    max: Some(2),
                    points: Some(1000),
                    gates: vec![Gate::Mounted],
                },
            ],
        )
        .with_section(
            Section::Core,
            vec![RuleEntry {
                ids: vec![
                    "bretonnia:knights-of-the-realm".to_string(),
                    "bretonnia:knights-errant".to_string(),
                ],
                min: 1,
                max: None,
                points: Some(1000),
                gates: vec![],
            }],
        )
        .with_section(
            Section::Special,
            vec![RuleEntry {
                ids: vec!["bretonnia:questing-knights".to_string()],
                min: 0,
                max: None,
                points: None,
                gates: vec![Gate::General(GeneralGate {
                    requires: vec!["bretonnia:duke".to_string()],
                    option: Some(OptionRef {
                        unit: "bretonnia:duke".to_string(),
                        id: "bretonnia:grail-vow".to_string(),
                    }),
                })],
            }],
        )
        .with_section(
            Section::Rare,
            vec![RuleEntry {
                ids: vec!["bretonnia:grail-knights".to_string()],
                min: 0,
                max: None,
                points: None,
                gates: vec![Gate::MagicItem {
                    item: "The Grail Shard".to_string(),
                }],
            }],
        )
}

/// Sixth-edition Empire tables for lists up to 2000 points.
///
/// No lord choices at this size — the zero cap is a real bound, not a
/// missing one.
pub fn sixth_empire_patrol() -> ArmyRules {
    ArmyRules::new()
        .with_section(
            Section::Lords,
            vec![RuleEntry {
                ids: vec!["empire:elector-count".to_string()],
                min: 0,
                max: Some(0),
                points: None,
                gates: vec![],
            }],
        )
        .with_section(
            Section::Heroes,
            vec![RuleEntry {
                ids: vec![
                    "empire:captain".to_string(),
                    "empire:warrior-priest".to_string(),
                    "empire:battle-wizard".to_string(),
                ],
                min: 0,
                max: Some(3),
                points: None,
                gates: vec![],
            }],
        )
        .with_section(
            Section::Core,
            vec![RuleEntry {
                ids: vec![
                    "empire:spearmen".to_string(),
                    "empire:swordsmen".to_string(),
                    "empire:halberdiers".to_string(),
                ],
                min: 2,
                max: None,
                points: None,
                gates: vec![],
            }],
        )
        .with_section(
            Section::Special,
            vec![RuleEntry {
                ids: vec!["empire:great-cannon".to_string()],
                min: 0,
                max: Some(2),
                points: None,
                gates: vec![],
            }],
        )
        .with_section(
            Section::Rare,
            vec![RuleEntry {
                ids: vec!["empire:steam-tank".to_string()],
                min: 0,
                max: Some(1),
                points: None,
                gates: vec![],
            }],
        )
}

/// Sixth-edition Empire tables for lists above 2000 points.
pub fn sixth_empire_host() -> ArmyRules {
    ArmyRules::new()
        .with_section(
            Section::Lords,
            vec![RuleEntry {
                ids: vec![
                    "empire:elector-count".to_string(),
                    "empire:arch-lector".to_string(),
                ],
                min: 0,
                max: Some(1),
                points: None,
                gates: vec![],
            }],
        )
        .with_section(
            Section::Heroes,
            vec![RuleEntry {
                ids: vec![
                    "empire:captain".to_string(),
                    "empire:warrior-priest".to_string(),
                    "empire:battle-wizard".to_string(),
                ],
                min: 0,
                max: Some(4),
                points: None,
                gates: vec![],
            }],
        )
        .with_section(
            Section::Core,
            vec![RuleEntry {
                ids: vec![
                    "empire:spearmen".to_string(),
                    "empire:swordsmen".to_string(),
                    "empire:halberdiers".to_string(),
                ],
                min: 3,
                max: None,
                points: None,
                gates: vec![],
            }],
        )
        .with_section(
            Section::Special,
            vec![RuleEntry {
                ids: vec!["empire:great-cannon".to_string()],
                min: 0,
                max: Some(3),
                points: None,
                gates: vec![],
            }],
        )
        .with_section(
            Section::Rare,
            vec![RuleEntry {
                ids: vec!["empire:steam-tank".to_string()],
                min: 0,
                max: Some(2),
                points: None,
                gates: vec![],
            }],
        )
}

/// The complete built-in rulebook: both modern compositions plus the
/// sixth-edition Empire tables in both brackets.
pub fn reference_rulebook() -> Rulebook {
    let mut book = Rulebook::default();
    book.compositions
        .insert(DEFAULT_COMPOSITION.to_string(), grand_army());
    book.compositions
        .insert("kingdom-of-bretonnia".to_string(), kingdom_of_bretonnia());
    book.sixth
        .up_to_two_thousand
        .insert("empire".to_string(), sixth_empire_patrol());
    book.sixth
        .above_two_thousand
        .insert("empire".to_string(), sixth_empire_host());
    book
}
