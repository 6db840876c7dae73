//! Display-name resolution and grammatical joining for violations.
//!
//! Violation messages name unit types and actual roster units.
//! Duplicates collapse (first-seen order wins) and lists are joined
//! with `", "` except before the final item, which takes `" or "` in
//! count and requirement contexts and `" and "` in the mounted
//! context.

use hm_core::{NameResolver, Unit};

/// Resolve an id, falling back to the id itself when the catalog has
/// no entry for it.
pub fn resolve_or_id(names: &dyn NameResolver, id: &str) -> String {
    names.resolve(id).unwrap_or_else(|| id.to_string())
}

/// Resolve rule ids to display names and join them as alternatives:
/// `"A, B or C"`.
pub fn join_ids_or(names: &dyn NameResolver, ids: &[String]) -> String {
    let resolved: Vec<String> = ids.iter().map(|id| resolve_or_id(names, id)).collect();
    join(resolved, " or ")
}

/// Join actual roster-unit names as alternatives: `"A, B or C"`.
pub fn join_units_or(units: &[&Unit]) -> String {
    join(units.iter().map(|u| u.name.clone()).collect(), " or ")
}

/// Join actual roster-unit names as a conjunction: `"A, B and C"`.
pub fn join_units_and(units: &[&Unit]) -> String {
    join(units.iter().map(|u| u.name.clone()).collect(), " and ")
}

/// Deduplicate preserving first-seen order, then join. Safe on empty
/// input: yields the empty string.
fn join(names: Vec<String>, conjunction: &str) -> String {
    let mut unique: Vec<String> = Vec::with_capacity(names.len());
    for name in names {
        if !unique.contains(&name) {
            unique.push(name);
        }
    }
    match unique.len() {
        0 => String::new(),
        1 => unique.swap_remove(0),
        _ => {
            let last = unique.pop().unwrap_or_default();
            format!("{}{conjunction}{last}", unique.join(", "))
        }
    }
}
