use std::path::Path;

use comfy_table::Table;
use hm_core::Section;
use hm_rules::{Gate, RuleEntry};

pub fn run(
    composition: &str,
    rules: Option<&Path>,
    section: Option<&str>,
) -> Result<(), String> {
    let book = super::load_rulebook(rules)?;
    let tables = book.composition(composition).map_err(|e| e.to_string())?;

    let filter: Option<Section> = match section {
        Some(name) => Some(name.parse().map_err(|e: hm_core::CoreError| e.to_string())?),
        None => None,
    };

    let mut table = Table::new();
    table.set_header(vec!["Section", "Units", "Min", "Max", "Per points", "Gates"]);

    let mut rows = 0;
    for (section, entries) in tables.tables() {
        if filter.is_some_and(|f| f != section) {
            continue;
        }
        for entry in entries {
            table.add_row(vec![
                section.to_string(),
                entry.ids.join(", "),
                entry.min.to_string(),
                entry.max.map_or("—".to_string(), |m| m.to_string()),
                entry.points.map_or("—".to_string(), |p| p.to_string()),
                gate_summary(entry),
            ]);
            rows += 1;
        }
    }

    if rows == 0 {
        println!("  No rule entries found.");
        return Ok(());
    }

    println!("{table}");
    println!();
    println!(
        "  {rows} rule entr{} for '{composition}'",
        if rows == 1 { "y" } else { "ies" }
    );

    Ok(())
}

fn gate_summary(entry: &RuleEntry) -> String {
    let parts: Vec<String> = entry
        .gates
        .iter()
        .map(|gate| match gate {
            Gate::General(gate) => format!("general: {}", gate.requires.join(", ")),
            Gate::Option(option) => format!("option: {}", option.id),
            Gate::Mounted => "mounted".to_string(),
            Gate::Dependency(gate) => format!("needs: {}", gate.requires.join(", ")),
            Gate::MagicItem { item } => format!("item: {item}"),
        })
        .collect();
    if parts.is_empty() {
        "—".to_string()
    } else {
        parts.join("; ")
    }
}
