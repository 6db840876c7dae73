use std::path::Path;

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use hm_core::{Edition, MessageCatalog};
use hm_rules::{validate_roster, validate_sixth_roster};

pub fn run(
    roster_path: &Path,
    rules: Option<&Path>,
    catalog: Option<&Path>,
    json: bool,
) -> Result<(), String> {
    let roster = super::load_roster(roster_path)?;
    let book = super::load_rulebook(rules)?;
    let names = load_catalog(catalog)?;

    let violations = match roster.edition {
        Edition::TheOldWorld => validate_roster(&roster, &book, &names),
        Edition::SixthEdition => validate_sixth_roster(&roster, &book, &names),
    }
    .map_err(|e| e.to_string())?;

    if json {
        let out = serde_json::to_string_pretty(&violations).map_err(|e| e.to_string())?;
        println!("{out}");
    } else if violations.is_empty() {
        println!(
            "  {} '{}' is legal ({} points, {} units).",
            "ok:".green().bold(),
            roster.name,
            roster.points,
            roster.unit_count()
        );
    } else {
        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Section", "Problem"]);
        for violation in &violations {
            table.add_row(vec![violation.section.to_string(), violation.to_string()]);
        }
        println!("{table}");
        println!();
    }

    if violations.is_empty() {
        Ok(())
    } else {
        let count = violations.len();
        Err(format!(
            "'{}' is {} — {} finding{}",
            roster.name,
            "not legal".red().bold(),
            count,
            if count == 1 { "" } else { "s" },
        ))
    }
}

fn load_catalog(path: Option<&Path>) -> Result<MessageCatalog, String> {
    match path {
        Some(path) => {
            let data = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            MessageCatalog::from_json(&data).map_err(|e| e.to_string())
        }
        None => Ok(MessageCatalog::new()),
    }
}
