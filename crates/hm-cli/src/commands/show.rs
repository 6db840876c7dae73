use std::path::Path;

use comfy_table::{ContentArrangement, Table};
use hm_core::Section;

pub fn run(roster_path: &Path) -> Result<(), String> {
    let roster = super::load_roster(roster_path)?;

    println!(
        "  {} — {} — {} points declared, {} spent",
        roster.name,
        roster.edition,
        roster.points,
        roster.spent_points()
    );
    println!();

    if roster.unit_count() == 0 {
        println!("  The list is empty.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Section", "Unit", "Points"]);

    for &section in Section::all() {
        for unit in roster.units(section) {
            table.add_row(vec![
                section.to_string(),
                unit.name.clone(),
                unit.points.to_string(),
            ]);
        }
    }

    println!("{table}");
    println!();
    println!("  {} units", roster.unit_count());

    Ok(())
}
