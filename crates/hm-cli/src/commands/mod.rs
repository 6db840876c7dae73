pub mod check;
pub mod rules;
pub mod show;

use std::path::Path;

use hm_core::Roster;
use hm_rules::Rulebook;

/// Load a roster from a JSON file.
fn load_roster(path: &Path) -> Result<Roster, String> {
    let data = std::fs::read_to_string(path)
        .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
    serde_json::from_str(&data).map_err(|e| format!("invalid roster file {}: {e}", path.display()))
}

/// Load a rulebook from a JSON file, or fall back to the built-in
/// reference rulebook when no file is given.
fn load_rulebook(path: Option<&Path>) -> Result<Rulebook, String> {
    match path {
        Some(path) => {
            let data = std::fs::read_to_string(path)
                .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
            Rulebook::from_json(&data).map_err(|e| e.to_string())
        }
        None => Ok(hm_rules::preset::reference_rulebook()),
    }
}
