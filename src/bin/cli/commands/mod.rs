pub mod delete;
pub mod import;
pub mod list;
pub mod quiz;
pub mod rename;
pub mod stats;

use std::io::{self, Write};

use anyhow::{bail, Result};
use uuid::Uuid;

use tango_lib::app::App;
use tango_lib::notebook::Notebook;

/// Find a notebook by name (case-insensitive prefix match)
pub fn resolve_notebook(app: &App, name: &str) -> Result<Uuid> {
    let notebooks = app.notebooks();
    let name_lower = name.to_lowercase();

    // Exact match first
    if let Some(nb) = notebooks.iter().find(|n| n.name.to_lowercase() == name_lower) {
        return Ok(nb.id);
    }

    let matches: Vec<&Notebook> = notebooks
        .iter()
        .filter(|n| n.name.to_lowercase().starts_with(&name_lower))
        .collect();

    match matches.len() {
        0 => bail!(
            "No notebook matching '{}'. Available notebooks:\n{}",
            name,
            notebooks
                .iter()
                .map(|n| format!("  - {}", n.name))
                .collect::<Vec<_>>()
                .join("\n")
        ),
        1 => Ok(matches[0].id),
        _ => bail!(
            "Ambiguous notebook name '{}'. Matches:\n{}",
            name,
            matches
                .iter()
                .map(|n| format!("  - {}", n.name))
                .collect::<Vec<_>>()
                .join("\n")
        ),
    }
}

/// Print a prompt and read one trimmed line from stdin
///
/// EOF reads as "q" so a closed stdin cleanly cancels interactive loops.
pub fn prompt(text: &str) -> Result<String> {
    print!("{}", text);
    io::stdout().flush()?;

    let mut line = String::new();
    let bytes = io::stdin().read_line(&mut line)?;
    if bytes == 0 {
        return Ok("q".to_string());
    }
    Ok(line.trim().to_string())
}
