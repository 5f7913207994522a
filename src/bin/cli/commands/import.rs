use std::path::Path;

use anyhow::{Context, Result};

use tango_lib::app::App;
use tango_lib::import::import_file;

use crate::OutputFormat;

pub fn run(app: &mut App, file: &Path, name: Option<String>, format: &OutputFormat) -> Result<()> {
    let words = import_file(file).with_context(|| format!("Failed to import {}", file.display()))?;
    let word_count = words.len();

    let name = name.or_else(|| {
        file.file_stem()
            .map(|stem| stem.to_string_lossy().to_string())
    });
    let id = app.import_words(words, name)?;

    let notebook = app
        .notebooks()
        .iter()
        .find(|n| n.id == id)
        .context("Imported notebook missing")?;

    match format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "id": notebook.id.to_string(),
                    "name": notebook.name,
                    "wordCount": word_count,
                }))?
            );
        }
        OutputFormat::Plain => {
            println!(
                "Imported {} words into notebook '{}'.",
                word_count, notebook.name
            );
        }
    }

    Ok(())
}
