use anyhow::Result;

use tango_lib::app::App;

use crate::OutputFormat;

pub fn run(app: &App, format: &OutputFormat) -> Result<()> {
    let notebooks = app.notebooks();

    match format {
        OutputFormat::Json => {
            let mut output = Vec::new();
            for nb in notebooks {
                let stats = app.notebook_stats(nb.id)?;
                output.push(serde_json::json!({
                    "id": nb.id.to_string(),
                    "name": nb.name,
                    "wordCount": stats.word_count,
                    "learnedCount": stats.learned_count,
                    "masteredCount": stats.mastered_count,
                    "totalAttempts": stats.total_attempts,
                    "masteryPercent": stats.mastery_percent,
                    "createdAt": nb.created_at.to_rfc3339(),
                }));
            }
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            if notebooks.is_empty() {
                println!("(no notebooks; use 'tango import <file>' to create one)");
                return Ok(());
            }
            for nb in notebooks {
                let stats = app.notebook_stats(nb.id)?;
                println!(
                    "{} ({} words, created {})",
                    nb.name,
                    stats.word_count,
                    nb.created_at.format("%Y-%m-%d")
                );
                println!(
                    "    learned {}  mastered {}  attempts {}  mastery {}%",
                    stats.learned_count,
                    stats.mastered_count,
                    stats.total_attempts,
                    stats.mastery_percent
                );
            }
        }
    }

    Ok(())
}
