use anyhow::{Context, Result};

use tango_lib::app::App;
use tango_lib::notebook::MasteryRecord;

use crate::OutputFormat;

use super::resolve_notebook;

pub fn run(app: &App, notebook: &str, format: &OutputFormat) -> Result<()> {
    let id = resolve_notebook(app, notebook)?;
    let nb = app
        .notebooks()
        .iter()
        .find(|n| n.id == id)
        .context("Notebook missing")?;
    let stats = app.notebook_stats(id)?;

    match format {
        OutputFormat::Json => {
            let words: Vec<_> = nb
                .words
                .iter()
                .map(|w| {
                    let record = nb.mastery.get(&w.no).copied().unwrap_or_default();
                    serde_json::json!({
                        "no": w.no,
                        "word": w.word,
                        "meaning": w.meaning,
                        "correct": record.correct,
                        "total": record.total,
                    })
                })
                .collect();
            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "name": nb.name,
                    "wordCount": stats.word_count,
                    "learnedCount": stats.learned_count,
                    "masteredCount": stats.mastered_count,
                    "totalAttempts": stats.total_attempts,
                    "masteryPercent": stats.mastery_percent,
                    "words": words,
                }))?
            );
        }
        OutputFormat::Plain => {
            println!(
                "{}: {} words, mastery {}%",
                nb.name, stats.word_count, stats.mastery_percent
            );
            println!("{:>5}  {:<24} {:<24} {}", "No", "Word", "Meaning", "Correct/Total");
            for w in &nb.words {
                let MasteryRecord { correct, total } =
                    nb.mastery.get(&w.no).copied().unwrap_or_default();
                println!(
                    "{:>5}  {:<24} {:<24} {}/{}",
                    w.no, w.word, w.meaning, correct, total
                );
            }
        }
    }

    Ok(())
}
