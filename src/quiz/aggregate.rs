//! Aggregation of session results into the mastery ledger, plus the
//! derived statistics shown after a session and in the library view

use serde::{Deserialize, Serialize};

use super::models::QuizResult;
use crate::notebook::{MasteryLedger, Notebook};
use crate::words::WordEntry;

/// Fold a session's results into the ledger
///
/// Records are created lazily with zero counts. Updates commute per key,
/// so processing order does not matter; every result is counted exactly
/// once.
pub fn apply_results(ledger: &mut MasteryLedger, results: &[QuizResult]) {
    for result in results {
        let record = ledger.entry(result.word.no).or_default();
        record.total += 1;
        if result.is_correct {
            record.correct += 1;
        }
    }
}

/// The missed subsequence of a session, in presentation order
///
/// Feeds [`super::select_review`] for a review-missed session.
pub fn missed_words(results: &[QuizResult]) -> Vec<WordEntry> {
    results
        .iter()
        .filter(|r| !r.is_correct)
        .map(|r| r.word.clone())
        .collect()
}

fn percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        0
    } else {
        (part as f64 * 100.0 / whole as f64).round() as u32
    }
}

/// Statistics for one completed session
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStats {
    pub total_count: usize,
    pub correct_count: usize,
    pub missed_count: usize,
    /// Rounded percentage, 0 for an empty session
    pub accuracy: u32,
}

impl SessionStats {
    pub fn from_results(results: &[QuizResult]) -> Self {
        let total_count = results.len();
        let correct_count = results.iter().filter(|r| r.is_correct).count();
        Self {
            total_count,
            correct_count,
            missed_count: total_count - correct_count,
            accuracy: percent(correct_count, total_count),
        }
    }
}

/// Whole-notebook statistics derived from the mastery ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotebookStats {
    pub word_count: usize,
    /// Words attempted at least once
    pub learned_count: usize,
    /// Words answered correctly at least once
    pub mastered_count: usize,
    /// Sum of attempts across all words
    pub total_attempts: u32,
    /// Rounded `mastered / word_count`, 0 for an empty notebook
    pub mastery_percent: u32,
}

impl NotebookStats {
    pub fn from_notebook(notebook: &Notebook) -> Self {
        let learned_count = notebook.mastery.values().filter(|r| r.total > 0).count();
        let mastered_count = notebook.mastery.values().filter(|r| r.correct > 0).count();
        let total_attempts = notebook.mastery.values().map(|r| r.total).sum();
        Self {
            word_count: notebook.words.len(),
            learned_count,
            mastered_count,
            total_attempts,
            mastery_percent: percent(mastered_count, notebook.words.len()),
        }
    }
}
