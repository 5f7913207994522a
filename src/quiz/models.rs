//! Data models for quiz configuration and results

use serde::{Deserialize, Serialize};

use crate::words::WordEntry;

/// Presentation order for a quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizOrder {
    Sequential,
    Random,
}

impl Default for QuizOrder {
    fn default() -> Self {
        Self::Random
    }
}

/// Settings for one quiz session
///
/// `range_start..=range_end` is a closed interval over word numbers.
/// `question_count` is taken literally: 0 selects zero questions. The
/// fallback to a default count when the user leaves the field blank
/// happens in the settings UI, not here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizSettings {
    pub range_start: u32,
    pub range_end: u32,
    pub question_count: usize,
    #[serde(default)]
    pub order: QuizOrder,
}

/// Default question count applied by the settings layer when no count
/// was given
pub const DEFAULT_QUESTION_COUNT: usize = 10;

impl QuizSettings {
    /// Settings covering a whole notebook with the default count
    pub fn whole_range(max_no: u32) -> Self {
        Self {
            range_start: 1,
            range_end: max_no,
            question_count: DEFAULT_QUESTION_COUNT,
            order: QuizOrder::default(),
        }
    }
}

/// The self-graded outcome for one presented word
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub word: WordEntry,
    pub is_correct: bool,
}
