//! Quiz logic: word selection, the session state machine, and result
//! aggregation into the mastery ledger

mod aggregate;
mod models;
mod selector;
mod session;

pub use aggregate::{apply_results, missed_words, NotebookStats, SessionStats};
pub use models::{QuizOrder, QuizResult, QuizSettings, DEFAULT_QUESTION_COUNT};
pub use selector::{select, select_review};
pub use session::{Session, SessionError, SessionState};
