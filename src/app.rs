//! Application state container
//!
//! One authoritative owner for the whole UI-facing state: the notebook
//! list, the active notebook, the current quiz selection, the running
//! session, and the last results. The presentation layer feeds user
//! intents in through the methods here and renders from the accessors;
//! every mutation that the original persisted is followed by a full
//! snapshot save.

use thiserror::Error;
use uuid::Uuid;

use crate::config::Config;
use crate::hints::{AiHint, HintClient};
use crate::notebook::{Notebook, NotebookStorage, StorageError};
use crate::quiz::{
    apply_results, missed_words, select, select_review, NotebookStats, QuizResult, QuizSettings,
    Session, SessionError, SessionStats,
};
use crate::words::WordEntry;

const DEFAULT_NOTEBOOK_NAME: &str = "マイ単語帳";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Notebook not found: {0}")]
    NotebookNotFound(Uuid),

    #[error("No notebook is selected")]
    NoActiveNotebook,

    #[error("No quiz session is running")]
    NoSession,

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error("No completed session to work from")]
    NoCompletedSession,

    #[error("The last session had no missed words")]
    NoMissedWords,
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Which screen the presentation layer should be showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppStage {
    Library,
    Settings,
    Quiz,
    Result,
}

pub struct App {
    storage: NotebookStorage,
    hints: HintClient,
    notebooks: Vec<Notebook>,
    active_id: Option<Uuid>,
    settings: QuizSettings,
    quiz_list: Vec<WordEntry>,
    session: Option<Session>,
    results: Vec<QuizResult>,
    stage: AppStage,
}

impl App {
    pub fn new(storage: NotebookStorage, config: &Config) -> Result<Self> {
        storage.init()?;
        let notebooks = storage.load()?;
        Ok(Self {
            storage,
            hints: HintClient::new(config),
            notebooks,
            active_id: None,
            settings: QuizSettings::whole_range(100),
            quiz_list: Vec::new(),
            session: None,
            results: Vec::new(),
            stage: AppStage::Library,
        })
    }

    // ===== Accessors =====

    pub fn stage(&self) -> AppStage {
        self.stage
    }

    pub fn notebooks(&self) -> &[Notebook] {
        &self.notebooks
    }

    pub fn active_notebook(&self) -> Option<&Notebook> {
        let id = self.active_id?;
        self.notebooks.iter().find(|n| n.id == id)
    }

    pub fn settings(&self) -> &QuizSettings {
        &self.settings
    }

    /// The word currently presented, while a session is running
    pub fn current_word(&self) -> Option<&WordEntry> {
        self.session.as_ref().and_then(|s| s.current_word())
    }

    /// Session progress as `(answered, total)`
    pub fn progress(&self) -> Option<(usize, usize)> {
        self.session.as_ref().map(|s| s.progress())
    }

    /// The last completed session's results
    pub fn results(&self) -> &[QuizResult] {
        &self.results
    }

    pub fn session_stats(&self) -> SessionStats {
        SessionStats::from_results(&self.results)
    }

    pub fn notebook_stats(&self, id: Uuid) -> Result<NotebookStats> {
        let notebook = self
            .notebooks
            .iter()
            .find(|n| n.id == id)
            .ok_or(AppError::NotebookNotFound(id))?;
        Ok(NotebookStats::from_notebook(notebook))
    }

    fn active_notebook_mut(&mut self) -> Result<&mut Notebook> {
        let id = self.active_id.ok_or(AppError::NoActiveNotebook)?;
        self.notebooks
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(AppError::NotebookNotFound(id))
    }

    // ===== Notebook intents =====

    /// Create a notebook from imported words, newest first, and make it
    /// active
    pub fn import_words(&mut self, words: Vec<WordEntry>, name: Option<String>) -> Result<Uuid> {
        let name =
            name.unwrap_or_else(|| format!("新しい単語帳 {}", self.notebooks.len() + 1));
        let notebook = Notebook::new(name, words);
        let id = notebook.id;

        self.notebooks.insert(0, notebook);
        self.storage.save(&self.notebooks)?;

        self.active_id = Some(id);
        self.stage = AppStage::Settings;
        Ok(id)
    }

    pub fn select_notebook(&mut self, id: Uuid) -> Result<()> {
        if !self.notebooks.iter().any(|n| n.id == id) {
            return Err(AppError::NotebookNotFound(id));
        }
        self.active_id = Some(id);
        self.stage = AppStage::Settings;
        Ok(())
    }

    /// Rename a notebook; an empty name falls back to a default
    pub fn rename_notebook(&mut self, id: Uuid, name: &str) -> Result<()> {
        let notebook = self
            .notebooks
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or(AppError::NotebookNotFound(id))?;

        let name = name.trim();
        notebook.name = if name.is_empty() {
            DEFAULT_NOTEBOOK_NAME.to_string()
        } else {
            name.to_string()
        };
        self.storage.save(&self.notebooks)?;
        Ok(())
    }

    /// Delete a notebook and all of its mastery records
    pub fn delete_notebook(&mut self, id: Uuid) -> Result<()> {
        if !self.notebooks.iter().any(|n| n.id == id) {
            return Err(AppError::NotebookNotFound(id));
        }
        self.notebooks.retain(|n| n.id != id);
        self.storage.save(&self.notebooks)?;

        if self.active_id == Some(id) {
            self.active_id = None;
            self.stage = AppStage::Library;
        }
        Ok(())
    }

    // ===== Quiz intents =====

    /// Select words for the given settings and start a session
    ///
    /// An empty selection completes immediately with zero results.
    pub fn start_quiz(&mut self, settings: QuizSettings) -> Result<()> {
        let selection = {
            let notebook = self.active_notebook().ok_or(AppError::NoActiveNotebook)?;
            select(&notebook.words, &settings)
        };
        self.quiz_list = selection;
        self.settings = settings;
        self.begin_session()
    }

    /// Run the same selection again
    pub fn restart_same(&mut self) -> Result<()> {
        if self.results.is_empty() || self.quiz_list.is_empty() {
            return Err(AppError::NoCompletedSession);
        }
        self.begin_session()
    }

    /// Start a review session over the last session's missed words
    pub fn review_missed(&mut self) -> Result<()> {
        if self.results.is_empty() {
            return Err(AppError::NoCompletedSession);
        }
        let missed = missed_words(&self.results);
        if missed.is_empty() {
            return Err(AppError::NoMissedWords);
        }
        self.quiz_list = select_review(&missed);
        self.begin_session()
    }

    fn begin_session(&mut self) -> Result<()> {
        self.results.clear();
        let session = Session::new(self.quiz_list.clone());
        if session.is_complete() {
            self.session = Some(session);
            return self.finish_session();
        }
        self.session = Some(session);
        self.stage = AppStage::Quiz;
        Ok(())
    }

    pub fn reveal(&mut self) -> Result<()> {
        let session = self.session.as_mut().ok_or(AppError::NoSession)?;
        session.reveal()?;
        Ok(())
    }

    /// Record a judgment; finishes the session after the last card
    pub fn judge(&mut self, is_correct: bool) -> Result<AppStage> {
        let session = self.session.as_mut().ok_or(AppError::NoSession)?;
        session.judge(is_correct)?;
        if session.is_complete() {
            self.finish_session()?;
        }
        Ok(self.stage)
    }

    /// Abort the running session, discarding partial results
    ///
    /// The selection is discarded too: a cancelled session is not a
    /// completed one, so it cannot be restarted or reviewed.
    pub fn cancel_quiz(&mut self) -> Result<()> {
        if self.session.take().is_none() {
            return Err(AppError::NoSession);
        }
        self.quiz_list.clear();
        self.stage = AppStage::Settings;
        Ok(())
    }

    fn finish_session(&mut self) -> Result<()> {
        let session = self.session.take().ok_or(AppError::NoSession)?;
        self.results = session.into_results();

        let results = std::mem::take(&mut self.results);
        {
            let notebook = self.active_notebook_mut()?;
            apply_results(&mut notebook.mastery, &results);
        }
        self.results = results;

        self.storage.save(&self.notebooks)?;
        self.stage = AppStage::Result;
        Ok(())
    }

    // ===== Navigation intents =====

    pub fn change_settings(&mut self) -> Result<()> {
        if self.active_id.is_none() {
            return Err(AppError::NoActiveNotebook);
        }
        self.stage = AppStage::Settings;
        Ok(())
    }

    pub fn back_to_library(&mut self) {
        self.active_id = None;
        self.session = None;
        self.stage = AppStage::Library;
    }

    // ===== Hints =====

    /// Fetch an AI hint for the current card, falling back to the
    /// placeholder on any provider failure
    pub fn fetch_hint(&self) -> Result<AiHint> {
        let word = self.current_word().ok_or(AppError::NoSession)?;
        Ok(self.hints.fetch_or_placeholder(&word.word, &word.meaning))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quiz::QuizOrder;

    fn test_app(dir: &std::path::Path) -> App {
        let storage = NotebookStorage::new(dir.to_path_buf());
        App::new(storage, &Config::default()).unwrap()
    }

    fn words(n: u32) -> Vec<WordEntry> {
        (1..=n)
            .map(|no| WordEntry::new(no, format!("w{}", no), format!("m{}", no)))
            .collect()
    }

    fn sequential(start: u32, end: u32, count: usize) -> QuizSettings {
        QuizSettings {
            range_start: start,
            range_end: end,
            question_count: count,
            order: QuizOrder::Sequential,
        }
    }

    #[test]
    fn test_import_creates_active_notebook_newest_first() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());

        app.import_words(words(3), None).unwrap();
        let second = app.import_words(words(2), Some("N2".to_string())).unwrap();

        assert_eq!(app.notebooks().len(), 2);
        assert_eq!(app.notebooks()[0].id, second);
        assert_eq!(app.notebooks()[0].name, "N2");
        assert_eq!(app.notebooks()[1].name, "新しい単語帳 1");
        assert_eq!(app.stage(), AppStage::Settings);
    }

    #[test]
    fn test_quiz_flow_updates_ledger_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());
        let id = app.import_words(words(5), None).unwrap();

        app.start_quiz(sequential(1, 5, 3)).unwrap();
        assert_eq!(app.stage(), AppStage::Quiz);
        assert_eq!(app.current_word().unwrap().no, 1);

        app.reveal().unwrap();
        assert_eq!(app.judge(true).unwrap(), AppStage::Quiz);
        app.reveal().unwrap();
        app.judge(false).unwrap();
        app.reveal().unwrap();
        assert_eq!(app.judge(true).unwrap(), AppStage::Result);

        let stats = app.session_stats();
        assert_eq!(stats.total_count, 3);
        assert_eq!(stats.correct_count, 2);
        assert_eq!(stats.accuracy, 67);

        let nb_stats = app.notebook_stats(id).unwrap();
        assert_eq!(nb_stats.learned_count, 3);
        assert_eq!(nb_stats.mastered_count, 2);

        // A fresh App sees the saved ledger
        let reloaded = test_app(dir.path());
        assert_eq!(reloaded.notebooks()[0].mastery.len(), 3);
    }

    #[test]
    fn test_empty_range_completes_immediately() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());
        app.import_words(words(3), None).unwrap();

        app.start_quiz(sequential(10, 20, 5)).unwrap();

        assert_eq!(app.stage(), AppStage::Result);
        assert!(app.results().is_empty());
        assert_eq!(app.session_stats().accuracy, 0);
    }

    #[test]
    fn test_cancel_discards_partial_results() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());
        let id = app.import_words(words(3), None).unwrap();

        app.start_quiz(sequential(1, 3, 3)).unwrap();
        app.reveal().unwrap();
        app.judge(false).unwrap();
        app.cancel_quiz().unwrap();

        assert_eq!(app.stage(), AppStage::Settings);
        assert_eq!(app.notebook_stats(id).unwrap().learned_count, 0);
    }

    #[test]
    fn test_cancel_leaves_nothing_to_restart_or_review() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());
        app.import_words(words(3), None).unwrap();

        app.start_quiz(sequential(1, 3, 3)).unwrap();
        app.reveal().unwrap();
        app.judge(true).unwrap();
        app.cancel_quiz().unwrap();

        assert!(matches!(app.restart_same(), Err(AppError::NoCompletedSession)));
        assert!(matches!(app.review_missed(), Err(AppError::NoCompletedSession)));
        assert_eq!(app.stage(), AppStage::Settings);
    }

    #[test]
    fn test_review_missed_requizzes_exactly_the_missed_words() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());
        app.import_words(words(5), None).unwrap();

        app.start_quiz(sequential(1, 5, 5)).unwrap();
        for no in 1..=5 {
            app.reveal().unwrap();
            // Miss words 2 and 4
            app.judge(no != 2 && no != 4).unwrap();
        }
        assert_eq!(app.stage(), AppStage::Result);

        app.review_missed().unwrap();
        assert_eq!(app.stage(), AppStage::Quiz);
        let (_, total) = app.progress().unwrap();
        assert_eq!(total, 2);

        let mut seen = Vec::new();
        while app.stage() == AppStage::Quiz {
            seen.push(app.current_word().unwrap().no);
            app.reveal().unwrap();
            app.judge(true).unwrap();
        }
        seen.sort_unstable();
        assert_eq!(seen, vec![2, 4]);
    }

    #[test]
    fn test_review_missed_with_perfect_session_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());
        app.import_words(words(2), None).unwrap();

        app.start_quiz(sequential(1, 2, 2)).unwrap();
        app.reveal().unwrap();
        app.judge(true).unwrap();
        app.reveal().unwrap();
        app.judge(true).unwrap();

        assert!(matches!(app.review_missed(), Err(AppError::NoMissedWords)));
    }

    #[test]
    fn test_restart_reuses_the_same_selection() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());
        app.import_words(words(3), None).unwrap();

        app.start_quiz(sequential(1, 3, 2)).unwrap();
        app.reveal().unwrap();
        app.judge(false).unwrap();
        app.reveal().unwrap();
        app.judge(false).unwrap();

        app.restart_same().unwrap();
        assert_eq!(app.stage(), AppStage::Quiz);
        assert!(app.results().is_empty());
        assert_eq!(app.progress().unwrap(), (0, 2));
        assert_eq!(app.current_word().unwrap().no, 1);
    }

    #[test]
    fn test_rename_empty_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());
        let id = app.import_words(words(1), None).unwrap();

        app.rename_notebook(id, "  ").unwrap();
        assert_eq!(app.notebooks()[0].name, DEFAULT_NOTEBOOK_NAME);

        app.rename_notebook(id, "TOEIC").unwrap();
        assert_eq!(app.notebooks()[0].name, "TOEIC");
    }

    #[test]
    fn test_delete_active_notebook_returns_to_library() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = test_app(dir.path());
        let id = app.import_words(words(1), None).unwrap();

        app.delete_notebook(id).unwrap();

        assert!(app.notebooks().is_empty());
        assert!(app.active_notebook().is_none());
        assert_eq!(app.stage(), AppStage::Library);

        let reloaded = test_app(dir.path());
        assert!(reloaded.notebooks().is_empty());
    }
}
