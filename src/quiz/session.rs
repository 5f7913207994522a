//! The flashcard session state machine
//!
//! A session walks a fixed word list one card at a time:
//! `Presenting(i)` → (reveal) → `Revealed(i)` → (judge) → `Presenting(i+1)`
//! or `Complete`. Judgments are user-supplied booleans; there are no
//! retries or timeouts. Cancellation is handled by the owner dropping the
//! session, which discards the partial results.

use thiserror::Error;

use super::models::QuizResult;
use crate::words::WordEntry;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("No card is being presented")]
    NotPresenting,

    #[error("The current card has not been revealed")]
    NotRevealed,

    #[error("The session is already complete")]
    Complete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Presenting(usize),
    Revealed(usize),
    Complete,
}

#[derive(Debug)]
pub struct Session {
    words: Vec<WordEntry>,
    state: SessionState,
    results: Vec<QuizResult>,
}

impl Session {
    /// Start a session over the given selection
    ///
    /// An empty selection starts in `Complete` with no results, which is
    /// how a zero-sized filtered range degrades.
    pub fn new(words: Vec<WordEntry>) -> Self {
        let state = if words.is_empty() {
            SessionState::Complete
        } else {
            SessionState::Presenting(0)
        };
        Self {
            words,
            state,
            results: Vec::new(),
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == SessionState::Complete
    }

    /// The word currently being presented or revealed
    pub fn current_word(&self) -> Option<&WordEntry> {
        match self.state {
            SessionState::Presenting(i) | SessionState::Revealed(i) => self.words.get(i),
            SessionState::Complete => None,
        }
    }

    /// Progress as `(answered, total)`
    pub fn progress(&self) -> (usize, usize) {
        (self.results.len(), self.words.len())
    }

    /// Reveal the meaning of the current card
    pub fn reveal(&mut self) -> Result<(), SessionError> {
        match self.state {
            SessionState::Presenting(i) => {
                self.state = SessionState::Revealed(i);
                Ok(())
            }
            SessionState::Revealed(_) => Err(SessionError::NotPresenting),
            SessionState::Complete => Err(SessionError::Complete),
        }
    }

    /// Record the judgment for the revealed card and advance
    pub fn judge(&mut self, is_correct: bool) -> Result<SessionState, SessionError> {
        match self.state {
            SessionState::Revealed(i) => {
                self.results.push(QuizResult {
                    word: self.words[i].clone(),
                    is_correct,
                });
                self.state = if i + 1 < self.words.len() {
                    SessionState::Presenting(i + 1)
                } else {
                    SessionState::Complete
                };
                Ok(self.state)
            }
            SessionState::Presenting(_) => Err(SessionError::NotRevealed),
            SessionState::Complete => Err(SessionError::Complete),
        }
    }

    /// Results recorded so far (the full sequence once complete)
    pub fn results(&self) -> &[QuizResult] {
        &self.results
    }

    pub fn into_results(self) -> Vec<QuizResult> {
        self.results
    }
}
