//! Data models for notebooks and mastery tracking

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::words::WordEntry;

/// Cumulative attempt counts for one word
///
/// `correct <= total` holds because both counters only ever move together
/// through [`crate::quiz::apply_results`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasteryRecord {
    pub correct: u32,
    pub total: u32,
}

/// Per-word mastery records keyed by `WordEntry.no`
///
/// An ordered map rather than a sparse vector: word numbers may have gaps,
/// and records are created lazily on a word's first attempt.
pub type MasteryLedger = BTreeMap<u32, MasteryRecord>;

/// A named, independently persisted word list plus its mastery ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notebook {
    pub id: Uuid,
    pub name: String,
    pub words: Vec<WordEntry>,
    #[serde(default)]
    pub mastery: MasteryLedger,
    pub created_at: DateTime<Utc>,
}

impl Notebook {
    pub fn new(name: String, words: Vec<WordEntry>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            words,
            mastery: MasteryLedger::new(),
            created_at: Utc::now(),
        }
    }

    /// Highest word number in the list, used as the default range end
    pub fn max_no(&self) -> u32 {
        self.words.iter().map(|w| w.no).max().unwrap_or(0)
    }
}
