//! Word entries as imported from a spreadsheet

use serde::{Deserialize, Serialize};

/// A single vocabulary entry
///
/// `no` is unique within a notebook but not necessarily contiguous;
/// word lists often skip numbers or start above 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WordEntry {
    pub no: u32,
    pub word: String,
    pub meaning: String,
}

impl WordEntry {
    pub fn new(no: u32, word: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            no,
            word: word.into(),
            meaning: meaning.into(),
        }
    }
}
