//! Notebooks: named word lists with per-word mastery records

mod models;
mod storage;

pub use models::{MasteryLedger, MasteryRecord, Notebook};
pub use storage::{NotebookStorage, Result, StorageError};
