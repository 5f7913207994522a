//! Storage for the notebook list
//!
//! All notebooks live in a single snapshot file:
//! ```text
//! {data-dir}/tango/notebooks.json
//! ```
//! Every mutation is a full read-then-overwrite; there is exactly one
//! logical writer (one running instance), so no locking is needed.

use std::fs;
use std::path::PathBuf;

use thiserror::Error;

use super::models::Notebook;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Data directory not found")]
    DataDirNotFound,
}

pub type Result<T> = std::result::Result<T, StorageError>;

pub struct NotebookStorage {
    base_path: PathBuf,
}

impl NotebookStorage {
    pub fn new(base_path: PathBuf) -> Self {
        Self { base_path }
    }

    /// Get the default data directory
    pub fn default_data_dir() -> Result<PathBuf> {
        dirs::data_local_dir()
            .map(|p| p.join("tango"))
            .ok_or(StorageError::DataDirNotFound)
    }

    pub fn base_path(&self) -> &PathBuf {
        &self.base_path
    }

    fn notebooks_path(&self) -> PathBuf {
        self.base_path.join("notebooks.json")
    }

    /// Initialize the storage directory
    pub fn init(&self) -> Result<()> {
        fs::create_dir_all(&self.base_path)?;
        Ok(())
    }

    /// Load all notebooks from the snapshot file
    ///
    /// A missing file means no notebooks yet. An unparsable file is logged
    /// and treated the same way rather than failing startup; the next save
    /// overwrites it.
    pub fn load(&self) -> Result<Vec<Notebook>> {
        let path = self.notebooks_path();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)?;
        match serde_json::from_str(&content) {
            Ok(notebooks) => Ok(notebooks),
            Err(e) => {
                log::warn!(
                    "Failed to parse {}: {}; starting with an empty notebook list",
                    path.display(),
                    e
                );
                Ok(Vec::new())
            }
        }
    }

    /// Overwrite the snapshot file with the given notebook list
    pub fn save(&self, notebooks: &[Notebook]) -> Result<()> {
        self.init()?;
        let content = serde_json::to_string_pretty(notebooks)?;
        fs::write(self.notebooks_path(), content)?;
        Ok(())
    }
}
