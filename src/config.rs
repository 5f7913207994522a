//! Application configuration
//!
//! Loaded from `config.json` in the data directory; a missing or
//! unreadable file falls back to defaults. The `GEMINI_API_KEY`
//! environment variable overrides the configured key.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

fn default_model() -> String {
    "gemini-2.0-flash".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// API key for the hint provider; `None` disables hints
    pub api_key: Option<String>,
    pub model: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_model(),
        }
    }
}

impl Config {
    /// Load from the data directory, applying the env var override
    pub fn load(data_dir: &Path) -> Self {
        let mut config = Self::load_file(&data_dir.join("config.json"));
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            if !key.is_empty() {
                config.api_key = Some(key);
            }
        }
        config
    }

    /// Load from a config file without consulting the environment
    pub fn load_file(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match fs::read_to_string(path) {
            Ok(content) => match serde_json::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("Failed to parse {}: {}; using defaults", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Failed to read {}: {}; using defaults", path.display(), e);
                Self::default()
            }
        }
    }
}
