//! AI learning hints
//!
//! Fetches an example sentence, its translation, and a memorization tip
//! for the current word from the Gemini API. Hints are decorative: any
//! failure is logged and replaced with a fixed placeholder, and nothing
//! here ever affects quiz state.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use thiserror::Error;

use crate::config::Config;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

#[derive(Error, Debug)]
pub enum HintError {
    #[error("No API key configured")]
    MissingApiKey,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("Malformed response: {0}")]
    Malformed(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiHint {
    pub example_sentence: String,
    pub translation: String,
    pub tips: String,
}

impl AiHint {
    /// Fixed fallback shown when the provider is unreachable
    pub fn placeholder() -> Self {
        Self {
            example_sentence: "AIへの接続に失敗しました。".to_string(),
            translation: "通信環境を確認してください。".to_string(),
            tips: "時間を置いて再度お試しください。".to_string(),
        }
    }
}

pub struct HintClient {
    client: reqwest::blocking::Client,
    api_key: Option<String>,
    model: String,
}

impl HintClient {
    pub fn new(config: &Config) -> Self {
        Self {
            client: reqwest::blocking::Client::new(),
            api_key: config.api_key.clone(),
            model: config.model.clone(),
        }
    }

    /// Fetch a hint, or the placeholder on any failure
    pub fn fetch_or_placeholder(&self, word: &str, meaning: &str) -> AiHint {
        match self.fetch(word, meaning) {
            Ok(hint) => hint,
            Err(e) => {
                log::warn!("AI hint request for '{}' failed: {}", word, e);
                AiHint::placeholder()
            }
        }
    }

    /// Fetch a hint from the Gemini `generateContent` endpoint
    ///
    /// The response is constrained to a JSON object with exactly the three
    /// hint fields, so the candidate text parses straight into [`AiHint`].
    pub fn fetch(&self, word: &str, meaning: &str) -> Result<AiHint, HintError> {
        let api_key = self.api_key.as_deref().ok_or(HintError::MissingApiKey)?;
        let url = format!("{}/{}:generateContent?key={}", API_BASE, self.model, api_key);

        let prompt = format!(
            "英単語「{}」（意味：{}）について、実用的な英語例文、\
             その日本語訳、そして覚え方のコツを教えてください。",
            word, meaning
        );
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": {
                    "type": "OBJECT",
                    "properties": {
                        "exampleSentence": { "type": "STRING" },
                        "translation": { "type": "STRING" },
                        "tips": { "type": "STRING" }
                    },
                    "required": ["exampleSentence", "translation", "tips"]
                }
            }
        });

        let response = self
            .client
            .post(&url)
            .json(&body)
            .timeout(Duration::from_secs(30))
            .send()?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().unwrap_or_default();
            return Err(HintError::Api(format!("{} - {}", status, text)));
        }

        let value: Value = response.json()?;
        let text = value
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(Value::as_str)
            .ok_or_else(|| HintError::Malformed("missing candidate text".to_string()))?;

        serde_json::from_str(text).map_err(|e| HintError::Malformed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_an_error() {
        let client = HintClient::new(&Config::default());
        assert!(matches!(
            client.fetch("persist", "持続する"),
            Err(HintError::MissingApiKey)
        ));
    }

    #[test]
    fn test_missing_key_falls_back_to_placeholder() {
        let client = HintClient::new(&Config::default());
        let hint = client.fetch_or_placeholder("persist", "持続する");
        assert_eq!(hint.example_sentence, AiHint::placeholder().example_sentence);
    }

    #[test]
    fn test_hint_parses_from_candidate_text() {
        let text = r#"{"exampleSentence":"She persisted.","translation":"彼女は続けた。","tips":"per + sist"}"#;
        let hint: AiHint = serde_json::from_str(text).unwrap();
        assert_eq!(hint.example_sentence, "She persisted.");
        assert_eq!(hint.tips, "per + sist");
    }
}
