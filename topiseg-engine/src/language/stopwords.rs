//! Stop-word lists
//!
//! The built-in English list is embedded from `configs/stopwords/english.toml`
//! and parsed once on first use. Callers may also load their own list from a
//! TOML string or file in the same format.

use crate::error::{EngineError, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use std::sync::OnceLock;
use topiseg_core::StopWordPredicate;

static ENGLISH: OnceLock<std::result::Result<StopWordList, String>> = OnceLock::new();

/// On-disk stop list format
#[derive(Debug, Deserialize)]
struct StopListFile {
    metadata: StopListMetadata,
    stop_words: StopListWords,
}

#[derive(Debug, Deserialize)]
struct StopListMetadata {
    code: String,
    name: String,
}

#[derive(Debug, Deserialize)]
struct StopListWords {
    words: Vec<String>,
}

/// Case-insensitive stop-word set
#[derive(Debug, Clone, Default)]
pub struct StopWordList {
    code: String,
    name: String,
    words: HashSet<String>,
}

impl StopWordList {
    /// Build a list from the given words
    pub fn from_words<I, S>(code: &str, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            code: code.to_string(),
            name: code.to_string(),
            words: words.into_iter().map(|w| w.as_ref().to_lowercase()).collect(),
        }
    }

    /// Parse a list from TOML (`[metadata]` + `[stop_words] words = [...]`)
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: StopListFile = toml::from_str(content)?;
        if file.stop_words.words.is_empty() {
            return Err(EngineError::StopList(format!(
                "stop list '{}' contains no words",
                file.metadata.code
            )));
        }
        Ok(Self {
            words: file
                .stop_words
                .words
                .iter()
                .map(|w| w.to_lowercase())
                .collect(),
            code: file.metadata.code,
            name: file.metadata.name,
        })
    }

    /// Load a list from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            EngineError::IoError(format!("Failed to read stop list {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&content)
    }

    /// Built-in English list
    pub fn english() -> Result<&'static StopWordList> {
        ENGLISH
            .get_or_init(|| {
                StopWordList::from_toml_str(include_str!("../../configs/stopwords/english.toml"))
                    .map_err(|e| e.to_string())
            })
            .as_ref()
            .map_err(|e| EngineError::StopList(format!("embedded English list: {e}")))
    }

    /// Built-in list for a language code
    pub fn for_language(code: &str) -> Result<&'static StopWordList> {
        match code.to_ascii_lowercase().as_str() {
            "en" | "english" => Self::english(),
            other => Err(EngineError::ConfigError(format!(
                "no built-in stop list for language '{other}'"
            ))),
        }
    }

    /// Language code of the list
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Display name of the list
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of distinct stop words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list is empty
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Case-insensitive membership test
    pub fn contains(&self, word: &str) -> bool {
        if self.words.contains(word) {
            return true;
        }
        word.chars().any(char::is_uppercase) && self.words.contains(&word.to_lowercase())
    }
}

impl StopWordPredicate for StopWordList {
    fn is_stop_word(&self, word: &str) -> bool {
        self.contains(word)
    }
}
