//! Input abstraction and document preparation
//!
//! Raw text is split into elementary units (lines or sentences) and each
//! unit is tokenized into words with Unicode word boundaries. The unit text
//! is kept alongside the tokens so segments can be reported verbatim.

use crate::error::{EngineError, Result};
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;
use topiseg_core::Document;
use unicode_segmentation::UnicodeSegmentation;

/// How raw text is divided into elementary units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UnitMode {
    /// Every non-blank line is a unit
    Line,
    /// Unicode sentence boundaries
    #[default]
    Sentence,
}

impl UnitMode {
    /// Short lowercase name
    pub fn name(&self) -> &'static str {
        match self {
            UnitMode::Line => "line",
            UnitMode::Sentence => "sentence",
        }
    }
}

impl FromStr for UnitMode {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "line" | "lines" => Ok(UnitMode::Line),
            "sentence" | "sentences" => Ok(UnitMode::Sentence),
            other => Err(EngineError::ConfigError(format!(
                "unknown unit mode '{other}' (expected 'line' or 'sentence')"
            ))),
        }
    }
}

/// Unified input abstraction
#[derive(Debug, Clone)]
pub enum Input {
    /// Raw text, split according to the configured unit mode
    Text(String),
    /// File path to read from
    File(PathBuf),
    /// Bytes to decode as UTF-8 text
    Bytes(Vec<u8>),
    /// Pre-split units; the unit mode is not applied
    Units(Vec<String>),
}

impl Input {
    /// Create input from a text string
    pub fn from_text<S: Into<String>>(text: S) -> Self {
        Input::Text(text.into())
    }

    /// Create input from a file path
    pub fn from_file<P: Into<PathBuf>>(path: P) -> Self {
        Input::File(path.into())
    }

    /// Create input from bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Self {
        Input::Bytes(bytes)
    }

    /// Create input from already split units
    pub fn from_units<I, S>(units: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Input::Units(units.into_iter().map(Into::into).collect())
    }

    /// Resolve the input into unit texts
    pub fn into_units(self, mode: UnitMode) -> Result<Vec<String>> {
        let text = match self {
            Input::Units(units) => return Ok(units),
            Input::Text(text) => text,
            Input::File(path) => fs::read_to_string(&path).map_err(|e| {
                EngineError::IoError(format!("Failed to read file {}: {e}", path.display()))
            })?,
            Input::Bytes(bytes) => String::from_utf8(bytes)
                .map_err(|e| EngineError::EncodingError(format!("Invalid UTF-8: {e}")))?,
        };
        Ok(split_units(&text, mode))
    }

    /// Size of the input in bytes, when known without reading it
    pub fn estimated_size(&self) -> Option<usize> {
        match self {
            Input::Text(text) => Some(text.len()),
            Input::Bytes(bytes) => Some(bytes.len()),
            Input::Units(units) => Some(units.iter().map(String::len).sum()),
            Input::File(path) => fs::metadata(path).ok().map(|m| m.len() as usize),
        }
    }
}

impl From<String> for Input {
    fn from(text: String) -> Self {
        Input::Text(text)
    }
}

impl From<&str> for Input {
    fn from(text: &str) -> Self {
        Input::Text(text.to_string())
    }
}

impl From<PathBuf> for Input {
    fn from(path: PathBuf) -> Self {
        Input::File(path)
    }
}

/// Split raw text into trimmed, non-blank units
pub fn split_units(text: &str, mode: UnitMode) -> Vec<String> {
    let pieces: Box<dyn Iterator<Item = &str> + '_> = match mode {
        UnitMode::Line => Box::new(text.lines()),
        UnitMode::Sentence => Box::new(text.unicode_sentences()),
    };
    pieces
        .map(str::trim)
        .filter(|unit| !unit.is_empty())
        .map(str::to_string)
        .collect()
}

/// Word tokens of a unit; punctuation and whitespace are dropped
pub fn tokenize(unit: &str) -> Vec<String> {
    unit.split_word_bounds()
        .filter(|word| word.chars().any(char::is_alphanumeric))
        .map(str::to_string)
        .collect()
}

/// Units together with their tokenized document
#[derive(Debug, Clone, Default)]
pub struct PreparedDocument {
    /// Unit texts in document order
    pub units: Vec<String>,
    /// Tokenized units
    pub document: Document,
}

impl PreparedDocument {
    /// Tokenize every unit
    pub fn from_units(units: Vec<String>) -> Self {
        let document = Document::from_units(units.iter().map(|u| tokenize(u)));
        Self { units, document }
    }

    /// Read, split and tokenize an input
    pub fn prepare(input: Input, mode: UnitMode) -> Result<Self> {
        let units = input.into_units(mode)?;
        log::debug!(
            "prepared {} units ({} mode)",
            units.len(),
            mode.name()
        );
        Ok(Self::from_units(units))
    }

    /// Number of units
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether there are no units
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}
