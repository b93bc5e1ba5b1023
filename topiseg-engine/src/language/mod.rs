//! Language resources: stop-word lists and stemmers
//!
//! The core asks for a [`Stemmer`] and a [`StopWordPredicate`]; this module
//! owns concrete implementations and bundles them per configuration.

pub mod stemmer;
pub mod stopwords;

pub use stemmer::SuffixStemmer;
pub use stopwords::StopWordList;

use crate::config::SegmenterConfig;
use crate::error::Result;
use std::sync::Arc;
use topiseg_core::{Lexicon, LowercaseStemmer, NoStopWords, Stemmer, StopWordPredicate};

/// Stemmer and stop-word predicate used for one segmenter
#[derive(Clone)]
pub struct LanguageResources {
    stemmer: Arc<dyn Stemmer>,
    stop_words: Arc<dyn StopWordPredicate>,
    stop_word_count: usize,
}

impl std::fmt::Debug for LanguageResources {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LanguageResources")
            .field("stemmer", &self.stemmer.name())
            .field("stop_words", &self.stop_word_count)
            .finish()
    }
}

impl LanguageResources {
    /// Resources with explicit collaborators
    pub fn new(stemmer: Arc<dyn Stemmer>, stop_words: Arc<dyn StopWordPredicate>) -> Self {
        Self {
            stemmer,
            stop_words,
            stop_word_count: 0,
        }
    }

    /// Lowercasing only, nothing filtered
    pub fn plain() -> Self {
        Self::new(Arc::new(LowercaseStemmer), Arc::new(NoStopWords))
    }

    /// Resolve the resources a configuration asks for
    pub fn from_config(config: &SegmenterConfig) -> Result<Self> {
        let stemmer: Arc<dyn Stemmer> = if config.stemming {
            Arc::new(SuffixStemmer::english())
        } else {
            Arc::new(LowercaseStemmer)
        };

        let list = match (&config.stop_list, config.use_stop_words) {
            (Some(path), _) => Some(StopWordList::from_file(path)?),
            (None, true) => Some(StopWordList::for_language(&config.language)?.clone()),
            (None, false) => None,
        };

        let resources = match list {
            Some(list) => {
                log::debug!("using stop list '{}' ({} words)", list.code(), list.len());
                let count = list.len();
                Self {
                    stemmer,
                    stop_words: Arc::new(list),
                    stop_word_count: count,
                }
            }
            None => Self::new(stemmer, Arc::new(NoStopWords)),
        };
        Ok(resources)
    }

    /// Borrow as the lexicon the algorithms consume
    pub fn lexicon(&self) -> Lexicon<'_> {
        Lexicon::new(self.stemmer.as_ref(), self.stop_words.as_ref())
    }

    /// Name of the active stemmer
    pub fn stemmer_name(&self) -> &'static str {
        self.stemmer.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_resources() {
        let resources = LanguageResources::from_config(&SegmenterConfig::default()).unwrap();
        let lexicon = resources.lexicon();
        assert_eq!(lexicon.term("The"), None);
        assert_eq!(lexicon.term("Rockets"), Some("rocket".to_string()));
        assert_eq!(resources.stemmer_name(), "suffix");
    }

    #[test]
    fn test_plain_resources() {
        let resources = LanguageResources::plain();
        assert_eq!(resources.lexicon().term("The"), Some("the".to_string()));
    }

    #[test]
    fn test_unknown_language_without_stop_list() {
        let config = SegmenterConfig {
            language: "xx".to_string(),
            ..SegmenterConfig::default()
        };
        assert!(LanguageResources::from_config(&config).is_err());

        let config = SegmenterConfig {
            use_stop_words: false,
            ..config
        };
        assert!(LanguageResources::from_config(&config).is_ok());
    }
}
