//! Capability interfaces for term extraction
//!
//! The segmentation core never tokenizes, stems or decides stop words on its
//! own. Callers inject those decisions through two small traits, which a
//! [`Lexicon`] combines into the single "token -> optional term" mapping the
//! algorithms consume.

/// Reduces a word to its stem
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form
    fn stem(&self, word: &str) -> String;

    /// Name of this stemmer, for diagnostics
    fn name(&self) -> &'static str {
        "custom"
    }
}

/// Decides stop-word membership
pub trait StopWordPredicate: Send + Sync {
    /// Whether `word` is a stop word
    fn is_stop_word(&self, word: &str) -> bool;
}

/// Stemmer that only lowercases
#[derive(Debug, Clone, Copy, Default)]
pub struct LowercaseStemmer;

impl Stemmer for LowercaseStemmer {
    fn stem(&self, word: &str) -> String {
        word.to_lowercase()
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

/// Predicate that treats no word as a stop word
#[derive(Debug, Clone, Copy, Default)]
pub struct NoStopWords;

impl StopWordPredicate for NoStopWords {
    fn is_stop_word(&self, _word: &str) -> bool {
        false
    }
}

impl<F> StopWordPredicate for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_stop_word(&self, word: &str) -> bool {
        self(word)
    }
}

/// Whether a token counts as a word: it must contain a letter or digit
pub fn is_word(token: &str) -> bool {
    token.chars().any(char::is_alphanumeric)
}

/// Term extraction policy: word test, stop-word filter and stemming
#[derive(Clone, Copy)]
pub struct Lexicon<'a> {
    stemmer: &'a dyn Stemmer,
    stop_words: &'a dyn StopWordPredicate,
}

impl std::fmt::Debug for Lexicon<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Lexicon")
            .field("stemmer", &self.stemmer.name())
            .field("stop_words", &"<predicate>")
            .finish()
    }
}

impl<'a> Lexicon<'a> {
    /// Combine a stemmer and a stop-word predicate
    pub fn new(stemmer: &'a dyn Stemmer, stop_words: &'a dyn StopWordPredicate) -> Self {
        Self {
            stemmer,
            stop_words,
        }
    }

    /// Whether the token takes part in term vectors
    pub fn includes(&self, token: &str) -> bool {
        is_word(token) && !self.stop_words.is_stop_word(token)
    }

    /// The term a token contributes, if any
    pub fn term(&self, token: &str) -> Option<String> {
        if self.includes(token) {
            Some(self.stemmer.stem(token))
        } else {
            None
        }
    }
}
