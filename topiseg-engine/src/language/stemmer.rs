//! Light suffix-stripping stemmer

use topiseg_core::Stemmer;

/// Common English inflectional and derivational suffixes
const ENGLISH_SUFFIXES: &[&str] = &[
    "ing", "ed", "er", "est", "ly", "s", "es", "ies", "ied", "tion", "sion", "able", "ible",
    "ment", "ness", "ful",
];

/// Stemmer that lowercases and removes the longest matching suffix.
///
/// Words of three characters or fewer are left alone, and a suffix is only
/// removed when at least three characters remain.
#[derive(Debug, Clone)]
pub struct SuffixStemmer {
    // Longest first
    suffixes: Vec<String>,
}

impl Default for SuffixStemmer {
    fn default() -> Self {
        Self::english()
    }
}

impl SuffixStemmer {
    /// Stemmer with the built-in English suffix list
    pub fn english() -> Self {
        Self::with_suffixes(ENGLISH_SUFFIXES.iter().copied())
    }

    /// Stemmer with custom suffixes
    pub fn with_suffixes<I, S>(suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut suffixes: Vec<String> = suffixes.into_iter().map(Into::into).collect();
        suffixes.sort_by_key(|s| std::cmp::Reverse(s.chars().count()));
        Self { suffixes }
    }

    /// Suffixes in matching order
    pub fn suffixes(&self) -> &[String] {
        &self.suffixes
    }
}

impl Stemmer for SuffixStemmer {
    fn stem(&self, word: &str) -> String {
        let word = word.to_lowercase();
        let chars = word.chars().count();
        if chars <= 3 {
            return word;
        }

        for suffix in &self.suffixes {
            if chars > suffix.chars().count() + 2 {
                if let Some(stripped) = word.strip_suffix(suffix.as_str()) {
                    return stripped.to_string();
                }
            }
        }

        word
    }

    fn name(&self) -> &'static str {
        "suffix"
    }
}
