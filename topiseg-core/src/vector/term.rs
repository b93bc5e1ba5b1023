//! Sparse term-frequency vectors

use std::collections::BTreeMap;

use crate::document::Document;
use crate::lexicon::Lexicon;

/// Sparse term -> count mapping with a cached total.
///
/// Terms are kept ordered so that every pass over a vector visits terms in
/// the same sequence, which keeps floating point accumulation reproducible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TermVector {
    counts: BTreeMap<String, usize>,
    sum: usize,
}

impl TermVector {
    /// Create an empty vector
    pub fn new() -> Self {
        Self::default()
    }

    /// Accumulate the included tokens of a token sequence
    pub fn from_tokens<'t, I>(tokens: I, lexicon: &Lexicon<'_>) -> Self
    where
        I: IntoIterator<Item = &'t str>,
    {
        let mut vector = Self::new();
        for token in tokens {
            if let Some(term) = lexicon.term(token) {
                vector.increment(&term, 1);
            }
        }
        vector
    }

    /// One vector per unit of the document
    pub fn per_unit(document: &Document, lexicon: &Lexicon<'_>) -> Vec<Self> {
        document
            .units()
            .iter()
            .map(|unit| Self::from_tokens(unit.iter().map(String::as_str), lexicon))
            .collect()
    }

    /// A single vector over the whole document
    pub fn global(document: &Document, lexicon: &Lexicon<'_>) -> Self {
        Self::from_tokens(document.tokens(), lexicon)
    }

    /// Add `delta` occurrences of `term`
    pub fn increment(&mut self, term: &str, delta: usize) {
        if delta == 0 {
            return;
        }
        match self.counts.get_mut(term) {
            Some(count) => *count += delta,
            None => {
                self.counts.insert(term.to_string(), delta);
            }
        }
        self.sum += delta;
    }

    /// Remove up to `delta` occurrences of `term`; the term disappears at zero
    pub fn decrement(&mut self, term: &str, delta: usize) {
        let Some(count) = self.counts.get_mut(term) else {
            return;
        };
        let removed = delta.min(*count);
        *count -= removed;
        self.sum -= removed;
        if *count == 0 {
            self.counts.remove(term);
        }
    }

    /// Count of `term`, zero when absent
    pub fn frequency(&self, term: &str) -> usize {
        self.counts.get(term).copied().unwrap_or(0)
    }

    /// Terms with a non-zero count
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    /// `(term, count)` pairs in term order
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(term, &count)| (term.as_str(), count))
    }

    /// Total of all counts
    pub fn sum(&self) -> usize {
        self.sum
    }

    /// Number of distinct terms
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no term has been counted
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}
