//! Per-term weights derived from a global term vector

use std::collections::BTreeMap;

use super::TermVector;

/// Derived statistics for one term
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TermWeight {
    /// `count / sum`
    pub probability: f64,
    /// `-ln(probability)`
    pub entropy: f64,
    /// `1 / count`
    pub inverse_frequency: f64,
}

/// Read-only term weights computed from a global [`TermVector`].
///
/// Only `inverse_frequency` feeds the weighted cosine. Entropy is derived
/// alongside it for callers that want to inspect term informativeness.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeightVector {
    weights: BTreeMap<String, TermWeight>,
}

impl WeightVector {
    /// Derive weights for every term of `global`
    pub fn from_term_vector(global: &TermVector) -> Self {
        let total = global.sum() as f64;
        let weights = global
            .iter()
            .map(|(term, count)| {
                let count = count as f64;
                let probability = count / total;
                let weight = TermWeight {
                    probability,
                    entropy: -probability.ln(),
                    inverse_frequency: 1.0 / count,
                };
                (term.to_string(), weight)
            })
            .collect();
        Self { weights }
    }

    /// Full statistics for a term
    pub fn get(&self, term: &str) -> Option<&TermWeight> {
        self.weights.get(term)
    }

    /// Inverse frequency of a term; unseen terms weigh nothing
    pub fn inverse_weight(&self, term: &str) -> f64 {
        self.weights
            .get(term)
            .map_or(0.0, |weight| weight.inverse_frequency)
    }

    /// Probability of a term; zero when unseen
    pub fn probability(&self, term: &str) -> f64 {
        self.weights.get(term).map_or(0.0, |weight| weight.probability)
    }

    /// Entropy of a term; zero when unseen
    pub fn entropy(&self, term: &str) -> f64 {
        self.weights.get(term).map_or(0.0, |weight| weight.entropy)
    }

    /// Number of weighted terms
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Whether no term is weighted
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}
