//! Linear text segmentation algorithms
//!
//! This crate partitions a document, given as an ordered sequence of
//! elementary units (sentences) of tokens, into contiguous topical segments.
//! Two algorithms share a common term-vector and cosine-similarity substrate:
//!
//! - **C99**: divisive clustering over a rank-transformed similarity matrix,
//!   with an automatic stopping rule when no segment count is given.
//! - **TextTiling**: lexical cohesion between two sliding token windows,
//!   followed by depth scoring of the cohesion valleys.
//!
//! Tokenization, stemming and stop-word lists are supplied by the caller
//! through the [`Stemmer`] and [`StopWordPredicate`] traits.
//!
//! # Example
//!
//! ```rust
//! use topiseg_core::{c99, C99Params, Document, Lexicon, LowercaseStemmer, NoStopWords};
//!
//! let document = Document::from_units(vec![
//!     vec!["cats", "purr", "softly"],
//!     vec!["cats", "purr", "loudly"],
//!     vec!["rockets", "launch", "fast"],
//!     vec!["rockets", "launch", "high"],
//! ]);
//!
//! let lexicon = Lexicon::new(&LowercaseStemmer, &NoStopWords);
//! let params = C99Params::default().with_segment_count(2).with_mask_size(3);
//! let result = c99::segment(&document, &lexicon, &params).unwrap();
//!
//! assert_eq!(result.boundaries, vec![2]);
//! ```

#![warn(missing_docs)]

pub mod c99;
pub mod document;
pub mod error;
pub mod lexicon;
pub mod segment;
pub mod similarity;
pub mod stats;
pub mod texttiling;
pub mod vector;

// Re-export key types
pub use c99::C99Params;
pub use document::Document;
pub use error::{Result, SegmentError};
pub use lexicon::{Lexicon, LowercaseStemmer, NoStopWords, Stemmer, StopWordPredicate};
pub use segment::{Segment, Segmentation, Trace};
pub use similarity::SimilarityMatrix;
pub use texttiling::TextTilingParams;
pub use vector::{TermVector, WeightVector};

/// Segmentation algorithm selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    /// Divisive clustering over a rank-transformed similarity matrix
    #[default]
    C99,
    /// Sliding-window lexical cohesion with depth scoring
    TextTiling,
}

impl Algorithm {
    /// Short lowercase name used in configuration files and output
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::C99 => "c99",
            Algorithm::TextTiling => "texttiling",
        }
    }
}

impl std::str::FromStr for Algorithm {
    type Err = SegmentError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "c99" => Ok(Algorithm::C99),
            "texttiling" | "text-tiling" | "tiling" => Ok(Algorithm::TextTiling),
            other => Err(SegmentError::InvalidParameter {
                name: "algorithm",
                reason: format!("unknown algorithm '{other}'"),
            }),
        }
    }
}
