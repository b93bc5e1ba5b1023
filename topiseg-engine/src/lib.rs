//! Orchestration for topic segmentation
//!
//! This crate turns raw text into tokenized documents, supplies stop-word
//! lists and a stemmer, selects the execution mode and runs the
//! `topiseg-core` algorithms behind a single [`TopicSegmenter`].
//!
//! ```rust
//! use topiseg_engine::{Input, TopicSegmenterBuilder};
//!
//! let segmenter = TopicSegmenterBuilder::new()
//!     .segment_count(Some(2))
//!     .build()
//!     .unwrap();
//!
//! let output = segmenter
//!     .process(Input::from_text(
//!         "Cats purr. Cats nap. Rockets launch. Rockets fly.",
//!     ))
//!     .unwrap();
//! assert_eq!(output.segments.len(), 2);
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod executor;
pub mod input;
pub mod language;
pub mod processor;

// Re-export key types
pub use config::{SegmenterConfig, SegmenterConfigBuilder};
pub use error::{EngineError, Result};
pub use executor::{ExecutionMode, Executor};
pub use input::{Input, PreparedDocument, UnitMode};
pub use language::{LanguageResources, StopWordList, SuffixStemmer};
pub use processor::{Output, ProcessingMetadata, SegmentText, TopicSegmenter, TopicSegmenterBuilder};

// Re-export from core for convenience
pub use topiseg_core::{Algorithm, Segment, Segmentation, Trace};
