//! Segmenter configuration
//!
//! One flat configuration drives both algorithms; fields that only apply to
//! the other algorithm are ignored. Presets cover the usual setups and the
//! builder validates everything up front.

use crate::error::{EngineError, Result};
use crate::executor::ExecutionMode;
use crate::input::UnitMode;
use std::path::PathBuf;
use topiseg_core::c99::DEFAULT_MASK_SIZE;
use topiseg_core::texttiling::{DEFAULT_STEP_SIZE, DEFAULT_WINDOW_SIZE};
use topiseg_core::{Algorithm, C99Params, TextTilingParams};

/// Default unit count from which adaptive mode builds matrices in parallel
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

/// Segmenter configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SegmenterConfig {
    /// Algorithm to run
    pub algorithm: Algorithm,
    /// Target number of segments for C99 (None = automatic)
    pub segment_count: Option<usize>,
    /// C99 rank mask side
    pub mask_size: usize,
    /// C99 inverse-frequency weighting
    pub weighted: bool,
    /// TextTiling window size in tokens
    pub window_size: usize,
    /// TextTiling step in tokens
    pub step_size: usize,
    /// How raw text is split into units
    pub unit_mode: UnitMode,
    /// Language code for the built-in stop list
    pub language: String,
    /// Filter stop words
    pub use_stop_words: bool,
    /// Custom stop list file (overrides the built-in list)
    pub stop_list: Option<PathBuf>,
    /// Apply the suffix stemmer
    pub stemming: bool,
    /// Execution mode selector
    pub execution_mode: ExecutionMode,
    /// Number of threads for parallel execution (None = rayon default)
    pub threads: Option<usize>,
    /// Minimum unit count for adaptive parallel execution
    pub parallel_threshold: usize,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::C99,
            segment_count: None,
            mask_size: DEFAULT_MASK_SIZE,
            weighted: false,
            window_size: DEFAULT_WINDOW_SIZE,
            step_size: DEFAULT_STEP_SIZE,
            unit_mode: UnitMode::Sentence,
            language: "en".to_string(),
            use_stop_words: true,
            stop_list: None,
            stemming: true,
            execution_mode: ExecutionMode::Adaptive,
            threads: None,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl SegmenterConfig {
    /// C99 with automatic segment count
    pub fn c99() -> Self {
        Self::default()
    }

    /// C99 with inverse-frequency weighted similarities
    pub fn c99_weighted() -> Self {
        Self {
            weighted: true,
            ..Self::default()
        }
    }

    /// TextTiling with the default window and step
    pub fn texttiling() -> Self {
        Self {
            algorithm: Algorithm::TextTiling,
            ..Self::default()
        }
    }

    /// Start a builder from the default configuration
    pub fn builder() -> SegmenterConfigBuilder {
        SegmenterConfigBuilder::new()
    }

    /// C99 parameters derived from this configuration
    pub fn c99_params(&self) -> C99Params {
        C99Params {
            segment_count: self.segment_count,
            mask_size: self.mask_size,
            weighted: self.weighted,
            parallel: false,
        }
    }

    /// TextTiling parameters derived from this configuration
    pub fn texttiling_params(&self) -> TextTilingParams {
        TextTilingParams::new(self.window_size, self.step_size)
    }

    /// Check the configuration for the selected algorithm
    pub fn validate(&self) -> Result<()> {
        match self.algorithm {
            Algorithm::C99 => self.c99_params().validate()?,
            Algorithm::TextTiling => self.texttiling_params().validate()?,
        }
        if self.threads == Some(0) {
            return Err(EngineError::ConfigError(
                "thread count must be positive".to_string(),
            ));
        }
        if self.language.trim().is_empty() {
            return Err(EngineError::ConfigError(
                "language code must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Builder for [`SegmenterConfig`]
#[derive(Debug, Default)]
pub struct SegmenterConfigBuilder {
    config: SegmenterConfig,
}

impl SegmenterConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the algorithm
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.config.algorithm = algorithm;
        self
    }

    /// Request an exact number of segments (C99)
    pub fn segment_count(mut self, count: Option<usize>) -> Self {
        self.config.segment_count = count;
        self
    }

    /// Set the rank mask side (C99)
    pub fn mask_size(mut self, mask_size: usize) -> Self {
        self.config.mask_size = mask_size;
        self
    }

    /// Enable inverse-frequency weighting (C99)
    pub fn weighted(mut self, weighted: bool) -> Self {
        self.config.weighted = weighted;
        self
    }

    /// Set the window size (TextTiling)
    pub fn window_size(mut self, window_size: usize) -> Self {
        self.config.window_size = window_size;
        self
    }

    /// Set the step size (TextTiling)
    pub fn step_size(mut self, step_size: usize) -> Self {
        self.config.step_size = step_size;
        self
    }

    /// Set how raw text is split into units
    pub fn unit_mode(mut self, mode: UnitMode) -> Self {
        self.config.unit_mode = mode;
        self
    }

    /// Set the stop-list language
    pub fn language<S: Into<String>>(mut self, language: S) -> Self {
        self.config.language = language.into();
        self
    }

    /// Enable or disable stop-word filtering
    pub fn stop_words(mut self, enabled: bool) -> Self {
        self.config.use_stop_words = enabled;
        self
    }

    /// Use a custom stop list file
    pub fn stop_list<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config.stop_list = Some(path.into());
        self
    }

    /// Enable or disable stemming
    pub fn stemming(mut self, enabled: bool) -> Self {
        self.config.stemming = enabled;
        self
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config.execution_mode = mode;
        self
    }

    /// Set the thread count
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.config.threads = count;
        self
    }

    /// Set the adaptive parallel threshold in units
    pub fn parallel_threshold(mut self, units: usize) -> Self {
        self.config.parallel_threshold = units;
        self
    }

    /// Validate and build
    pub fn build(self) -> Result<SegmenterConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_presets() {
        let c99 = SegmenterConfig::c99();
        assert_eq!(c99.algorithm, Algorithm::C99);
        assert_eq!(c99.mask_size, 11);
        assert!(!c99.weighted);

        assert!(SegmenterConfig::c99_weighted().weighted);

        let tiling = SegmenterConfig::texttiling();
        assert_eq!(tiling.algorithm, Algorithm::TextTiling);
        assert_eq!(tiling.window_size, 20);
        assert_eq!(tiling.step_size, 10);
        assert_eq!(tiling.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
    }

    #[test]
    fn test_builder_validates() {
        let config = SegmenterConfig::builder()
            .segment_count(Some(3))
            .mask_size(5)
            .threads(Some(2))
            .build()
            .unwrap();
        assert_eq!(config.c99_params().segment_count, Some(3));
        assert_eq!(config.c99_params().mask_size, 5);

        assert!(SegmenterConfig::builder().mask_size(4).build().is_err());
        assert!(SegmenterConfig::builder().threads(Some(0)).build().is_err());
        assert!(matches!(
            SegmenterConfig::builder().language(" ").build(),
            Err(EngineError::ConfigError(_))
        ));
    }

    #[test]
    fn test_validation_follows_algorithm() {
        // An even mask is irrelevant to TextTiling
        let config = SegmenterConfig::builder()
            .algorithm(Algorithm::TextTiling)
            .mask_size(4)
            .build()
            .unwrap();
        assert_eq!(config.texttiling_params(), TextTilingParams::new(20, 10));

        assert!(matches!(
            SegmenterConfig::builder()
                .algorithm(Algorithm::TextTiling)
                .window_size(0)
                .build(),
            Err(EngineError::Segment(_))
        ));
    }
}
