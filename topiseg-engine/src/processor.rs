//! Topic segmenter and builder
//!
//! Ties input preparation, language resources, execution mode and the two
//! core algorithms together and reports segments with their text.

use crate::config::{SegmenterConfig, SegmenterConfigBuilder};
use crate::error::Result;
use crate::executor::{ExecutionMode, Executor};
use crate::input::{Input, PreparedDocument, UnitMode};
use crate::language::LanguageResources;
use serde::Serialize;
use std::time::Instant;
use topiseg_core::{c99, texttiling, Algorithm, Segmentation, Trace};

/// Main topic segmenter
#[derive(Debug)]
pub struct TopicSegmenter {
    config: SegmenterConfig,
    resources: LanguageResources,
    executor: Executor,
}

/// One segment with its units and text
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SegmentText {
    /// Position of the segment in the document
    pub index: usize,
    /// First unit
    pub start: usize,
    /// One past the last unit
    pub end: usize,
    /// Unit texts of the segment
    pub units: Vec<String>,
}

impl SegmentText {
    /// Units joined with single spaces
    pub fn text(&self) -> String {
        self.units.join(" ")
    }
}

/// Processing metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProcessingMetadata {
    /// Algorithm that ran
    pub algorithm: &'static str,
    /// Execution mode that was actually used
    pub execution_mode: &'static str,
    /// Number of elementary units
    pub unit_count: usize,
    /// Number of word tokens
    pub token_count: usize,
    /// Whether the input had fewer than two units, or too few tokens for
    /// TextTiling, and was returned as a single segment without scoring
    pub trivial: bool,
    /// Processing time in milliseconds
    pub processing_time_ms: f64,
}

/// Rich output with metadata
#[derive(Debug, Clone, Serialize)]
pub struct Output {
    /// Segments in document order
    pub segments: Vec<SegmentText>,
    /// Unit indices at which a new segment starts
    pub boundaries: Vec<usize>,
    /// Processing metadata
    pub metadata: ProcessingMetadata,
    /// Full algorithm result, including its trace
    #[serde(skip)]
    pub segmentation: Segmentation,
}

impl Output {
    /// Number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether there are no segments (empty input)
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl TopicSegmenter {
    /// Create a segmenter with the default configuration
    pub fn new() -> Result<Self> {
        Self::with_config(SegmenterConfig::default())
    }

    /// Create a segmenter from a configuration
    pub fn with_config(config: SegmenterConfig) -> Result<Self> {
        config.validate()?;
        let resources = LanguageResources::from_config(&config)?;
        let executor = Executor::new(
            config.execution_mode,
            config.threads,
            config.parallel_threshold,
        )?;
        Ok(Self {
            config,
            resources,
            executor,
        })
    }

    /// Replace the language resources (stemmer and stop words)
    pub fn with_resources(mut self, resources: LanguageResources) -> Self {
        self.resources = resources;
        self
    }

    /// Active configuration
    pub fn config(&self) -> &SegmenterConfig {
        &self.config
    }

    /// Segment an input
    pub fn process(&self, input: Input) -> Result<Output> {
        let prepared = PreparedDocument::prepare(input, self.config.unit_mode)?;
        self.process_prepared(prepared)
    }

    /// Segment raw text (convenience method)
    pub fn process_text(&self, text: &str) -> Result<Output> {
        self.process(Input::from_text(text))
    }

    /// Segment an input with a specific unit mode
    pub fn process_with_units(&self, input: Input, mode: UnitMode) -> Result<Output> {
        self.process_prepared(PreparedDocument::prepare(input, mode)?)
    }

    /// Segment an already prepared document
    pub fn process_prepared(&self, prepared: PreparedDocument) -> Result<Output> {
        let started = Instant::now();
        let document = &prepared.document;
        let mode = self.executor.resolve(document.len());
        let lexicon = self.resources.lexicon();

        log::info!(
            "segmenting {} units with {} ({} mode)",
            document.len(),
            self.config.algorithm.name(),
            mode.name()
        );

        let segmentation = match self.config.algorithm {
            Algorithm::C99 => {
                let params = self
                    .config
                    .c99_params()
                    .with_parallel(mode == ExecutionMode::Parallel);
                self.executor
                    .run(mode, || c99::segment(document, &lexicon, &params))?
            }
            Algorithm::TextTiling => {
                let params = self.config.texttiling_params();
                texttiling::segment(document, &lexicon, &params)?
            }
        };

        let metadata = ProcessingMetadata {
            algorithm: self.config.algorithm.name(),
            execution_mode: mode.name(),
            unit_count: document.len(),
            token_count: document.token_count(),
            trivial: segmentation.trace == Trace::Trivial,
            processing_time_ms: started.elapsed().as_secs_f64() * 1000.0,
        };

        let segments = segmentation
            .segments
            .iter()
            .enumerate()
            .map(|(index, segment)| SegmentText {
                index,
                start: segment.start,
                end: segment.end,
                units: prepared.units[segment.start..segment.end].to_vec(),
            })
            .collect();

        Ok(Output {
            segments,
            boundaries: segmentation.boundaries.clone(),
            metadata,
            segmentation,
        })
    }
}

/// Builder for [`TopicSegmenter`]
#[derive(Debug, Default)]
pub struct TopicSegmenterBuilder {
    config_builder: SegmenterConfigBuilder,
}

impl TopicSegmenterBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the algorithm
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.config_builder = self.config_builder.algorithm(algorithm);
        self
    }

    /// Request an exact number of segments (C99)
    pub fn segment_count(mut self, count: Option<usize>) -> Self {
        self.config_builder = self.config_builder.segment_count(count);
        self
    }

    /// Set the rank mask side (C99)
    pub fn mask_size(mut self, mask_size: usize) -> Self {
        self.config_builder = self.config_builder.mask_size(mask_size);
        self
    }

    /// Enable inverse-frequency weighting (C99)
    pub fn weighted(mut self, weighted: bool) -> Self {
        self.config_builder = self.config_builder.weighted(weighted);
        self
    }

    /// Set the window size (TextTiling)
    pub fn window_size(mut self, window_size: usize) -> Self {
        self.config_builder = self.config_builder.window_size(window_size);
        self
    }

    /// Set the step size (TextTiling)
    pub fn step_size(mut self, step_size: usize) -> Self {
        self.config_builder = self.config_builder.step_size(step_size);
        self
    }

    /// Set how raw text is split into units
    pub fn unit_mode(mut self, mode: UnitMode) -> Self {
        self.config_builder = self.config_builder.unit_mode(mode);
        self
    }

    /// Enable or disable stop-word filtering
    pub fn stop_words(mut self, enabled: bool) -> Self {
        self.config_builder = self.config_builder.stop_words(enabled);
        self
    }

    /// Enable or disable stemming
    pub fn stemming(mut self, enabled: bool) -> Self {
        self.config_builder = self.config_builder.stemming(enabled);
        self
    }

    /// Set the execution mode
    pub fn execution_mode(mut self, mode: ExecutionMode) -> Self {
        self.config_builder = self.config_builder.execution_mode(mode);
        self
    }

    /// Set the thread count
    pub fn threads(mut self, count: Option<usize>) -> Self {
        self.config_builder = self.config_builder.threads(count);
        self
    }

    /// Build the segmenter
    pub fn build(self) -> Result<TopicSegmenter> {
        TopicSegmenter::with_config(self.config_builder.build()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEXT: &str = "The river carried the boat downstream. Fishermen on the river bank \
        watched the boat. The boat drifted past the river bend. \
        The orchestra tuned every violin. The violin section played the melody. \
        The orchestra finished the melody with a violin solo.";

    #[test]
    fn test_process_two_topics() {
        let segmenter = TopicSegmenterBuilder::new()
            .segment_count(Some(2))
            .mask_size(3)
            .build()
            .unwrap();
        let output = segmenter.process_text(TEXT).unwrap();

        assert_eq!(output.boundaries, vec![3]);
        assert_eq!(output.len(), 2);
        assert_eq!(output.segments[0].units.len(), 3);
        assert!(output.segments[1].text().starts_with("The orchestra"));
        assert_eq!(output.metadata.unit_count, 6);
        assert_eq!(output.metadata.algorithm, "c99");
        assert!(!output.metadata.trivial);
    }

    #[test]
    fn test_empty_input() {
        let output = TopicSegmenter::new().unwrap().process_text("   ").unwrap();
        assert!(output.is_empty());
        assert!(output.boundaries.is_empty());
        assert!(output.metadata.trivial);
    }

    #[test]
    fn test_single_sentence_is_trivial() {
        let segmenter = TopicSegmenter::with_config(SegmenterConfig::texttiling()).unwrap();
        let output = segmenter.process_text("Only one sentence here.").unwrap();
        assert_eq!(output.len(), 1);
        assert_eq!(output.segments[0].start, 0);
        assert_eq!(output.segments[0].end, 1);
        assert_eq!(output.metadata.algorithm, "texttiling");
    }

    #[test]
    fn test_line_units() {
        let segmenter = TopicSegmenterBuilder::new()
            .unit_mode(UnitMode::Line)
            .segment_count(Some(1))
            .build()
            .unwrap();
        let output = segmenter
            .process(Input::from_text("one. two.\nthree"))
            .unwrap();
        assert_eq!(output.metadata.unit_count, 2);
        assert_eq!(output.segments[0].units, vec!["one. two.", "three"]);
    }

    #[test]
    fn test_single_requested_segment_is_not_trivial() {
        let segmenter = TopicSegmenterBuilder::new()
            .segment_count(Some(1))
            .mask_size(3)
            .build()
            .unwrap();
        let output = segmenter.process_text(TEXT).unwrap();
        assert_eq!(output.len(), 1);
        assert_eq!(output.metadata.unit_count, 6);
        assert!(!output.metadata.trivial);
    }

    #[test]
    fn test_invalid_segment_count_reported() {
        let segmenter = TopicSegmenterBuilder::new()
            .segment_count(Some(10))
            .build()
            .unwrap();
        assert!(matches!(
            segmenter.process_text(TEXT),
            Err(crate::EngineError::Segment(_))
        ));
    }

    #[test]
    fn test_execution_modes_agree() {
        let sequential = TopicSegmenterBuilder::new()
            .mask_size(3)
            .execution_mode(ExecutionMode::Sequential)
            .build()
            .unwrap();
        let parallel = TopicSegmenterBuilder::new()
            .mask_size(3)
            .execution_mode(ExecutionMode::Parallel)
            .threads(Some(2))
            .build()
            .unwrap();

        let a = sequential.process_text(TEXT).unwrap();
        let b = parallel.process_text(TEXT).unwrap();
        assert_eq!(a.boundaries, b.boundaries);
        assert_eq!(a.segmentation, b.segmentation);
        assert_eq!(a.metadata.execution_mode, "sequential");
    }
}
