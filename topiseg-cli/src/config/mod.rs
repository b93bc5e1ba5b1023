//! Configuration file support
//!
//! A TOML file with `[segmentation]`, `[output]` and `[performance]` tables.
//! Every key is optional; command-line flags override file values.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use topiseg_engine::config::DEFAULT_PARALLEL_THRESHOLD;
use topiseg_engine::{Algorithm, ExecutionMode, SegmenterConfig, UnitMode};

use crate::error::CliError;

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default, PartialEq)]
pub struct CliConfig {
    /// Segmentation configuration
    #[serde(default)]
    pub segmentation: SegmentationConfig,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Performance configuration
    #[serde(default)]
    pub performance: PerformanceConfig,
}

/// Segmentation-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct SegmentationConfig {
    /// Algorithm name (`c99` or `texttiling`)
    pub algorithm: String,
    /// Target number of segments for C99 (absent = automatic)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segments: Option<usize>,
    /// C99 rank mask side
    pub mask_size: usize,
    /// C99 inverse-frequency weighting
    pub weighted: bool,
    /// TextTiling window size in tokens
    pub window_size: usize,
    /// TextTiling step in tokens
    pub step_size: usize,
    /// Unit mode (`line` or `sentence`)
    pub unit: String,
    /// Stop-list language code
    pub language: String,
    /// Filter stop words
    pub stop_words: bool,
    /// Custom stop list file replacing the built-in list
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_list: Option<PathBuf>,
    /// Apply the suffix stemmer
    pub stemming: bool,
}

impl Default for SegmentationConfig {
    fn default() -> Self {
        let defaults = SegmenterConfig::default();
        Self {
            algorithm: defaults.algorithm.name().to_string(),
            segments: None,
            mask_size: defaults.mask_size,
            weighted: defaults.weighted,
            window_size: defaults.window_size,
            step_size: defaults.step_size,
            unit: defaults.unit_mode.name().to_string(),
            language: defaults.language,
            stop_words: defaults.use_stop_words,
            stop_list: defaults.stop_list,
            stemming: defaults.stemming,
        }
    }
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format (`text`, `json` or `markdown`)
    pub format: String,

    /// Include metadata in output
    pub include_metadata: bool,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: "text".to_string(),
            include_metadata: false,
            pretty_json: true,
        }
    }
}

/// Performance-related configuration
#[derive(Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PerformanceConfig {
    /// Execution mode (`sequential`, `parallel` or `adaptive`)
    pub execution_mode: String,

    /// Unit count from which adaptive mode goes parallel
    pub parallel_threshold: usize,

    /// Number of worker threads (0 = auto)
    pub worker_threads: usize,
}

impl Default for PerformanceConfig {
    fn default() -> Self {
        Self {
            execution_mode: ExecutionMode::Adaptive.name().to_string(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            worker_threads: 0,
        }
    }
}

impl CliConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: CliConfig =
            toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
    }

    /// Load a configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    /// Convert into an engine configuration
    pub fn to_segmenter_config(&self) -> Result<SegmenterConfig> {
        let seg = &self.segmentation;
        let algorithm: Algorithm = seg
            .algorithm
            .parse()
            .map_err(|e: topiseg_core::SegmentError| CliError::ConfigError(e.to_string()))?;
        let unit_mode: UnitMode = seg
            .unit
            .parse()
            .map_err(|e: topiseg_engine::EngineError| CliError::ConfigError(e.to_string()))?;
        let execution_mode = parse_execution_mode(&self.performance.execution_mode)?;

        Ok(SegmenterConfig {
            algorithm,
            segment_count: seg.segments,
            mask_size: seg.mask_size,
            weighted: seg.weighted,
            window_size: seg.window_size,
            step_size: seg.step_size,
            unit_mode,
            language: seg.language.clone(),
            use_stop_words: seg.stop_words,
            stop_list: seg.stop_list.clone(),
            stemming: seg.stemming,
            execution_mode,
            threads: match self.performance.worker_threads {
                0 => None,
                n => Some(n),
            },
            parallel_threshold: self.performance.parallel_threshold,
        })
    }
}

fn parse_execution_mode(name: &str) -> Result<ExecutionMode> {
    match name.to_ascii_lowercase().as_str() {
        "sequential" => Ok(ExecutionMode::Sequential),
        "parallel" => Ok(ExecutionMode::Parallel),
        "adaptive" => Ok(ExecutionMode::Adaptive),
        other => Err(CliError::ConfigError(format!("unknown execution mode '{other}'")).into()),
    }
}
