//! Segment command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use topiseg_engine::{Algorithm, ExecutionMode, SegmenterConfig, TopicSegmenter, UnitMode};

use crate::config::{CliConfig, OutputConfig};
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;

/// Arguments for the segment command
#[derive(Debug, Args)]
pub struct SegmentArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Segmentation algorithm [default: c99]
    #[arg(short, long, value_enum)]
    pub algorithm: Option<AlgorithmArg>,

    /// Exact number of segments (C99; automatic when omitted)
    #[arg(short = 'k', long, value_name = "N")]
    pub segments: Option<usize>,

    /// Side of the rank mask, odd and at least 3 (C99)
    #[arg(long, value_name = "N")]
    pub mask_size: Option<usize>,

    /// Weight terms by inverse document frequency (C99)
    #[arg(long)]
    pub weighted: bool,

    /// Window size in tokens (TextTiling)
    #[arg(long, value_name = "TOKENS")]
    pub window: Option<usize>,

    /// Step between window positions in tokens (TextTiling)
    #[arg(long, value_name = "TOKENS")]
    pub step: Option<usize>,

    /// How text is split into elementary units
    #[arg(long, value_enum)]
    pub unit: Option<UnitArg>,

    /// Keep stop words
    #[arg(long)]
    pub no_stop_words: bool,

    /// Stop-word list file (TOML)
    #[arg(long, value_name = "FILE")]
    pub stop_list: Option<PathBuf>,

    /// Disable stemming
    #[arg(long)]
    pub no_stemming: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Number of worker threads
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Force parallel processing even for small inputs
    #[arg(short, long)]
    pub parallel: bool,

    /// Include processing metadata in JSON output
    #[arg(long)]
    pub metadata: bool,

    /// Include algorithm diagnostics in JSON output
    #[arg(long)]
    pub trace: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Units of each segment, segments separated by marker lines
    Text,
    /// JSON array of documents with boundaries and segments
    Json,
    /// Markdown with one section per segment
    Markdown,
}

impl OutputFormat {
    /// Parse a format name as used in configuration files
    pub fn from_name(name: &str) -> Result<Self> {
        <Self as clap::ValueEnum>::from_str(name, true)
            .map_err(|_| CliError::ConfigError(format!("unknown output format '{name}'")).into())
    }
}

/// Algorithm selection on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum AlgorithmArg {
    /// Divisive clustering over a ranked similarity matrix
    C99,
    /// Sliding-window depth scoring
    #[value(name = "texttiling")]
    TextTiling,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::C99 => Algorithm::C99,
            AlgorithmArg::TextTiling => Algorithm::TextTiling,
        }
    }
}

/// Unit mode selection on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum UnitArg {
    /// One unit per non-blank line
    Line,
    /// One unit per sentence
    Sentence,
}

impl From<UnitArg> for UnitMode {
    fn from(arg: UnitArg) -> Self {
        match arg {
            UnitArg::Line => UnitMode::Line,
            UnitArg::Sentence => UnitMode::Sentence,
        }
    }
}

impl SegmentArgs {
    /// Execute the segment command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        log::info!("Starting topic segmentation");
        log::debug!("Arguments: {:?}", self);

        let file_config = match &self.config {
            Some(path) => CliConfig::load(path)?,
            None => CliConfig::default(),
        };
        let config = self.build_config(&file_config)?;
        let format = self.resolve_format(&file_config)?;

        let files = resolve_patterns(&self.input)?;
        log::info!("Found {} files to process", files.len());

        let segmenter =
            TopicSegmenter::with_config(config).map_err(|e| CliError::ConfigError(e.to_string()))?;

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        let mut formatter = self.create_formatter(format, writer, &file_config.output);

        let mut progress = ProgressReporter::new(self.quiet || files.len() < 2);
        progress.init_files(files.len() as u64)?;

        for path in &files {
            let name = path.display().to_string();
            log::debug!("Processing {name} ({} bytes)", FileReader::file_size(path)?);

            let text = FileReader::read_text(path)?;
            let output = segmenter
                .process_text(&text)
                .map_err(|e| CliError::SegmentationError(format!("{name}: {e}")))?;
            log::info!(
                "{name}: {} units, {} segments",
                output.metadata.unit_count,
                output.len()
            );

            formatter.format_document(&name, &output)?;
            progress.file_completed(&name);
        }

        progress.finish();
        formatter.finish()?;
        Ok(())
    }

    /// Merge command-line flags over the configuration file
    pub fn build_config(&self, file_config: &CliConfig) -> Result<SegmenterConfig> {
        let mut config = file_config.to_segmenter_config()?;

        if let Some(algorithm) = self.algorithm {
            config.algorithm = algorithm.into();
        }
        if self.segments.is_some() {
            config.segment_count = self.segments;
        }
        if let Some(mask_size) = self.mask_size {
            config.mask_size = mask_size;
        }
        if self.weighted {
            config.weighted = true;
        }
        if let Some(window) = self.window {
            config.window_size = window;
        }
        if let Some(step) = self.step {
            config.step_size = step;
        }
        if let Some(unit) = self.unit {
            config.unit_mode = unit.into();
        }
        if self.no_stop_words {
            config.use_stop_words = false;
        }
        if let Some(path) = &self.stop_list {
            config.stop_list = Some(path.clone());
        }
        if self.no_stemming {
            config.stemming = false;
        }
        if let Some(threads) = self.threads {
            config.threads = Some(threads);
        }
        if self.parallel {
            config.execution_mode = ExecutionMode::Parallel;
        }

        config
            .validate()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
    }

    /// Output format from the flag, else from the configuration file
    pub fn resolve_format(&self, file_config: &CliConfig) -> Result<OutputFormat> {
        match self.format {
            Some(format) => Ok(format),
            None => OutputFormat::from_name(&file_config.output.format),
        }
    }

    fn create_formatter(
        &self,
        format: OutputFormat,
        writer: Box<dyn Write + Send + Sync>,
        output_config: &OutputConfig,
    ) -> Box<dyn OutputFormatter> {
        match format {
            OutputFormat::Text => Box::new(TextFormatter::new(writer)),
            OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
            OutputFormat::Json => Box::new(
                JsonFormatter::new(writer)
                    .with_metadata(self.metadata || output_config.include_metadata)
                    .with_trace(self.trace)
                    .with_pretty(output_config.pretty_json),
            ),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .try_init()
                .context("Failed to initialize logging")?;
        }

        Ok(())
    }
}
