//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use topiseg_engine::config::DEFAULT_PARALLEL_THRESHOLD;
use topiseg_engine::SegmenterConfig;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        let template = generate_template();

        match &self.output {
            Some(path) => {
                std::fs::write(path, template)
                    .with_context(|| format!("Failed to write to {}", path.display()))?;

                eprintln!("✓ Configuration template written to {}", path.display());
                eprintln!();
                eprintln!("Use it for segmentation:");
                eprintln!("   topiseg segment -i input.txt -c {}", path.display());
            }
            None => print!("{template}"),
        }

        Ok(())
    }
}

/// Commented configuration template with the current defaults
pub fn generate_template() -> String {
    let defaults = SegmenterConfig::default();
    format!(
        r#"# topiseg configuration

[segmentation]
# Algorithm: "c99" or "texttiling"
algorithm = "{algorithm}"

# Exact number of segments for C99; leave unset for automatic termination
# segments = 4

# C99 rank mask side (odd, at least 3)
mask_size = {mask_size}

# C99 inverse-frequency term weighting
weighted = {weighted}

# TextTiling window and step, in tokens
window_size = {window_size}
step_size = {step_size}

# Elementary units: "sentence" or "line"
unit = "{unit}"

# Stop-word list language and token normalization
language = "{language}"
stop_words = {stop_words}
stemming = {stemming}

# Custom stop list (TOML with [metadata] and [stop_words] tables)
# stop_list = "stopwords.toml"

[output]
# Default output format: "text", "json" or "markdown"
format = "text"

# Include processing metadata in JSON output
include_metadata = false

# Pretty print JSON output
pretty_json = true

[performance]
# "sequential", "parallel" or "adaptive"
execution_mode = "adaptive"

# Unit count from which adaptive mode builds the similarity matrix in parallel
parallel_threshold = {parallel_threshold}

# Worker threads (0 = one per CPU)
worker_threads = 0
"#,
        algorithm = defaults.algorithm.name(),
        mask_size = defaults.mask_size,
        weighted = defaults.weighted,
        window_size = defaults.window_size,
        step_size = defaults.step_size,
        unit = defaults.unit_mode.name(),
        language = defaults.language,
        stop_words = defaults.use_stop_words,
        stemming = defaults.stemming,
        parallel_threshold = DEFAULT_PARALLEL_THRESHOLD,
    )
}
