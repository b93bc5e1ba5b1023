//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;
use topiseg_engine::Algorithm;

pub mod generate_config;
pub mod segment;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split text files into topically coherent segments
    Segment(segment::SegmentArgs),

    /// List available components
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },

    /// Write a configuration file template
    GenerateConfig(generate_config::GenerateConfigArgs),
}

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List available segmentation algorithms
    Algorithms,

    /// List available output formats
    Formats,
}

/// Print the supported algorithms
pub fn list_algorithms() -> Result<()> {
    println!("Available algorithms:");
    for (algorithm, description) in [
        (
            Algorithm::C99,
            "rank-transformed similarity matrix with divisive clustering",
        ),
        (
            Algorithm::TextTiling,
            "adjacent-window similarity with depth scoring",
        ),
    ] {
        println!("  {:<12} {}", algorithm.name(), description);
    }
    Ok(())
}

/// Print the supported output formats
pub fn list_formats() -> Result<()> {
    println!("Available output formats:");
    println!("  text         segments separated by '==========' lines");
    println!("  json         array of documents with boundaries and segments");
    println!("  markdown     one section per segment");
    Ok(())
}
