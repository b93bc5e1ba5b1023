//! topiseg command-line entry point

use clap::Parser;
use topiseg_cli::commands::{Commands, ListCommands};

/// Topic segmentation of plain text with C99 and TextTiling
#[derive(Debug, Parser)]
#[command(name = "topiseg", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Segment(args) => args.execute(),
        Commands::List { subcommand } => match subcommand {
            ListCommands::Algorithms => topiseg_cli::commands::list_algorithms(),
            ListCommands::Formats => topiseg_cli::commands::list_formats(),
        },
        Commands::GenerateConfig(args) => args.execute(),
    }
}
