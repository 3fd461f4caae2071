//! CLI argument definitions using clap derive API

use clap::{Args, Parser, Subcommand, ValueEnum};

/// np - build neighborhood profile reports from GIS layers and reference sheets
#[derive(Parser, Debug)]
#[command(name = "np")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Global options
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Global arguments available to all commands
#[derive(Args, Debug, Clone)]
pub struct GlobalArgs {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory
    #[arg(short = 'p', long, global = true, default_value = ".")]
    pub project_dir: String,

    /// Override config file path
    #[arg(short, long, global = true)]
    pub config: Option<String>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Collect, render and export every profile
    Build(BuildArgs),

    /// Collect profile data and print it without writing files
    Collect(CollectArgs),

    /// Convert the files in the profiles directory to PDF
    Export(ExportArgs),

    /// Shorten the public URLs of published profiles
    Shorten(ShortenArgs),
}

/// Arguments for the build command
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Neighborhoods to build (comma-separated, default: all)
    #[arg(short, long)]
    pub nhoods: Option<String>,

    /// Stop after writing the HTML profiles
    #[arg(long)]
    pub skip_pdf: bool,
}

/// Arguments for the collect command
#[derive(Args, Debug)]
pub struct CollectArgs {
    /// Neighborhoods to collect (comma-separated, default: all)
    #[arg(short, long)]
    pub nhoods: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub output: CollectOutput,
}

/// Collect output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectOutput {
    /// Typed records as JSON
    Json,
    /// Template values, one block per neighborhood
    Table,
}

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {}

/// Arguments for the shorten command
#[derive(Args, Debug)]
pub struct ShortenArgs {
    /// Directory holding the published files (overrides shortener.share_dir)
    #[arg(long)]
    pub share_dir: Option<String>,

    /// Public URL of the share directory (overrides shortener.base_url)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Output spreadsheet (overrides shortener.output)
    #[arg(short, long)]
    pub output: Option<String>,
}

#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;
