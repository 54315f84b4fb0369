use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::config::CONFIG_FILE_NAME;
use crate::output::OutputFormat;

/// Color output control
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ColorChoice {
    /// Auto-detect terminal capability
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

#[derive(Parser, Debug)]
#[command(name = "stringray")]
#[command(author, version, about = "StringRay - validate user-facing strings in source files")]
#[command(long_about = "Extracts string literals and markdown prose from source files, \
    checks each one with a checker, and decides pass or fail with a decider.\n\n\
    Exit codes:\n  \
    0 - Validation passed\n  \
    1 - Validation failed\n  \
    2 - Configuration or runtime error")]
pub struct Cli {
    /// Increase output verbosity (-v, -vv for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Control color output
    #[arg(long, value_enum, default_value = "auto", global = true)]
    pub color: ColorChoice,

    /// Skip loading configuration file
    #[arg(long, global = true)]
    pub no_config: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Validate strings in the given paths
    Check(CheckArgs),

    /// Generate a default configuration file
    Init(InitArgs),
}

#[derive(Parser, Debug)]
pub struct CheckArgs {
    /// Paths to check (files or directories)
    #[arg(default_value = ".")]
    pub paths: Vec<PathBuf>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Include patterns (glob syntax, replaces the configured `files`)
    #[arg(long)]
    pub files: Vec<String>,

    /// Exclude patterns (glob syntax, can be specified multiple times)
    #[arg(long, short = 'x')]
    pub exclude: Vec<String>,

    /// Checker [possible values: grammar, char_count, custom]
    #[arg(long)]
    pub checker: Option<String>,

    /// Checker options as a JSON object, e.g. '{"maxChars": 80}'
    #[arg(long)]
    pub checker_options: Option<String>,

    /// Decider [possible values: threshold, noCritical, custom]
    #[arg(long)]
    pub decider: Option<String>,

    /// Decider options as a JSON object, e.g. '{"minValidRatio": 0.9}'
    #[arg(long)]
    pub decider_options: Option<String>,

    /// Output format [possible values: text, json, markdown]
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Output path for configuration file
    #[arg(short, long, default_value = CONFIG_FILE_NAME)]
    pub output: PathBuf,

    /// Overwrite existing configuration
    #[arg(long)]
    pub force: bool,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
