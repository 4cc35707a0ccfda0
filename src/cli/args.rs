//! CLI argument definitions using clap
//!
//! Usage:
//! - flatfield --format <layout.csv> --data <feed.txt>
//! - flatfield --format <layout.csv> --data <feed.txt> --delimiter ';'

use clap::Parser;
use std::path::PathBuf;

/// flatfield - decode fixed-width flat text files against a format file
#[derive(Parser, Debug)]
#[command(name = "flatfield")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the format file describing the fixed-width layout
    #[arg(short = 'f', long = "format")]
    pub format_file: PathBuf,

    /// Path to the data file to decode
    #[arg(short = 'd', long = "data")]
    pub data_file: PathBuf,

    /// Single-character delimiter used in the format file
    #[arg(long, default_value = ",")]
    pub delimiter: String,

    /// Suppress warnings and the end-of-run summary
    #[arg(long)]
    pub quiet: bool,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
