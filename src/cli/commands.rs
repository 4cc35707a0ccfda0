//! CLI command implementation
//!
//! Input validation order: the data file and format file must both
//! exist, the data file must be a `.txt`, the format file a `.csv`.
//! stdout carries only decoded records; warnings and the end-of-run
//! summary go to stderr as structured log events.

use std::path::Path;

use crate::decoder::{check_name_correlation, CollectSink, DiagnosticSink, LogSink, RecordDecoder};
use crate::observability::Logger;
use crate::schema::SchemaLoader;

use super::args::Cli;
use super::errors::{CliError, CliResult};
use super::io::{read_lines, write_records};

/// Entry point called from main.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    execute(&cli)
}

fn execute(cli: &Cli) -> CliResult<()> {
    check_input_file(&cli.data_file, "txt")?;
    check_input_file(&cli.format_file, "csv")?;
    let delimiter = parse_delimiter(&cli.delimiter)?;

    let schema = SchemaLoader::with_delimiter(delimiter).load_path(&cli.format_file)?;

    // --quiet swaps the logging sink for a discarded collector
    let mut log_sink = LogSink;
    let mut quiet_sink = CollectSink::new();
    let sink: &mut dyn DiagnosticSink = if cli.quiet { &mut quiet_sink } else { &mut log_sink };

    if let Some(warning) = check_name_correlation(&cli.format_file, &cli.data_file) {
        sink.report(warning);
    }

    let label = display_label(&cli.data_file);
    let lines = read_lines(&cli.data_file)?;
    let outcome = RecordDecoder::new(&schema).decode(&lines, &label, sink);

    write_records(&outcome.records)?;

    if !cli.quiet {
        let decoded = outcome.records.len().to_string();
        let ignored = outcome.ignored.to_string();
        Logger::info(
            "DECODE_COMPLETE",
            &[
                ("decoded", decoded.as_str()),
                ("ignored", ignored.as_str()),
                ("input", label.as_str()),
            ],
        );
    }

    Ok(())
}

/// Requires `path` to be an existing regular file with the expected
/// extension.
fn check_input_file(path: &Path, expected: &'static str) -> CliResult<()> {
    if !path.is_file() {
        return Err(CliError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    if path.extension().map_or(true, |ext| ext != expected) {
        return Err(CliError::WrongExtension {
            path: path.to_path_buf(),
            expected,
        });
    }
    Ok(())
}

/// The format file tokenizer takes a single-byte delimiter.
fn parse_delimiter(raw: &str) -> CliResult<u8> {
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii() => Ok(c as u8),
        _ => Err(CliError::BadDelimiter(raw.to_string())),
    }
}

/// File name of `path`, falling back to the full path display.
fn display_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
