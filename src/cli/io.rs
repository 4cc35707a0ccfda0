//! Line and record I/O for the CLI
//!
//! Input: data files are read fully into memory and split into lines;
//! the decoder assumes bounded inputs. Output: one JSON object per
//! record on stdout, in decode order. stdout carries nothing else.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use crate::value::Record;

use super::errors::CliResult;

/// Reads a data file into an ordered sequence of lines.
///
/// Line terminators are stripped; a trailing newline does not produce
/// an empty final line.
pub fn read_lines(path: &Path) -> CliResult<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().map(str::to_string).collect())
}

/// Writes records to stdout, one JSON object per line.
pub fn write_records(records: &[Record]) -> CliResult<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for record in records {
        serde_json::to_writer(&mut out, record)?;
        writeln!(out)?;
    }
    out.flush()?;
    Ok(())
}
