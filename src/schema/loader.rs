//! Format file loader
//!
//! A format file is tabular text with a single-byte delimiter
//! (default `,`). The header row must carry the labels
//! `column name`, `width`, and `datatype`, matched case-insensitively
//! and in any order. Each following row declares one field.
//!
//! Tokenization is the `csv` crate's job; everything after "ordered
//! rows of string cells" is validated here, so [`SchemaLoader::load_rows`]
//! is testable without touching disk.

use std::fs::File;
use std::path::Path;

use super::errors::{CellCountKind, FormatError, FormatResult};
use super::types::{Datatype, FieldSpec, Schema, SchemaBuilder};
use crate::value::{coerce, Value};

/// Delimiter used when none is configured.
pub const DEFAULT_DELIMITER: u8 = b',';

/// Required header labels, in canonical order.
const HEADER_LABELS: [&str; 3] = ["column name", "width", "datatype"];

/// Loads format descriptions into validated [`Schema`] values.
///
/// Loaders are plain values with no process-wide state; constructing
/// one per format source is cheap.
#[derive(Debug, Clone, Copy)]
pub struct SchemaLoader {
    delimiter: u8,
}

impl Default for SchemaLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl SchemaLoader {
    /// Creates a loader with the default `,` delimiter.
    pub fn new() -> Self {
        Self {
            delimiter: DEFAULT_DELIMITER,
        }
    }

    /// Creates a loader with a custom single-byte delimiter.
    pub fn with_delimiter(delimiter: u8) -> Self {
        Self { delimiter }
    }

    /// Returns the configured delimiter.
    pub fn delimiter(&self) -> u8 {
        self.delimiter
    }

    /// Loads and validates a format file from disk.
    ///
    /// Errors are labeled with the file name rather than the full
    /// path, matching the labels used in decode diagnostics.
    pub fn load_path(&self, path: &Path) -> FormatResult<Schema> {
        let label = display_label(path);

        let file = File::open(path).map_err(|e| FormatError::Io {
            label: label.clone(),
            source: e,
        })?;

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(self.delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(file);

        let mut rows: Vec<Vec<String>> = Vec::new();
        for result in reader.records() {
            let record = result.map_err(|e| FormatError::Tokenize {
                label: label.clone(),
                source: e,
            })?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        self.load_rows(rows, &label)
    }

    /// Validates tokenized rows into a [`Schema`].
    ///
    /// The first row is the header; every later row declares one
    /// field. Row errors cite the source line number, with the header
    /// occupying line 1.
    pub fn load_rows<R>(&self, rows: R, label: &str) -> FormatResult<Schema>
    where
        R: IntoIterator<Item = Vec<String>>,
    {
        let mut rows = rows.into_iter();

        let header = rows.next().ok_or_else(|| FormatError::EmptyFormat {
            label: label.to_string(),
        })?;

        let positions = header_positions(&header).ok_or_else(|| FormatError::InvalidHeader {
            label: label.to_string(),
            header: join_normalized(&header, self.delimiter),
        })?;

        let mut builder = SchemaBuilder::new();
        for (index, row) in rows.enumerate() {
            let line = index + 2;

            if row.len() != HEADER_LABELS.len() {
                let kind = if row.len() > HEADER_LABELS.len() {
                    CellCountKind::Excess
                } else {
                    CellCountKind::Short
                };
                return Err(FormatError::InvalidFormat {
                    label: label.to_string(),
                    line,
                    kind,
                });
            }

            // Cells are assigned by header position, not by a fixed
            // column order.
            let name = row[positions.name].trim();
            let width_raw = row[positions.width].trim();
            let datatype_raw = row[positions.datatype].trim();

            let datatype =
                Datatype::parse(datatype_raw).ok_or_else(|| FormatError::InvalidDatatype {
                    label: label.to_string(),
                    line,
                    value: datatype_raw.to_string(),
                })?;

            let width = parse_width(width_raw).ok_or_else(|| FormatError::InvalidWidth {
                label: label.to_string(),
                line,
                value: width_raw.to_string(),
            })?;

            builder.push_field(FieldSpec::new(name, width, datatype));
        }

        builder.finish().ok_or_else(|| FormatError::EmptyFormat {
            label: label.to_string(),
        })
    }
}

/// Width cells go through the shared integer coercion rule and must
/// come out positive.
fn parse_width(raw: &str) -> Option<usize> {
    match coerce(raw, Datatype::Integer) {
        Ok(Value::Int(width)) if width > 0 => Some(width as usize),
        _ => None,
    }
}

/// Positions of the three required labels within the header row.
struct HeaderPositions {
    name: usize,
    width: usize,
    datatype: usize,
}

/// Maps normalized header cells to label positions. Returns `None`
/// unless the header holds exactly the three labels, each once.
fn header_positions(header: &[String]) -> Option<HeaderPositions> {
    if header.len() != HEADER_LABELS.len() {
        return None;
    }

    let mut name = None;
    let mut width = None;
    let mut datatype = None;
    for (position, cell) in header.iter().enumerate() {
        match cell.trim().to_lowercase().as_str() {
            "column name" if name.is_none() => name = Some(position),
            "width" if width.is_none() => width = Some(position),
            "datatype" if datatype.is_none() => datatype = Some(position),
            _ => return None,
        }
    }

    Some(HeaderPositions {
        name: name?,
        width: width?,
        datatype: datatype?,
    })
}

/// Rebuilds the header text for error messages, normalized the way it
/// was matched.
fn join_normalized(header: &[String], delimiter: u8) -> String {
    header
        .iter()
        .map(|cell| cell.trim().to_lowercase())
        .collect::<Vec<_>>()
        .join(&(delimiter as char).to_string())
}

/// File name of `path`, falling back to the full path display.
fn display_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
