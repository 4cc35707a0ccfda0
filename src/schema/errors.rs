//! Format ("schema") error types
//!
//! All format-phase failures are fatal: they abort loading and are
//! surfaced to the caller as a distinct variant. Callers match on the
//! variant, never on message text. Line numbers count the header as
//! line 1, so the first field row is line 2.

use std::fmt;

use thiserror::Error;

/// Whether a bad field row carried too many or too few cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellCountKind {
    /// More cells than the three the header declares
    Excess,
    /// Fewer cells than the three the header declares
    Short,
}

impl fmt::Display for CellCountKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellCountKind::Excess => write!(f, "contains excess unknown values"),
            CellCountKind::Short => write!(f, "does not have enough values"),
        }
    }
}

/// Format loading errors
#[derive(Debug, Error)]
pub enum FormatError {
    /// Format source has no rows at all, or no field rows after the header
    #[error("'{label}' is empty")]
    EmptyFormat { label: String },

    /// Header row is missing required labels or carries extras
    #[error("'{label}' does not contain a valid header: '{header}'. Please make sure the delimiter is correct.")]
    InvalidHeader { label: String, header: String },

    /// A field row has the wrong cell count
    #[error("line {line} in '{label}' {kind}")]
    InvalidFormat {
        label: String,
        line: usize,
        kind: CellCountKind,
    },

    /// A field row's datatype is outside the supported set
    #[error("line {line} in '{label}' contains invalid datatype '{value}'")]
    InvalidDatatype {
        label: String,
        line: usize,
        value: String,
    },

    /// A field row's width is not a positive integer
    #[error("line {line} in '{label}' contains invalid width '{value}'")]
    InvalidWidth {
        label: String,
        line: usize,
        value: String,
    },

    /// Format source could not be opened
    #[error("failed to read '{label}'")]
    Io {
        label: String,
        #[source]
        source: std::io::Error,
    },

    /// Row tokenization failed (bad UTF-8 or an I/O error mid-file)
    #[error("failed to tokenize '{label}'")]
    Tokenize {
        label: String,
        #[source]
        source: csv::Error,
    },
}

/// Result type for format loading operations
pub type FormatResult<T> = Result<T, FormatError>;
