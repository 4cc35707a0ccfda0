//! CLI-specific error types
//!
//! All CLI errors are fatal: main prints them to stderr and exits
//! non-zero.

use std::path::PathBuf;

use thiserror::Error;

use crate::schema::FormatError;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Input path does not exist or is not a regular file
    #[error("'{}' not found", .path.display())]
    FileNotFound { path: PathBuf },

    /// Input file has the wrong extension for its role
    #[error("'{}' is not a .{expected} file", .path.display())]
    WrongExtension {
        path: PathBuf,
        expected: &'static str,
    },

    /// --delimiter must be a single ASCII character
    #[error("invalid delimiter '{0}': expected a single ASCII character")]
    BadDelimiter(String),

    /// Format file failed to load
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Data file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A record could not be serialized for output
    #[error("output error: {0}")]
    Output(#[from] serde_json::Error),
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
