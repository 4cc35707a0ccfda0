//! Decode-phase diagnostics
//!
//! Decode failures are non-fatal: each one becomes a typed [`Warning`]
//! reported through a caller-supplied [`DiagnosticSink`], the
//! offending line is dropped, and decoding continues. The sink makes
//! the non-fatal channel part of the function signature instead of a
//! process-wide side channel.

use std::fmt;
use std::path::Path;

use crate::observability::Logger;
use crate::value::ConversionError;

/// A non-fatal decode diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Warning {
    /// The line has more characters than the schema's total width
    LineTooLong { label: String, line: usize },

    /// The line has fewer characters than the schema's total width
    LineTooShort { label: String, line: usize },

    /// A field substring failed coercion; the whole line was dropped
    BadFieldValue {
        label: String,
        line: usize,
        raw: String,
        reason: ConversionError,
    },

    /// End-of-input summary, emitted once when any line was ignored
    EntriesIgnored { label: String, count: usize },

    /// Format and data file names do not look related
    NameMismatch {
        format_name: String,
        data_name: String,
    },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::LineTooLong { label, line } => {
                write!(
                    f,
                    "line {} in '{}' is unexpectedly longer; entry ignored",
                    line, label
                )
            }
            Warning::LineTooShort { label, line } => {
                write!(
                    f,
                    "line {} in '{}' does not have enough characters; entry ignored",
                    line, label
                )
            }
            Warning::BadFieldValue {
                label,
                line,
                raw,
                reason,
            } => {
                write!(
                    f,
                    "line {} in '{}' contains invalid data '{}': {}; entry ignored",
                    line, label, raw, reason
                )
            }
            Warning::EntriesIgnored { label, count } => {
                write!(f, "entries ignored in '{}': {}", label, count)
            }
            Warning::NameMismatch {
                format_name,
                data_name,
            } => {
                write!(f, "'{}' may not match '{}'", format_name, data_name)
            }
        }
    }
}

/// Caller-supplied destination for decode warnings.
///
/// Implementations are invoked synchronously, in input order.
pub trait DiagnosticSink {
    fn report(&mut self, warning: Warning);
}

/// Accumulates warnings in order for later inspection.
#[derive(Debug, Default)]
pub struct CollectSink {
    warnings: Vec<Warning>,
}

impl CollectSink {
    /// Creates an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the warnings reported so far, in order.
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Consumes the sink and returns the collected warnings.
    pub fn into_warnings(self) -> Vec<Warning> {
        self.warnings
    }
}

impl DiagnosticSink for CollectSink {
    fn report(&mut self, warning: Warning) {
        self.warnings.push(warning);
    }
}

/// Writes one human-readable line per warning to stderr.
#[derive(Debug, Default)]
pub struct StderrSink;

impl DiagnosticSink for StderrSink {
    fn report(&mut self, warning: Warning) {
        eprintln!("warning: {}", warning);
    }
}

/// Emits structured WARN events via [`Logger`].
#[derive(Debug, Default)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&mut self, warning: Warning) {
        match &warning {
            Warning::LineTooLong { label, line } => {
                let line = line.to_string();
                Logger::warn(
                    "ENTRY_IGNORED_LINE_TOO_LONG",
                    &[("input", label.as_str()), ("line", line.as_str())],
                );
            }
            Warning::LineTooShort { label, line } => {
                let line = line.to_string();
                Logger::warn(
                    "ENTRY_IGNORED_LINE_TOO_SHORT",
                    &[("input", label.as_str()), ("line", line.as_str())],
                );
            }
            Warning::BadFieldValue {
                label,
                line,
                raw,
                reason,
            } => {
                let line = line.to_string();
                let reason = reason.to_string();
                Logger::warn(
                    "ENTRY_IGNORED_BAD_VALUE",
                    &[
                        ("input", label.as_str()),
                        ("line", line.as_str()),
                        ("raw", raw.as_str()),
                        ("reason", reason.as_str()),
                    ],
                );
            }
            Warning::EntriesIgnored { label, count } => {
                let count = count.to_string();
                Logger::warn(
                    "ENTRIES_IGNORED",
                    &[("count", count.as_str()), ("input", label.as_str())],
                );
            }
            Warning::NameMismatch {
                format_name,
                data_name,
            } => {
                Logger::warn(
                    "NAME_MISMATCH",
                    &[
                        ("data", data_name.as_str()),
                        ("format", format_name.as_str()),
                    ],
                );
            }
        }
    }
}

/// Checks the naming convention linking a format file to a data file:
/// the format file's stem should be a substring of the data file's
/// stem (e.g. `trades.csv` and `trades_2015-06-28.txt`).
///
/// Returns a [`Warning::NameMismatch`] when the convention does not
/// hold. A hint only; the caller decides whether to report it.
pub fn check_name_correlation(format_path: &Path, data_path: &Path) -> Option<Warning> {
    let format_stem = format_path.file_stem()?.to_string_lossy();
    let data_stem = data_path.file_stem()?.to_string_lossy();

    if data_stem.contains(format_stem.as_ref()) {
        return None;
    }

    Some(Warning::NameMismatch {
        format_name: format_path.file_name()?.to_string_lossy().into_owned(),
        data_name: data_path.file_name()?.to_string_lossy().into_owned(),
    })
}
