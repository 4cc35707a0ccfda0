//! Record decoding subsystem
//!
//! Decodes fixed-width data lines against a validated schema.
//!
//! # Design Principles
//!
//! - Per-line isolation: no line's failure affects another's
//! - Graceful degradation: bad lines are dropped with a warning,
//!   never aborting the file
//! - No partial records: a line either decodes fully or not at all
//! - Diagnostics flow through an explicit sink, not a side channel

mod decoder;
mod diagnostics;

pub use decoder::{DecodeOutcome, RecordDecoder};
pub use diagnostics::{
    check_name_correlation, CollectSink, DiagnosticSink, LogSink, StderrSink, Warning,
};
