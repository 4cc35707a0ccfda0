//! Observability for the decoder
//!
//! Structured, synchronous JSON logging. The CLI routes decode
//! diagnostics and its end-of-run summary through here; library
//! callers that prefer collected warnings never touch it.

mod logger;

pub use logger::{Logger, Severity};
