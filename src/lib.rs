//! flatfield - a strict, schema-driven decoder for fixed-width flat
//! text files
//!
//! A format file declares one field per row (column name, character
//! width, datatype); the decoder slices each data line by position
//! and coerces every field to its declared type. Format errors are
//! fatal; data errors are per-line warnings.

pub mod cli;
pub mod decoder;
pub mod observability;
pub mod schema;
pub mod value;
