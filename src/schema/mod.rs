//! Format ("schema") subsystem
//!
//! A format source declares one fixed-width field per row: column
//! name, character width, and datatype. Loading validates the whole
//! description up front so decoding never sees a malformed layout.
//!
//! # Design Principles
//!
//! - Format errors are fatal; decode errors are not
//! - Validation happens before any data line is read
//! - A schema is immutable once built; no partially-valid schema is
//!   ever observable
//! - Row tokenization is external; validation here starts from rows
//!   of string cells

mod errors;
mod loader;
mod types;

pub use errors::{CellCountKind, FormatError, FormatResult};
pub use loader::{SchemaLoader, DEFAULT_DELIMITER};
pub use types::{Datatype, FieldSpec, Schema, SchemaBuilder};
