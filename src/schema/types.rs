//! Schema type definitions
//!
//! Supported datatypes:
//! - INTEGER: base-10 signed 64-bit integer
//! - BOOLEAN: exactly "1" or "0"
//! - TEXT: the trimmed substring as-is
//!
//! A [`Schema`] is immutable once built. Construction goes through
//! [`SchemaBuilder`], which accumulates fields into owned locals so no
//! partially-valid schema is ever observable.

use std::fmt;

/// Supported field datatypes.
///
/// The set is closed: every consumer matches exhaustively, so there is
/// no runtime "unknown datatype" path once a schema has been loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Datatype {
    /// Base-10 signed integer
    Integer,
    /// "1" or "0"
    Boolean,
    /// Raw text, no further validation
    Text,
}

impl Datatype {
    /// Parses a datatype name, case-insensitively.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_uppercase().as_str() {
            "INTEGER" => Some(Datatype::Integer),
            "BOOLEAN" => Some(Datatype::Boolean),
            "TEXT" => Some(Datatype::Text),
            _ => None,
        }
    }

    /// Returns the canonical name for error messages
    pub fn as_str(&self) -> &'static str {
        match self {
            Datatype::Integer => "INTEGER",
            Datatype::Boolean => "BOOLEAN",
            Datatype::Text => "TEXT",
        }
    }
}

impl fmt::Display for Datatype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One named, fixed-width, typed column within a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// Column name; matching is case-sensitive
    pub name: String,
    /// Character width, always > 0
    pub width: usize,
    /// Declared datatype
    pub datatype: Datatype,
}

impl FieldSpec {
    /// Create a new field spec
    pub fn new(name: impl Into<String>, width: usize, datatype: Datatype) -> Self {
        Self {
            name: name.into(),
            width,
            datatype,
        }
    }
}

/// A validated fixed-width layout description.
///
/// Field order is the row order of the format source. The total width
/// is cached at construction for fast rejection of mismatched lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    fields: Vec<FieldSpec>,
    total_width: usize,
}

impl Schema {
    /// Returns the fields in declaration order.
    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }

    /// Returns the expected character length of a valid data line.
    pub fn total_width(&self) -> usize {
        self.total_width
    }

    /// Returns the number of declared fields.
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }
}

/// Accumulates validated fields and exposes an immutable [`Schema`]
/// on success.
#[derive(Debug, Default)]
pub struct SchemaBuilder {
    fields: Vec<FieldSpec>,
    total_width: usize,
}

impl SchemaBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field and accumulates its width.
    pub fn push_field(&mut self, field: FieldSpec) {
        self.total_width += field.width;
        self.fields.push(field);
    }

    /// Finishes the schema. Returns `None` when no fields were pushed;
    /// a schema with zero fields would treat every line as decodable.
    pub fn finish(self) -> Option<Schema> {
        if self.fields.is_empty() {
            return None;
        }
        Some(Schema {
            fields: self.fields,
            total_width: self.total_width,
        })
    }
}
