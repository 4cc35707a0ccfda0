//! The per-line record decoder
//!
//! Each line is decoded independently: length check against the
//! schema's total width, then positional slicing and coercion field
//! by field. A bad line is reported and dropped; it never aborts the
//! rest of the input and never emits a partial record. Output record
//! order matches input line order with ignored lines removed.

use crate::schema::Schema;
use crate::value::{coerce, ConversionError, Record};

use super::diagnostics::{DiagnosticSink, Warning};

/// Result of one decode call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DecodeOutcome {
    /// Successfully decoded records, in input order
    pub records: Vec<Record>,
    /// Number of lines dropped by length or coercion failures
    pub ignored: usize,
}

/// Decodes fixed-width lines against a borrowed [`Schema`].
///
/// Holds no mutable state; one schema can back any number of
/// decoders, including on other threads.
#[derive(Debug, Clone, Copy)]
pub struct RecordDecoder<'a> {
    schema: &'a Schema,
}

impl<'a> RecordDecoder<'a> {
    /// Creates a decoder for the given schema.
    pub fn new(schema: &'a Schema) -> Self {
        Self { schema }
    }

    /// Returns the schema this decoder reads with.
    pub fn schema(&self) -> &Schema {
        self.schema
    }

    /// Decodes an ordered sequence of lines.
    ///
    /// `label` is a human-readable identifier for the input (usually
    /// the data file name) and tags every warning. Lines are
    /// 1-indexed in diagnostics. When any line was ignored, a single
    /// summary warning is reported after the last line.
    pub fn decode<I, S>(&self, lines: I, label: &str, sink: &mut dyn DiagnosticSink) -> DecodeOutcome
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut outcome = DecodeOutcome::default();

        for (index, line) in lines.into_iter().enumerate() {
            match self.decode_line(line.as_ref()) {
                Ok(record) => outcome.records.push(record),
                Err(skip) => {
                    sink.report(skip.into_warning(label, index + 1));
                    outcome.ignored += 1;
                }
            }
        }

        if outcome.ignored > 0 {
            sink.report(Warning::EntriesIgnored {
                label: label.to_string(),
                count: outcome.ignored,
            });
        }

        outcome
    }

    /// Decodes a single line. `Err` means the entry is ignored.
    fn decode_line(&self, line: &str) -> Result<Record, LineSkip> {
        // Widths count characters, not bytes.
        let chars: Vec<char> = line.chars().collect();
        let total = self.schema.total_width();

        if chars.len() > total {
            return Err(LineSkip::TooLong);
        }
        if chars.len() < total {
            return Err(LineSkip::TooShort);
        }

        let mut record = Record::with_capacity(self.schema.field_count());
        let mut cursor = 0;
        for field in self.schema.fields() {
            let slice: String = chars[cursor..cursor + field.width].iter().collect();
            let raw = slice.trim();
            match coerce(raw, field.datatype) {
                Ok(value) => record.insert(field.name.clone(), value),
                Err(reason) => {
                    return Err(LineSkip::BadField {
                        raw: raw.to_string(),
                        reason,
                    })
                }
            }
            cursor += field.width;
        }

        Ok(record)
    }
}

/// Why a line was dropped.
enum LineSkip {
    TooLong,
    TooShort,
    BadField { raw: String, reason: ConversionError },
}

impl LineSkip {
    fn into_warning(self, label: &str, line: usize) -> Warning {
        let label = label.to_string();
        match self {
            LineSkip::TooLong => Warning::LineTooLong { label, line },
            LineSkip::TooShort => Warning::LineTooShort { label, line },
            LineSkip::BadField { raw, reason } => Warning::BadFieldValue {
                label,
                line,
                raw,
                reason,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::CollectSink;
    use crate::schema::{Datatype, FieldSpec, SchemaBuilder};
    use crate::value::Value;

    fn flag_and_count_schema() -> Schema {
        let mut builder = SchemaBuilder::new();
        builder.push_field(FieldSpec::new("valid", 1, Datatype::Boolean));
        builder.push_field(FieldSpec::new("count", 3, Datatype::Integer));
        builder.finish().unwrap()
    }

    #[test]
    fn test_decode_single_line() {
        let schema = flag_and_count_schema();
        let mut sink = CollectSink::new();
        let outcome = RecordDecoder::new(&schema).decode(["1-12"], "data.txt", &mut sink);

        assert_eq!(outcome.ignored, 0);
        assert_eq!(outcome.records.len(), 1);
        let record = &outcome.records[0];
        assert_eq!(record.get("valid"), Some(&Value::Bool(true)));
        assert_eq!(record.get("count"), Some(&Value::Int(-12)));
        assert!(sink.warnings().is_empty());
    }

    #[test]
    fn test_short_line_is_ignored() {
        let schema = flag_and_count_schema();
        let mut sink = CollectSink::new();
        let outcome = RecordDecoder::new(&schema).decode(["1-1"], "data.txt", &mut sink);

        assert!(outcome.records.is_empty());
        assert_eq!(outcome.ignored, 1);
        assert!(matches!(
            sink.warnings()[0],
            Warning::LineTooShort { line: 1, .. }
        ));
    }

    #[test]
    fn test_long_line_is_ignored() {
        let schema = flag_and_count_schema();
        let mut sink = CollectSink::new();
        let outcome = RecordDecoder::new(&schema).decode(["1-123"], "data.txt", &mut sink);

        assert!(outcome.records.is_empty());
        assert_eq!(outcome.ignored, 1);
        assert!(matches!(
            sink.warnings()[0],
            Warning::LineTooLong { line: 1, .. }
        ));
    }

    #[test]
    fn test_coercion_failure_drops_whole_line() {
        let schema = flag_and_count_schema();
        let mut sink = CollectSink::new();
        let outcome = RecordDecoder::new(&schema).decode(["1abc"], "data.txt", &mut sink);

        // no partial record with only "valid" decoded
        assert!(outcome.records.is_empty());
        assert_eq!(outcome.ignored, 1);
        match &sink.warnings()[0] {
            Warning::BadFieldValue { raw, reason, .. } => {
                assert_eq!(raw, "abc");
                assert_eq!(*reason, ConversionError::InvalidInteger("abc".into()));
            }
            other => panic!("expected BadFieldValue, got {:?}", other),
        }
    }

    #[test]
    fn test_summary_counts_all_ignored_lines() {
        let schema = flag_and_count_schema();
        let mut sink = CollectSink::new();
        let lines = ["1-12", "1-1", "0  3", "2-12", "11234"];
        let outcome = RecordDecoder::new(&schema).decode(lines, "data.txt", &mut sink);

        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.ignored, 3);

        let last = sink.warnings().last().unwrap();
        assert_eq!(
            *last,
            Warning::EntriesIgnored {
                label: "data.txt".into(),
                count: 3,
            }
        );
    }

    #[test]
    fn test_no_summary_without_ignored_lines() {
        let schema = flag_and_count_schema();
        let mut sink = CollectSink::new();
        let outcome = RecordDecoder::new(&schema).decode(["1-12", "0  7"], "data.txt", &mut sink);

        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.ignored, 0);
        assert!(sink.warnings().is_empty());
    }

    #[test]
    fn test_output_order_matches_input_order() {
        let schema = flag_and_count_schema();
        let mut sink = CollectSink::new();
        let lines = ["1  1", "bad!", "0  2", "1  3"];
        let outcome = RecordDecoder::new(&schema).decode(lines, "data.txt", &mut sink);

        let counts: Vec<i64> = outcome
            .records
            .iter()
            .map(|r| r.get("count").unwrap().as_int().unwrap())
            .collect();
        assert_eq!(counts, vec![1, 2, 3]);
    }

    #[test]
    fn test_duplicate_field_names_keep_last_value() {
        let mut builder = SchemaBuilder::new();
        builder.push_field(FieldSpec::new("n", 1, Datatype::Integer));
        builder.push_field(FieldSpec::new("n", 1, Datatype::Integer));
        let schema = builder.finish().unwrap();

        let mut sink = CollectSink::new();
        let outcome = RecordDecoder::new(&schema).decode(["12"], "data.txt", &mut sink);

        assert_eq!(outcome.records.len(), 1);
        let record = &outcome.records[0];
        assert_eq!(record.len(), 1);
        assert_eq!(record.get("n"), Some(&Value::Int(2)));
    }

    #[test]
    fn test_field_values_are_trimmed_before_coercion() {
        let mut builder = SchemaBuilder::new();
        builder.push_field(FieldSpec::new("name", 10, Datatype::Text));
        builder.push_field(FieldSpec::new("count", 4, Datatype::Integer));
        let schema = builder.finish().unwrap();

        let mut sink = CollectSink::new();
        let outcome =
            RecordDecoder::new(&schema).decode(["Diabetes   103"], "data.txt", &mut sink);

        let record = &outcome.records[0];
        assert_eq!(record.get("name"), Some(&Value::Text("Diabetes".into())));
        assert_eq!(record.get("count"), Some(&Value::Int(103)));
    }

    #[test]
    fn test_empty_line_against_nonzero_width_is_short() {
        let schema = flag_and_count_schema();
        let mut sink = CollectSink::new();
        let outcome = RecordDecoder::new(&schema).decode([""], "data.txt", &mut sink);

        assert!(outcome.records.is_empty());
        assert_eq!(outcome.ignored, 1);
    }
}
