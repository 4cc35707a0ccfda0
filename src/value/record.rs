//! Decoded records
//!
//! A record is an ordered name-to-value mapping produced from one data
//! line. Insertion order follows the schema's field order; lookup is
//! by name. Inserting under an existing name overwrites the earlier
//! value in place, keeping the first position (last write wins).

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::Value;

/// One decoded data line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    entries: Vec<(String, Value)>,
}

impl Record {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty record sized for `fields` entries.
    pub fn with_capacity(fields: usize) -> Self {
        Self {
            entries: Vec::with_capacity(fields),
        }
    }

    /// Inserts a value under `name`. A duplicate name overwrites the
    /// existing value in place.
    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Looks up a value by field name. Matching is case-sensitive.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Returns the number of named values.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the record holds no values.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v))
    }
}

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let mut record = Record::new();
        record.insert("z", Value::Int(1));
        record.insert("a", Value::Int(2));
        record.insert("m", Value::Int(3));

        let names: Vec<&str> = record.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["z", "a", "m"]);
    }

    #[test]
    fn test_duplicate_name_last_write_wins() {
        let mut record = Record::new();
        record.insert("valid", Value::Bool(true));
        record.insert("count", Value::Int(1));
        record.insert("valid", Value::Bool(false));

        assert_eq!(record.len(), 2);
        assert_eq!(record.get("valid"), Some(&Value::Bool(false)));
        // first position is kept
        let names: Vec<&str> = record.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["valid", "count"]);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let mut record = Record::new();
        record.insert("NumbEr", Value::Int(23));

        assert_eq!(record.get("NumbEr"), Some(&Value::Int(23)));
        assert_eq!(record.get("number"), None);
    }

    #[test]
    fn test_serializes_as_ordered_json_object() {
        let mut record = Record::new();
        record.insert("valid", Value::Bool(true));
        record.insert("count", Value::Int(-12));
        record.insert("name", Value::Text("Asthma".into()));

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(
            json,
            "{\"valid\":true,\"count\":-12,\"name\":\"Asthma\"}"
        );
    }
}
