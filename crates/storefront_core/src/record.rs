use std::collections::BTreeMap;

use crate::schema::Schema;

/// Opaque backend-assigned identifier for a [`Record`].
pub type RecordId = String;

/// Canonical field name owned by a [`Schema`].
pub type FieldName = &'static str;

/// A single typed field value as it crosses the gateway.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    /// The value as the user sees it: text verbatim, numbers as their
    /// decimal string.
    pub fn display(&self) -> String {
        match self {
            FieldValue::Text(text) => text.clone(),
            FieldValue::Number(number) => number.to_string(),
        }
    }
}

/// Fully validated field payload, keyed by schema field name.
pub type RecordData = BTreeMap<FieldName, FieldValue>;

/// One item of a managed resource collection, as acknowledged by the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub id: RecordId,
    pub data: RecordData,
}

impl Record {
    /// Case-insensitive substring match against every field's display string.
    /// `needle` must already be lowercased.
    pub fn matches(&self, needle: &str) -> bool {
        self.data
            .values()
            .any(|value| value.display().to_lowercase().contains(needle))
    }
}

/// An in-progress, possibly invalid edit of a record. Every field is carried
/// as editable text; the money field is parsed only at submit time.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Draft {
    values: BTreeMap<FieldName, String>,
}

impl Draft {
    /// All-empty draft for the schema's fields.
    pub fn empty(schema: &Schema) -> Self {
        let values = schema
            .fields
            .iter()
            .map(|field| (field.name, String::new()))
            .collect();
        Self { values }
    }

    /// Draft populated from a fetched record, numbers rendered as their
    /// decimal string.
    pub fn from_record(schema: &Schema, record: &Record) -> Self {
        let values = schema
            .fields
            .iter()
            .map(|field| {
                let text = record
                    .data
                    .get(field.name)
                    .map(FieldValue::display)
                    .unwrap_or_default();
                (field.name, text)
            })
            .collect();
        Self { values }
    }

    pub fn get(&self, name: &str) -> &str {
        self.values.get(name).map(String::as_str).unwrap_or("")
    }

    pub(crate) fn set(&mut self, name: FieldName, value: String) {
        self.values.insert(name, value);
    }
}
