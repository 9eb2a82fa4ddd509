//! JSON documents with reconstituted dates.
//!
//! JSON has no date type, so the service sends timestamps as strings.
//! [`Document`] is a JSON tree with one extra leaf kind, [`Document::Date`],
//! produced by walking the whole tree and converting every string that
//! parses under the strict ISO-8601 grammar of [`crate::time::parse_iso8601`].

use crate::time::{format_iso8601, parse_iso8601};
use chrono::{DateTime, Utc};
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};
use std::collections::BTreeMap;

/// A JSON value whose date-formatted strings have been turned into dates.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Document {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Date(DateTime<Utc>),
    Array(Vec<Document>),
    Object(BTreeMap<String, Document>),
}

impl Document {
    /// Build a document from raw JSON, reconstituting dates everywhere in the tree.
    pub fn revive(value: Value) -> Self {
        match value {
            Value::String(s) => revive_string(s),
            Value::Array(items) => {
                Document::Array(items.into_iter().map(Document::revive).collect())
            }
            Value::Object(map) => Document::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Document::revive(value)))
                    .collect(),
            ),
            Value::Null => Document::Null,
            Value::Bool(b) => Document::Bool(b),
            Value::Number(n) => Document::Number(n),
        }
    }

    /// Reconstitute dates in an existing document.
    ///
    /// Existing dates and non-date strings are left as they are, so applying
    /// this any number of times gives the same result as applying it once.
    pub fn revive_dates(self) -> Self {
        match self {
            Document::String(s) => revive_string(s),
            Document::Array(items) => {
                Document::Array(items.into_iter().map(Document::revive_dates).collect())
            }
            Document::Object(map) => Document::Object(
                map.into_iter()
                    .map(|(key, value)| (key, value.revive_dates()))
                    .collect(),
            ),
            other => other,
        }
    }

    /// Convert back to plain JSON. Dates become canonical ISO-8601 strings.
    pub fn into_json(self) -> Value {
        match self {
            Document::Null => Value::Null,
            Document::Bool(b) => Value::Bool(b),
            Document::Number(n) => Value::Number(n),
            Document::String(s) => Value::String(s),
            Document::Date(dt) => Value::String(format_iso8601(&dt)),
            Document::Array(items) => {
                Value::Array(items.into_iter().map(Document::into_json).collect())
            }
            Document::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, value)| (key, value.into_json()))
                    .collect(),
            ),
        }
    }

    /// Get a value by a slash-separated path.
    /// For example, "metadata/creator/timeCreated" walks three nested objects;
    /// numeric segments index into arrays.
    pub fn get(&self, path: &str) -> Option<&Document> {
        let mut current = self;

        for part in path.split('/').filter(|s| !s.is_empty()) {
            current = match current {
                Document::Object(map) => map.get(part)?,
                Document::Array(items) => {
                    let index: usize = part.parse().ok()?;
                    items.get(index)?
                }
                _ => return None,
            };
        }

        Some(current)
    }

    /// Get a string by a slash-separated path
    pub fn get_str(&self, path: &str) -> Option<&str> {
        self.get(path).and_then(Document::as_str)
    }

    /// Get a date by a slash-separated path
    pub fn get_date(&self, path: &str) -> Option<DateTime<Utc>> {
        self.get(path).and_then(Document::as_date)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Document::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match self {
            Document::Date(dt) => Some(*dt),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Document::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Document::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Document::Number(n) => n.as_f64(),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Document]> {
        match self {
            Document::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&BTreeMap<String, Document>> {
        match self {
            Document::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Document::Null)
    }
}

fn revive_string(s: String) -> Document {
    match parse_iso8601(&s) {
        Some(dt) => Document::Date(dt),
        None => Document::String(s),
    }
}

/// Plain conversion: strings stay strings.
impl From<Value> for Document {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Document::Null,
            Value::Bool(b) => Document::Bool(b),
            Value::Number(n) => Document::Number(n),
            Value::String(s) => Document::String(s),
            Value::Array(items) => Document::Array(items.into_iter().map(Document::from).collect()),
            Value::Object(map) => Document::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Document::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Self {
        doc.into_json()
    }
}

impl From<DateTime<Utc>> for Document {
    fn from(dt: DateTime<Utc>) -> Self {
        Document::Date(dt)
    }
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Document::Null => serializer.serialize_unit(),
            Document::Bool(b) => serializer.serialize_bool(*b),
            Document::Number(n) => n.serialize(serializer),
            Document::String(s) => serializer.serialize_str(s),
            Document::Date(dt) => serializer.serialize_str(&format_iso8601(dt)),
            Document::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Document::Object(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
        }
    }
}

/// Deserializing a `Document` always reconstitutes dates.
impl<'de> Deserialize<'de> for Document {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(Document::revive)
    }
}
