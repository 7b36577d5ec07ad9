use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::{Error, Result};

/// A raw record as delivered by the record source: a JSON object whose field
/// semantics are unknown to the table engine.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    pub fn new(fields: Map<String, Value>) -> Self {
        Record(fields)
    }

    /// Wraps a JSON value, rejecting anything that isn't an object.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(fields) => Ok(Record(fields)),
            other => Err(Error::MalformedRecord(format!(
                "expected a JSON object, got {}",
                value_kind(&other)
            ))),
        }
    }

    /// Wraps a JSON array of objects.
    pub fn many_from_value(value: Value) -> Result<Vec<Self>> {
        match value {
            Value::Array(items) => items.into_iter().map(Record::from_value).collect(),
            other => Err(Error::MalformedRecord(format!(
                "expected a JSON array of records, got {}",
                value_kind(&other)
            ))),
        }
    }

    /// Serializes a typed value into a record.
    pub fn from_serializable<T: Serialize>(value: &T) -> Result<Self> {
        Record::from_value(serde_json::to_value(value)?)
    }

    /// Looks up a top-level field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Looks up a field by dotted path, e.g. `startup.companyName`.
    ///
    /// A key that exists verbatim at the top level wins over path splitting.
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        if let Some(value) = self.0.get(path) {
            return Some(value);
        }
        let mut segments = path.split('.');
        let first = segments.next()?;
        let mut current = self.0.get(first)?;
        for segment in segments {
            current = match current {
                Value::Object(fields) => fields.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Text value of a field; missing, null and non-string values yield `None`.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        self.get_path(field).and_then(Value::as_str)
    }

    /// Identifier of the record, accepting string or numeric ids.
    pub fn id(&self) -> Option<String> {
        match self.0.get("id")? {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Own fields in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.0.values()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Decodes the record into a typed model.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(Value::Object(self.0.clone()))
            .map_err(|e| Error::MalformedRecord(format!("{} in record {:?}", e, self.id())))
    }

    pub fn into_inner(self) -> Map<String, Value> {
        self.0
    }
}

impl AsRef<Record> for Record {
    fn as_ref(&self) -> &Record {
        self
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Record(fields)
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Collections exposed by the record source.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum RecordKind {
    Startups,
    Investors,
    FundingRounds,
}

impl RecordKind {
    /// Path segment of the collection on the API.
    pub fn as_path(&self) -> &'static str {
        match self {
            RecordKind::Startups => "startups",
            RecordKind::Investors => "investors",
            RecordKind::FundingRounds => "funding-rounds",
        }
    }
}

/// Entities that own a binary profile resource.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum EntityKind {
    Startup,
    Investor,
}

impl EntityKind {
    pub fn as_path(&self) -> &'static str {
        match self {
            EntityKind::Startup => "startup",
            EntityKind::Investor => "investor",
        }
    }
}

/// Opaque binary resource attached to an entity, such as a profile picture.
#[derive(Debug, Clone, PartialEq)]
pub struct Resource {
    pub entity_id: String,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}
