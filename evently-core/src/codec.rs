//! JSON record conventions shared by the data model.
//!
//! Every entity serializes to a JSON object whose keys come out in
//! declaration order (`serde_json` is built with `preserve_order`).
//! Parsing is strict: a missing key or a wrongly typed value fails with a
//! [`ParseError`] naming the record kind. Records must be JSON objects at
//! every level; arrays are never read as positional records. Unknown keys
//! are ignored.

use serde::de::{DeserializeOwned, Error as _, Unexpected};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{ParseError, ParseResult, SerializationFailure};

/// An ordered JSON object.
pub type Record = serde_json::Map<String, Value>;

/// A value object with a JSON record form.
pub trait JsonRecord: Serialize + DeserializeOwned {
    /// Name used in error messages ("clock", "event date", "event").
    const KIND: &'static str;

    fn from_record(value: &Value) -> ParseResult<Self> {
        let parsed = match value {
            Value::Object(_) => Self::deserialize(value),
            other => Err(serde_json::Error::invalid_type(unexpected(other), &"a JSON object")),
        };

        parsed.map_err(|source| ParseError::Record {
            kind: Self::KIND,
            source,
        })
    }

    fn try_to_record(&self) -> Result<Record, SerializationFailure> {
        let value = serde_json::to_value(self).map_err(|source| SerializationFailure::Serde {
            kind: Self::KIND,
            source,
        })?;

        match value {
            Value::Object(record) => Ok(record),
            _ => Err(SerializationFailure::NotARecord { kind: Self::KIND }),
        }
    }
}

/// `deserialize_with` helper for nested records: only a JSON object is
/// accepted, then the record is read by key.
pub(crate) fn keyed_record<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let record = Record::deserialize(deserializer)?;
    T::deserialize(Value::Object(record)).map_err(D::Error::custom)
}

fn unexpected(value: &Value) -> Unexpected<'_> {
    match value {
        Value::Null => Unexpected::Unit,
        Value::Bool(b) => Unexpected::Bool(*b),
        Value::Number(_) => Unexpected::Other("number"),
        Value::String(s) => Unexpected::Str(s),
        Value::Array(_) => Unexpected::Seq,
        Value::Object(_) => Unexpected::Map,
    }
}

/// Parse payload text into a JSON value.
pub fn parse_payload(payload: &str) -> ParseResult<Value> {
    serde_json::from_str(payload).map_err(ParseError::Payload)
}
