//! Name-keyed records held by the volatile upsert store

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Number of values carried by every [`Meta`] payload
pub const META_LEN: usize = 9;

/// Rejection raised while parsing a [`Meta`] payload at the boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("meta must be a list of 9 values")]
pub struct MetaError;

/// Fixed-width numeric payload.
///
/// The width is part of the type, so a `Meta` that exists always has exactly
/// [`META_LEN`] elements. Values are held as `f64`, so integer input reads
/// back as floats (`1` serializes as `1.0`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meta([f64; META_LEN]);

impl Meta {
    pub fn new(values: [f64; META_LEN]) -> Self {
        Self(values)
    }

    pub fn values(&self) -> &[f64; META_LEN] {
        &self.0
    }

    /// Parse a JSON value that must be an array of exactly nine numbers.
    pub fn from_json(value: &Value) -> Result<Self, MetaError> {
        let items = value.as_array().ok_or(MetaError)?;
        let numbers = items
            .iter()
            .map(Value::as_f64)
            .collect::<Option<Vec<f64>>>()
            .ok_or(MetaError)?;
        Self::try_from(numbers)
    }
}

impl TryFrom<Vec<f64>> for Meta {
    type Error = MetaError;

    fn try_from(values: Vec<f64>) -> Result<Self, Self::Error> {
        <[f64; META_LEN]>::try_from(values)
            .map(Self)
            .map_err(|_| MetaError)
    }
}

impl From<[f64; META_LEN]> for Meta {
    fn from(values: [f64; META_LEN]) -> Self {
        Self(values)
    }
}

/// A `{name, meta}` entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpsertRecord {
    pub name: String,
    pub meta: Meta,
}

impl UpsertRecord {
    pub fn new(name: impl Into<String>, meta: Meta) -> Self {
        Self {
            name: name.into(),
            meta,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_json_accepts_nine_numbers() {
        let meta = Meta::from_json(&json!([1, 2, 3, 4, 5, 6, 7, 8, 9.5])).unwrap();
        assert_eq!(meta.values()[0], 1.0);
        assert_eq!(meta.values()[8], 9.5);
    }

    #[test]
    fn test_from_json_rejects_wrong_length() {
        assert_eq!(Meta::from_json(&json!([1, 2, 3])), Err(MetaError));
        assert_eq!(
            Meta::from_json(&json!([1, 2, 3, 4, 5, 6, 7, 8, 9, 10])),
            Err(MetaError)
        );
        assert_eq!(Meta::from_json(&json!([])), Err(MetaError));
    }

    #[test]
    fn test_from_json_rejects_non_list() {
        assert_eq!(Meta::from_json(&json!("not a list")), Err(MetaError));
        assert_eq!(Meta::from_json(&json!({ "a": 1 })), Err(MetaError));
        assert_eq!(Meta::from_json(&Value::Null), Err(MetaError));
    }

    #[test]
    fn test_from_json_rejects_non_numeric_items() {
        let value = json!([1, 2, 3, 4, "5", 6, 7, 8, 9]);
        assert_eq!(Meta::from_json(&value), Err(MetaError));
    }

    #[test]
    fn test_error_message() {
        assert_eq!(MetaError.to_string(), "meta must be a list of 9 values");
    }

    #[test]
    fn test_record_serializes_meta_as_array() {
        let record = UpsertRecord::new("alice", Meta::new([0.5; META_LEN]));
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["name"], "alice");
        assert_eq!(json["meta"].as_array().map(Vec::len), Some(META_LEN));
    }

    #[test]
    fn test_integer_meta_reads_back_as_floats() {
        let meta = Meta::from_json(&json!([1, 2, 3, 4, 5, 6, 7, 8, 9])).unwrap();
        let json = serde_json::to_value(meta).unwrap();
        assert_eq!(json, json!([1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]));
        assert!(json[0].is_f64());
        assert!(!json[0].is_u64());
    }
}
