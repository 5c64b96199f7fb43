//! Record values.
//!
//! A [`Document`] is an ordered map so that the same key always serializes
//! to the same bytes, whichever backend consumes it.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A generated record body, keyed by field name.
pub type Document = BTreeMap<String, FieldValue>;

/// A single typed field value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Integer value
    Int(i64),

    /// Floating point value
    Float(f64),

    /// String value
    Text(String),

    /// Sequence of integers (achievements, gmtime)
    IntArray(Vec<i64>),
}

impl FieldValue {
    /// Try to get this value as a string reference.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get this value as an i64.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Try to get this value as an f64.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Float(f) => Some(*f),
            Self::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Try to get this value as an integer slice.
    pub fn as_int_array(&self) -> Option<&[i64]> {
        match self {
            Self::IntArray(values) => Some(values),
            _ => None,
        }
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

/// Serialize a document to compact JSON bytes.
pub fn to_json_bytes(document: &Document) -> Result<Vec<u8>, serde_json::Error> {
    serde_json::to_vec(document)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_serializes_in_field_order() {
        let mut doc = Document::new();
        doc.insert("zeta".to_string(), FieldValue::Int(1));
        doc.insert("alpha".to_string(), "a".into());
        doc.insert("mid".to_string(), FieldValue::IntArray(vec![1, 2]));

        let json = String::from_utf8(to_json_bytes(&doc).unwrap()).unwrap();
        assert_eq!(json, r#"{"alpha":"a","mid":[1,2],"zeta":1}"#);
    }

    #[test]
    fn test_accessors() {
        assert_eq!(FieldValue::Int(3).as_f64(), Some(3.0));
        assert_eq!(FieldValue::Float(0.5).as_i64(), None);
        assert_eq!(FieldValue::from("x").as_str(), Some("x"));
        assert_eq!(
            FieldValue::IntArray(vec![4]).as_int_array(),
            Some(&[4_i64][..])
        );
    }
}
