//! Record values to BSON.

use bson::{Bson, Document as BsonDocument};
use workload_core::{Document, FieldValue};

pub fn field_to_bson(value: &FieldValue) -> Bson {
    match value {
        FieldValue::Int(v) => Bson::Int64(*v),
        FieldValue::Float(v) => Bson::Double(*v),
        FieldValue::Text(v) => Bson::String(v.clone()),
        FieldValue::IntArray(values) => {
            Bson::Array(values.iter().map(|v| Bson::Int64(*v)).collect())
        }
    }
}

/// Build the stored document for `key`, with the key as `_id`.
pub fn to_bson_document(key: &str, document: &Document) -> BsonDocument {
    let mut doc = BsonDocument::new();
    doc.insert("_id", key);
    for (name, value) in document {
        doc.insert(name.as_str(), field_to_bson(value));
    }
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_bson_document() {
        let mut document = Document::new();
        document.insert("city".to_string(), FieldValue::from("abcdef"));
        document.insert("coins".to_string(), FieldValue::Float(12.5));
        document.insert("year".to_string(), FieldValue::Int(1990));
        document.insert("gmtime".to_string(), FieldValue::IntArray(vec![1970, 1]));

        let doc = to_bson_document("000000000001", &document);
        assert_eq!(doc.get_str("_id").unwrap(), "000000000001");
        assert_eq!(doc.get_str("city").unwrap(), "abcdef");
        assert_eq!(doc.get_f64("coins").unwrap(), 12.5);
        assert_eq!(doc.get_i64("year").unwrap(), 1990);
        assert_eq!(
            doc.get_array("gmtime").unwrap(),
            &vec![Bson::Int64(1970), Bson::Int64(1)]
        );
        assert_eq!(doc.keys().next().map(String::as_str), Some("_id"));
    }
}
