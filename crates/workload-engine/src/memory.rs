//! Databases that live entirely in process.

use crate::database::{Database, DatabaseError};
use query_catalog::Query;
use std::collections::HashMap;
use tokio::sync::Mutex;
use workload_core::Document;

/// HashMap-backed store with strict existence checks.
#[derive(Debug, Default)]
pub struct InMemoryDatabase {
    records: Mutex<HashMap<String, Document>>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.records.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.lock().await.is_empty()
    }

    pub async fn get(&self, key: &str) -> Option<Document> {
        self.records.lock().await.get(key).cloned()
    }
}

#[async_trait::async_trait]
impl Database for InMemoryDatabase {
    async fn create(&self, key: &str, value: &Document) -> Result<(), DatabaseError> {
        let mut records = self.records.lock().await;
        if records.contains_key(key) {
            return Err(DatabaseError::AlreadyExists(key.to_string()));
        }
        records.insert(key.to_string(), value.clone());
        Ok(())
    }

    async fn read(&self, key: &str) -> Result<(), DatabaseError> {
        let records = self.records.lock().await;
        records
            .get(key)
            .map(|_| ())
            .ok_or_else(|| DatabaseError::NotFound(key.to_string()))
    }

    async fn update(&self, key: &str, value: &Document) -> Result<(), DatabaseError> {
        let mut records = self.records.lock().await;
        match records.get_mut(key) {
            Some(existing) => {
                *existing = value.clone();
                Ok(())
            }
            None => Err(DatabaseError::NotFound(key.to_string())),
        }
    }

    async fn delete(&self, key: &str) -> Result<(), DatabaseError> {
        let mut records = self.records.lock().await;
        records
            .remove(key)
            .map(|_| ())
            .ok_or_else(|| DatabaseError::NotFound(key.to_string()))
    }

    async fn query(&self, _query: &Query) -> Result<(), DatabaseError> {
        Ok(())
    }
}

/// Accepts every operation and stores nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopDatabase;

#[async_trait::async_trait]
impl Database for NoopDatabase {
    async fn create(&self, _key: &str, _value: &Document) -> Result<(), DatabaseError> {
        Ok(())
    }

    async fn read(&self, _key: &str) -> Result<(), DatabaseError> {
        Ok(())
    }

    async fn update(&self, _key: &str, _value: &Document) -> Result<(), DatabaseError> {
        Ok(())
    }

    async fn delete(&self, _key: &str) -> Result<(), DatabaseError> {
        Ok(())
    }

    async fn query(&self, _query: &Query) -> Result<(), DatabaseError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use workload_core::FieldValue;

    fn doc(value: &str) -> Document {
        let mut doc = Document::new();
        doc.insert("field0".to_string(), FieldValue::from(value));
        doc
    }

    #[tokio::test]
    async fn test_create_rejects_duplicates() {
        let db = InMemoryDatabase::new();
        db.create("a", &doc("1")).await.unwrap();
        assert!(matches!(
            db.create("a", &doc("2")).await,
            Err(DatabaseError::AlreadyExists(_))
        ));
        assert_eq!(db.get("a").await, Some(doc("1")));
    }

    #[tokio::test]
    async fn test_missing_keys_fail() {
        let db = InMemoryDatabase::new();
        assert!(matches!(db.read("x").await, Err(DatabaseError::NotFound(_))));
        assert!(matches!(
            db.update("x", &doc("1")).await,
            Err(DatabaseError::NotFound(_))
        ));
        assert!(matches!(db.delete("x").await, Err(DatabaseError::NotFound(_))));
        assert!(db.is_empty().await);
    }

    #[tokio::test]
    async fn test_update_then_delete() {
        let db = InMemoryDatabase::new();
        db.create("k", &doc("old")).await.unwrap();
        db.update("k", &doc("new")).await.unwrap();
        assert_eq!(db.get("k").await, Some(doc("new")));
        db.read("k").await.unwrap();
        db.delete("k").await.unwrap();
        assert_eq!(db.len().await, 0);
    }
}
