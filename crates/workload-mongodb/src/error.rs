//! Error types for the MongoDB backend.

use thiserror::Error;
use workload_engine::DatabaseError;

#[derive(Error, Debug)]
pub enum MongoError {
    /// MongoDB connection or command error.
    #[error("MongoDB error: {0}")]
    MongoDB(#[from] mongodb::error::Error),
}

impl From<MongoError> for DatabaseError {
    fn from(e: MongoError) -> Self {
        DatabaseError::Backend(e.to_string())
    }
}
