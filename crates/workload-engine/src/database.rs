//! Database capability consumed by the engine.

use query_catalog::Query;
use thiserror::Error;
use workload_core::Document;

/// Any failure reported by a database backend.
///
/// The engine counts these per operation kind and never inspects them
/// further; the variants exist for logging and for backend tests.
#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Record already exists: {0}")]
    AlreadyExists(String),

    #[error("Unsupported query: {0}")]
    Unsupported(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Backend error: {0}")]
    Backend(String),
}

/// Operations a workload issues against a document store.
///
/// Implementations must be shareable across workers. The engine calls them
/// at most once per logical operation and never retries.
///
/// ```ignore
/// pub async fn drive<D: Database>(db: &D, key: &str, doc: &Document) {
///     if db.create(key, doc).await.is_err() {
///         // counted, not fatal
///     }
/// }
/// ```
#[async_trait::async_trait]
pub trait Database: Send + Sync {
    /// Insert a new record.
    async fn create(&self, key: &str, value: &Document) -> Result<(), DatabaseError>;

    /// Fetch a record by key.
    async fn read(&self, key: &str) -> Result<(), DatabaseError>;

    /// Replace an existing record.
    async fn update(&self, key: &str, value: &Document) -> Result<(), DatabaseError>;

    /// Remove a record by key.
    async fn delete(&self, key: &str) -> Result<(), DatabaseError>;

    /// Run a field lookup or catalog query.
    async fn query(&self, query: &Query) -> Result<(), DatabaseError>;
}
