//! Error types for the workload engine.

use crate::database::DatabaseError;
use crate::keyspace::KeySpaceError;
use thiserror::Error;
use workload_core::ConfigError;

/// Errors that abort a run.
#[derive(Error, Debug)]
pub enum EngineError {
    /// Invalid configuration, detected before any worker starts.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A worker task panicked or was cancelled.
    #[error("Worker task failed: {0}")]
    Worker(String),
}

/// A single failed operation. Counted, never fatal.
#[derive(Error, Debug)]
pub enum OperationError {
    #[error(transparent)]
    KeySpace(#[from] KeySpaceError),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}
