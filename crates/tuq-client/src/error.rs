//! Transport errors.

use thiserror::Error;
use workload_engine::DatabaseError;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("No query endpoints configured")]
    NoEndpoints,

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Query endpoint {uri} returned status {status}")]
    Status { uri: String, status: u16 },
}

impl From<TransportError> for DatabaseError {
    fn from(e: TransportError) -> Self {
        DatabaseError::Transport(e.to_string())
    }
}
