//! N1QL query client for blurr.
//!
//! Queries are rendered from the catalog and POSTed as plain text to a query
//! service endpoint picked at random per request. Key-value operations go to
//! an inner [`Database`](workload_engine::Database).
//!
//! ```text
//!   TuqDatabase
//!     ├── create/read/update/delete ──► inner Database
//!     └── query ──► Query::render(bucket) ──► RestClient::execute
//!                                               POST {address}query
//! ```

pub mod client;
pub mod database;
pub mod error;

pub use client::{RestClient, MAX_IDLE_PER_HOST};
pub use database::TuqDatabase;
pub use error::TransportError;
