//! Workload engine for blurr.
//!
//! The engine drives a configurable mix of create/read/update/delete/query
//! operations against any [`Database`] at a controlled throughput.
//!
//! # Architecture
//!
//! ```text
//!                 WorkloadRunner
//!                       │ spawns N workers (one StdRng each)
//!                       ▼
//! ┌────────────────────────────────────────────────┐
//! │ Worker loop                                    │
//! │   MixBuilder ──► Batch of 100 kinds (shuffled) │
//! │   for each kind:                               │
//! │     RunState::claim      (one budget unit)     │
//! │     KeySpace             (new/existing/remove) │
//! │     Generator / QuerySelector                  │
//! │     Database::{create,read,update,delete,query}│
//! │   Throttle ──► sleep the batch shortfall       │
//! └────────────────────────────────────────────────┘
//!                       │
//!                       ▼
//!                   RunReport
//! ```
//!
//! `RunState` is the only state shared between workers. Every
//! read-then-increment on it happens under a single lock, so two workers
//! never derive the same new key, never delete the same record, and never
//! overshoot the operation budget.
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use workload_core::{OperationMix, WorkloadConfig};
//! use workload_engine::{run_workload, InMemoryDatabase};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let mix = OperationMix::new(20, 70, 5, 5, 0).unwrap();
//! let config = WorkloadConfig::new(mix, 1_000);
//! let report = run_workload(config, Arc::new(InMemoryDatabase::new()))
//!     .await
//!     .unwrap();
//! assert_eq!(report.operations_completed, 1_000);
//! # }
//! ```

pub mod database;
pub mod error;
pub mod executor;
pub mod keyspace;
pub mod memory;
pub mod mix;
pub mod query;
pub mod report;
pub mod state;
pub mod throttle;

pub use database::{Database, DatabaseError};
pub use error::{EngineError, OperationError};
pub use executor::{run_workload, WorkloadRunner};
pub use keyspace::{KeyDistribution, KeySpace, KeySpaceError};
pub use memory::{InMemoryDatabase, NoopDatabase};
pub use mix::{Batch, MixBuilder, BATCH_SIZE};
pub use query::QuerySelector;
pub use report::RunReport;
pub use state::{RunSnapshot, RunState};
pub use throttle::Throttle;

pub use query_catalog::Query;
