//! Core types for the blurr workload engine.
//!
//! This crate provides the types shared by the generator, the engine and the
//! database backends:
//!
//! - [`OperationKind`] - the five operation tokens a batch is built from
//! - [`Document`] / [`FieldValue`] - record values, ordered by field name
//! - [`WorkloadConfig`] - everything the engine needs to run, validated up front
//! - [`ConfigError`] - fatal configuration problems detected before a run
//!
//! # Architecture
//!
//! ```text
//! query-catalog
//!    │
//! workload-core (this crate)
//!    │
//!    ├─── workload-generator  (keys and documents)
//!    │
//!    └─── workload-engine     (key space, mix, executor)
//!            │
//!            ├─── workload-mongodb
//!            └─── tuq-client
//! ```

pub mod config;
pub mod error;
pub mod operation;
pub mod values;

pub use config::{GeneratorConfig, OperationMix, WorkloadConfig, MAX_INDEXABLE_FIELDS};
pub use error::ConfigError;
pub use operation::OperationKind;
pub use values::{Document, FieldValue};
