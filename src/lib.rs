//! blurr
//!
//! A synthetic load generator for document databases. A workload is a mix of
//! create, read, update, delete and query operations issued by concurrent
//! workers at a target throughput.
//!
//! # Crates
//!
//! - `workload_core` - configuration, operation kinds and record values
//! - `workload_generator` - deterministic keys and documents
//! - `query_catalog` - named query shapes and their N1QL renderings
//! - `workload_engine` - key space, batches, throttled workers, run report
//! - `tuq_client` - N1QL REST query service backend
//! - `workload_mongodb` - MongoDB backend
//!
//! # CLI Usage
//!
//! ```bash
//! # Run a workload described in a config file
//! blurr run --config workload.yaml --workers 16 --throughput 20000
//!
//! # Check a config and print one sample batch
//! blurr validate --config workload.yaml
//!
//! # Show the key and document for record 42
//! blurr sample --config workload.yaml --index 42
//! ```

use clap::Parser;
use workload_core::WorkloadConfig;

pub mod config;
pub mod run;

pub use config::{DatabaseConfig, DatabaseKind, FileConfig, KvBackend};

/// Command-line overrides for the `workload` section of a config file.
#[derive(Parser, Clone, Debug, Default)]
pub struct WorkloadOverrides {
    /// Number of concurrent workers
    #[arg(long, env = "BLURR_WORKERS")]
    pub workers: Option<usize>,

    /// Total number of operations
    #[arg(long, env = "BLURR_OPERATIONS")]
    pub operations: Option<u64>,

    /// Aggregate target throughput in operations per second
    #[arg(long, env = "BLURR_THROUGHPUT")]
    pub throughput: Option<u64>,

    /// Seed for the worker random number generators
    #[arg(long, env = "BLURR_SEED")]
    pub seed: Option<u64>,

    /// Stop after this long even if operations remain (e.g. "30s", "5m", "1h")
    #[arg(long, env = "BLURR_MAX_DURATION")]
    pub max_duration: Option<String>,
}

impl WorkloadOverrides {
    /// Apply every override that was given.
    pub fn apply(&self, workload: &mut WorkloadConfig) -> anyhow::Result<()> {
        if let Some(workers) = self.workers {
            workload.workers = workers;
        }
        if let Some(operations) = self.operations {
            workload.operations = operations;
        }
        if let Some(throughput) = self.throughput {
            workload.target_throughput = Some(throughput);
        }
        if let Some(seed) = self.seed {
            workload.seed = seed;
        }
        if let Some(max_duration) = &self.max_duration {
            let duration = config::duration::parse_duration(max_duration)?;
            workload.max_duration_secs = Some(duration.as_secs());
        }
        Ok(())
    }
}
