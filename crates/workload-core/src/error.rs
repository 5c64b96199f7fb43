//! Configuration errors.

use thiserror::Error;

/// Fatal configuration problems, detected before any worker starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Operation percentages must add up to exactly 100.
    #[error("Wrong workload configuration: sum of percentages is {0}, expected 100")]
    PercentageSum(u64),

    /// Each indexable field reads a 10-character window of a 32-character key.
    #[error("Too many indexable fields: {fields} (must be less than {max})")]
    TooManyIndexableFields { fields: usize, max: usize },

    /// Queries pick a field from `[0, indexable_fields)`.
    #[error("Query percentage is {0} but there are no indexable fields to query")]
    NoQueryableFields(u32),

    #[error("Worker count must be at least 1")]
    NoWorkers,

    #[error("Target throughput must be greater than zero when set")]
    ZeroThroughput,

    #[error("{name} must be between 0 and 100, got {value}")]
    PercentageOutOfRange { name: &'static str, value: u64 },
}
