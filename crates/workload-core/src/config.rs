//! Workload configuration.

use crate::error::ConfigError;
use crate::operation::OperationKind;
use query_catalog::QueryName;
use serde::{Deserialize, Serialize};

/// Exclusive upper bound on indexable fields in the size-driven workload.
///
/// Keys are 32 hex characters and field `i` reads `key[i..i + 10]`.
pub const MAX_INDEXABLE_FIELDS: usize = 20;

/// Declared operation percentages. Must sum to exactly 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OperationMix {
    #[serde(default)]
    pub create_percentage: u32,
    #[serde(default)]
    pub read_percentage: u32,
    #[serde(default)]
    pub update_percentage: u32,
    #[serde(default)]
    pub delete_percentage: u32,
    #[serde(default)]
    pub query_percentage: u32,
}

impl OperationMix {
    /// Create a validated mix.
    pub fn new(
        create: u32,
        read: u32,
        update: u32,
        delete: u32,
        query: u32,
    ) -> Result<Self, ConfigError> {
        let mix = Self {
            create_percentage: create,
            read_percentage: read,
            update_percentage: update,
            delete_percentage: delete,
            query_percentage: query,
        };
        mix.validate()?;
        Ok(mix)
    }

    /// Percentage declared for `kind`.
    pub fn percentage(&self, kind: OperationKind) -> u32 {
        match kind {
            OperationKind::Create => self.create_percentage,
            OperationKind::Read => self.read_percentage,
            OperationKind::Update => self.update_percentage,
            OperationKind::Delete => self.delete_percentage,
            OperationKind::Query => self.query_percentage,
        }
    }

    /// Sum of all five percentages, widened so that no input can wrap.
    pub fn total(&self) -> u64 {
        OperationKind::ALL
            .iter()
            .map(|kind| u64::from(self.percentage(*kind)))
            .sum()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.total() {
            100 => Ok(()),
            other => Err(ConfigError::PercentageSum(other)),
        }
    }
}

/// Which value generator (and key encoding) the workload uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeneratorConfig {
    /// `indexable_fields` short fields plus filler up to `value_size` bytes.
    /// Keys are MD5 digests of the record index.
    Sized {
        #[serde(default = "default_indexable_fields")]
        indexable_fields: usize,
        #[serde(default = "default_value_size")]
        value_size: usize,
    },

    /// Fixed profile fields derived from the key's alphabet.
    /// Keys are 12-digit zero-padded record indexes.
    Profile {
        /// Share of the live key space that is hot, in percent
        #[serde(default)]
        hot_data_percentage: u64,
        /// Share of key draws that go to the hot records, in percent
        #[serde(default)]
        hot_access_percentage: u64,
        /// Catalog queries to draw from (empty = all)
        #[serde(default)]
        queries: Vec<QueryName>,
    },
}

fn default_indexable_fields() -> usize {
    1
}

fn default_value_size() -> usize {
    512
}

fn default_workers() -> usize {
    1
}

fn default_seed() -> u64 {
    42
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig::Sized {
            indexable_fields: default_indexable_fields(),
            value_size: default_value_size(),
        }
    }
}

/// Everything the engine needs to run a workload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Operation percentages
    #[serde(flatten)]
    pub mix: OperationMix,

    /// Total number of operations across all workers
    pub operations: u64,

    /// Aggregate operations per second across all workers (None = unbounded)
    #[serde(default)]
    pub target_throughput: Option<u64>,

    /// Number of concurrent workers
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Seed for the per-worker random number generators
    #[serde(default = "default_seed")]
    pub seed: u64,

    /// Optional wall-clock limit in seconds
    #[serde(default)]
    pub max_duration_secs: Option<u64>,

    /// Value generator selection
    #[serde(default)]
    pub generator: GeneratorConfig,
}

impl WorkloadConfig {
    /// Create a size-driven configuration with defaults for everything else.
    pub fn new(mix: OperationMix, operations: u64) -> Self {
        Self {
            mix,
            operations,
            target_throughput: None,
            workers: default_workers(),
            seed: default_seed(),
            max_duration_secs: None,
            generator: GeneratorConfig::default(),
        }
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_target_throughput(mut self, throughput: Option<u64>) -> Self {
        self.target_throughput = throughput;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_generator(mut self, generator: GeneratorConfig) -> Self {
        self.generator = generator;
        self
    }

    /// Check every constraint that would make the run meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.mix.validate()?;

        if self.workers == 0 {
            return Err(ConfigError::NoWorkers);
        }
        if self.target_throughput == Some(0) {
            return Err(ConfigError::ZeroThroughput);
        }

        match &self.generator {
            GeneratorConfig::Sized {
                indexable_fields, ..
            } => {
                if *indexable_fields >= MAX_INDEXABLE_FIELDS {
                    return Err(ConfigError::TooManyIndexableFields {
                        fields: *indexable_fields,
                        max: MAX_INDEXABLE_FIELDS,
                    });
                }
                if *indexable_fields == 0 && self.mix.query_percentage > 0 {
                    return Err(ConfigError::NoQueryableFields(self.mix.query_percentage));
                }
            }
            GeneratorConfig::Profile {
                hot_data_percentage,
                hot_access_percentage,
                ..
            } => {
                if *hot_data_percentage > 100 {
                    return Err(ConfigError::PercentageOutOfRange {
                        name: "hot_data_percentage",
                        value: *hot_data_percentage,
                    });
                }
                if *hot_access_percentage > 100 {
                    return Err(ConfigError::PercentageOutOfRange {
                        name: "hot_access_percentage",
                        value: *hot_access_percentage,
                    });
                }
            }
        }

        Ok(())
    }
}
