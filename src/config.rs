//! Configuration file loading.
//!
//! A config file has a `database` section (where to send operations) and a
//! `workload` section (what to send). YAML is the default format; files
//! ending in `.toml` are parsed as TOML.
//!
//! ```yaml
//! database:
//!   kind: tuq
//!   addresses: ["http://127.0.0.1:8093/"]
//!   bucket: default
//! workload:
//!   create_percentage: 20
//!   read_percentage: 60
//!   update_percentage: 10
//!   delete_percentage: 5
//!   query_percentage: 5
//!   operations: 100000
//!   workers: 8
//!   target_throughput: 5000
//!   generator:
//!     type: profile
//!     hot_data_percentage: 10
//!     hot_access_percentage: 90
//! ```

pub mod duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;
use workload_core::WorkloadConfig;

/// Backend that receives the workload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatabaseKind {
    /// In-process HashMap store
    #[default]
    Memory,
    /// Accepts everything, stores nothing
    Noop,
    /// MongoDB collection
    Mongodb,
    /// N1QL query service, with key-value operations on `kv_backend`
    Tuq,
}

/// Key-value store behind a tuq query service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KvBackend {
    #[default]
    Memory,
    Mongodb,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    #[serde(default)]
    pub kind: DatabaseKind,

    /// MongoDB connection strings or query service base URLs
    #[serde(default)]
    pub addresses: Vec<String>,

    /// Bucket / collection holding the records
    #[serde(default = "default_bucket")]
    pub bucket: String,

    /// MongoDB database name
    #[serde(default = "default_database")]
    pub database: String,

    #[serde(default)]
    pub kv_backend: KvBackend,

    /// MongoDB connection string for a mongodb `kv_backend`
    #[serde(default)]
    pub kv_address: Option<String>,
}

fn default_bucket() -> String {
    "default".to_string()
}

fn default_database() -> String {
    "blurr".to_string()
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            kind: DatabaseKind::default(),
            addresses: Vec::new(),
            bucket: default_bucket(),
            database: default_database(),
            kv_backend: KvBackend::default(),
            kv_address: None,
        }
    }
}

impl DatabaseConfig {
    pub fn validate(&self) -> anyhow::Result<()> {
        match self.kind {
            DatabaseKind::Memory | DatabaseKind::Noop => {}
            DatabaseKind::Mongodb => {
                if self.addresses.is_empty() {
                    anyhow::bail!("mongodb database requires a connection string in `addresses`");
                }
            }
            DatabaseKind::Tuq => {
                if self.addresses.is_empty() {
                    anyhow::bail!("tuq database requires at least one query endpoint in `addresses`");
                }
                if self.kv_backend == KvBackend::Mongodb && self.kv_address.is_none() {
                    anyhow::bail!("mongodb kv_backend requires `kv_address`");
                }
            }
        }
        Ok(())
    }
}

/// Full contents of a config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub database: DatabaseConfig,
    pub workload: WorkloadConfig,
}

impl FileConfig {
    /// Load and parse a config file, picking the format from the extension.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml(&content),
            _ => Self::from_yaml(&content),
        }
        .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    pub fn from_yaml(yaml: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Check both sections.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.workload
            .validate()
            .context("Invalid workload configuration")?;
        self.database
            .validate()
            .context("Invalid database configuration")
    }
}
