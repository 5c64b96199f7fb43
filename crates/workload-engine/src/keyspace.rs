//! Key-space manager.
//!
//! Records live in the index window `(deleted_count, records_created]`. New
//! records extend the window on the right, deletions shrink it from the left,
//! and reads/updates/queries draw from inside it.

use crate::state::RunState;
use rand::Rng;
use std::sync::Arc;
use thiserror::Error;
use workload_core::GeneratorConfig;
use workload_generator::KeyFormat;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeySpaceError {
    #[error("No live records in the key space")]
    Empty,
}

/// How existing keys are drawn from the live window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDistribution {
    Uniform,
    /// The newest `hot_data_percentage`% of live records receive
    /// `hot_access_percentage`% of the draws.
    Skewed {
        hot_data_percentage: u64,
        hot_access_percentage: u64,
    },
}

impl KeyDistribution {
    pub fn from_config(config: &GeneratorConfig) -> Self {
        match config {
            GeneratorConfig::Sized { .. } => KeyDistribution::Uniform,
            GeneratorConfig::Profile {
                hot_data_percentage,
                hot_access_percentage,
                ..
            } => KeyDistribution::Skewed {
                hot_data_percentage: *hot_data_percentage,
                hot_access_percentage: *hot_access_percentage,
            },
        }
    }

    /// Draw a record index from `(deleted, created]`, or `None` when the
    /// window is empty.
    pub fn draw<R: Rng + ?Sized>(&self, deleted: u64, created: u64, rng: &mut R) -> Option<u64> {
        let total = created.checked_sub(deleted).filter(|total| *total > 0)?;

        let offset = match *self {
            KeyDistribution::Uniform => rng.random_range(0..total),
            KeyDistribution::Skewed {
                hot_data_percentage,
                hot_access_percentage,
            } => {
                let hot = total * hot_data_percentage.min(100) / 100;
                let cold = total - hot;
                let wants_hot = rng.random_range(0..100) < hot_access_percentage;
                if (wants_hot && hot > 0) || cold == 0 {
                    cold + rng.random_range(0..hot)
                } else {
                    rng.random_range(0..cold)
                }
            }
        };

        Some(deleted + 1 + offset)
    }
}

/// Derives keys from the shared run counters.
#[derive(Debug, Clone)]
pub struct KeySpace {
    state: Arc<RunState>,
    format: KeyFormat,
    distribution: KeyDistribution,
}

impl KeySpace {
    pub fn new(state: Arc<RunState>, format: KeyFormat, distribution: KeyDistribution) -> Self {
        Self {
            state,
            format,
            distribution,
        }
    }

    /// Key of the record at `index`.
    pub fn key_at(&self, index: u64) -> String {
        self.format.encode(index)
    }

    /// Allocate the next record index and return its key.
    pub async fn new_key(&self) -> String {
        let index = self.state.next_record().await;
        self.key_at(index)
    }

    /// Key of a record that currently exists.
    pub async fn existing_key<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<String, KeySpaceError> {
        let (deleted, created) = self.state.live_range().await;
        let index = self
            .distribution
            .draw(deleted, created, rng)
            .ok_or(KeySpaceError::Empty)?;
        Ok(self.key_at(index))
    }

    /// Key of the oldest live record, removed from the window.
    pub async fn key_for_removal(&self) -> Result<String, KeySpaceError> {
        let index = self
            .state
            .next_removal()
            .await
            .ok_or(KeySpaceError::Empty)?;
        Ok(self.key_at(index))
    }
}
