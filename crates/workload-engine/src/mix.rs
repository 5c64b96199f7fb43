//! Batches of operation tokens.

use rand::seq::SliceRandom;
use rand::Rng;
use workload_core::{ConfigError, OperationKind, OperationMix};

/// Tokens per batch. Percentages map one-to-one onto token counts.
pub const BATCH_SIZE: usize = 100;

pub type Batch = Vec<OperationKind>;

/// Builds shuffled batches from a validated mix.
#[derive(Debug, Clone)]
pub struct MixBuilder {
    template: Batch,
}

impl MixBuilder {
    pub fn new(mix: &OperationMix) -> Result<Self, ConfigError> {
        mix.validate()?;

        let mut template = Vec::with_capacity(BATCH_SIZE);
        for kind in OperationKind::ALL {
            let count = mix.percentage(kind) as usize;
            template.extend(std::iter::repeat(kind).take(count));
        }
        Ok(Self { template })
    }

    /// A uniformly shuffled batch with each kind exactly `percentage` times.
    pub fn batch<R: Rng + ?Sized>(&self, rng: &mut R) -> Batch {
        let mut batch = self.template.clone();
        batch.shuffle(rng);
        batch
    }
}

/// Validate `mix` and build one shuffled batch.
pub fn build_batch<R: Rng + ?Sized>(mix: &OperationMix, rng: &mut R) -> Result<Batch, ConfigError> {
    Ok(MixBuilder::new(mix)?.batch(rng))
}
