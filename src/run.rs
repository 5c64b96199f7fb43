//! Wiring a config file to a database backend and the engine.

use crate::config::{DatabaseKind, FileConfig, KvBackend};
use anyhow::Context;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tuq_client::{RestClient, TuqDatabase};
use workload_core::{Document, WorkloadConfig};
use workload_engine::{Batch, Database, MixBuilder, RunReport, WorkloadRunner};
use workload_generator::{DocumentGenerator, Generator};
use workload_mongodb::MongoDatabase;

/// Connect to the configured database and run the workload.
pub async fn run_workload(
    config: FileConfig,
    progress_interval: Option<Duration>,
) -> anyhow::Result<RunReport> {
    config.validate()?;
    let FileConfig { database, workload } = config;

    info!(
        "Running workload against {:?} (bucket: {})",
        database.kind, database.bucket
    );

    match database.kind {
        DatabaseKind::Memory => {
            let db = workload_engine::InMemoryDatabase::new();
            execute(db, workload, progress_interval).await
        }
        DatabaseKind::Noop => {
            execute(workload_engine::NoopDatabase, workload, progress_interval).await
        }
        DatabaseKind::Mongodb => {
            let address = database
                .addresses
                .first()
                .context("mongodb database requires a connection string")?;
            let db = MongoDatabase::connect(address, &database.database, &database.bucket)
                .await
                .context("Failed to connect to MongoDB")?;
            execute(db, workload, progress_interval).await
        }
        DatabaseKind::Tuq => {
            let client = RestClient::new(&database.addresses)
                .context("Failed to create query service client")?;
            match database.kv_backend {
                KvBackend::Memory => {
                    let kv = workload_engine::InMemoryDatabase::new();
                    let db = TuqDatabase::new(client, kv, database.bucket);
                    execute(db, workload, progress_interval).await
                }
                KvBackend::Mongodb => {
                    let address = database
                        .kv_address
                        .as_deref()
                        .context("mongodb kv_backend requires `kv_address`")?;
                    let kv = MongoDatabase::connect(address, &database.database, &database.bucket)
                        .await
                        .context("Failed to connect to MongoDB key-value backend")?;
                    let db = TuqDatabase::new(client, kv, database.bucket);
                    execute(db, workload, progress_interval).await
                }
            }
        }
    }
}

async fn execute<D: Database + 'static>(
    db: D,
    workload: WorkloadConfig,
    progress_interval: Option<Duration>,
) -> anyhow::Result<RunReport> {
    let mut runner = WorkloadRunner::new(workload, Arc::new(db))?;
    if let Some(interval) = progress_interval {
        runner = runner.with_progress_interval(interval);
    }
    Ok(runner.run().await?)
}

/// One batch as the first worker would draw it.
pub fn sample_batch(workload: &WorkloadConfig) -> anyhow::Result<Batch> {
    let mix = MixBuilder::new(&workload.mix)?;
    let mut rng = StdRng::seed_from_u64(workload_engine::executor::worker_seed(workload.seed, 0));
    Ok(mix.batch(&mut rng))
}

/// Key and document of the record at `index`.
pub fn sample_record(workload: &WorkloadConfig, index: u64) -> (String, Document) {
    let generator = Generator::from_config(&workload.generator);
    let key = generator.key_format().encode(index);
    let document = generator.generate(&key);
    (key, document)
}
