//! Worker loop and run orchestration.

use crate::database::Database;
use crate::error::{EngineError, OperationError};
use crate::keyspace::{KeyDistribution, KeySpace};
use crate::mix::{Batch, MixBuilder};
use crate::query::QuerySelector;
use crate::report::RunReport;
use crate::state::RunState;
use crate::throttle::Throttle;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinSet;
use tokio::time::Instant;
use tracing::{debug, error, info};
use workload_core::{OperationKind, WorkloadConfig};
use workload_generator::{DocumentGenerator, Generator};

/// Derive a worker's RNG seed from the run seed.
pub fn worker_seed(seed: u64, worker: usize) -> u64 {
    seed.wrapping_add((worker as u64).wrapping_mul(0x9E3779B97F4A7C15))
}

/// Runs a validated workload against a database.
pub struct WorkloadRunner<D: Database + 'static> {
    config: WorkloadConfig,
    mix: MixBuilder,
    database: Arc<D>,
    progress_interval: Option<Duration>,
}

impl<D: Database + 'static> WorkloadRunner<D> {
    pub fn new(config: WorkloadConfig, database: Arc<D>) -> Result<Self, EngineError> {
        config.validate()?;
        let mix = MixBuilder::new(&config.mix)?;
        Ok(Self {
            config,
            mix,
            database,
            progress_interval: None,
        })
    }

    /// Log a progress line every `interval` while the run is active.
    ///
    /// A zero interval disables progress logging.
    pub fn with_progress_interval(mut self, interval: Duration) -> Self {
        self.progress_interval = Some(interval).filter(|interval| !interval.is_zero());
        self
    }

    pub async fn run(self) -> Result<RunReport, EngineError> {
        let config = &self.config;
        let state = Arc::new(RunState::new(config.operations));
        let generator = Generator::from_config(&config.generator);
        let keys = KeySpace::new(
            state.clone(),
            generator.key_format(),
            KeyDistribution::from_config(&config.generator),
        );
        let selector = QuerySelector::from_config(&config.generator);
        let throttle = Throttle::new(config.target_throughput, config.workers);

        let started = Instant::now();
        let deadline = config
            .max_duration_secs
            .map(|secs| started + Duration::from_secs(secs));

        info!(
            "Starting workload: {} operations, {} workers, target throughput {}",
            config.operations,
            config.workers,
            config
                .target_throughput
                .map(|t| format!("{t} ops/sec"))
                .unwrap_or_else(|| "unbounded".to_string())
        );

        let progress = self
            .progress_interval
            .map(|interval| spawn_progress_logger(state.clone(), interval));

        let mut tasks = JoinSet::new();
        for id in 0..config.workers {
            let worker = Worker {
                id,
                rng: StdRng::seed_from_u64(worker_seed(config.seed, id)),
                state: state.clone(),
                keys: keys.clone(),
                mix: self.mix.clone(),
                generator: generator.clone(),
                selector: selector.clone(),
                database: self.database.clone(),
                throttle,
                deadline,
            };
            tasks.spawn(async move {
                let id = worker.id;
                worker.run().await;
                id
            });
        }

        let mut failure = None;
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok(id) => debug!(worker = id, "Worker done"),
                Err(e) => {
                    error!("Worker task failed: {e}");
                    failure.get_or_insert_with(|| e.to_string());
                }
            }
        }

        if let Some(handle) = progress {
            handle.abort();
        }

        if let Some(reason) = failure {
            return Err(EngineError::Worker(reason));
        }

        let snapshot = state.snapshot().await;
        let time_limited = snapshot.operations_completed < config.operations;
        let report = RunReport::new(
            snapshot,
            started.elapsed(),
            time_limited,
            config.workers,
            config.target_throughput,
        );

        info!(
            "Workload finished: {} operations, {} errors in {:.2}s",
            report.operations_completed,
            report.errors_total,
            report.duration.as_secs_f64()
        );
        Ok(report)
    }
}

/// Validate `config` and run it to completion.
pub async fn run_workload<D: Database + 'static>(
    config: WorkloadConfig,
    database: Arc<D>,
) -> Result<RunReport, EngineError> {
    WorkloadRunner::new(config, database)?.run().await
}

fn spawn_progress_logger(state: Arc<RunState>, interval: Duration) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        // first tick completes immediately
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let snapshot = state.snapshot().await;
            info!(
                "Progress: {}/{} operations, {} live records, {} errors",
                snapshot.operations_completed,
                state.budget(),
                snapshot.live_records(),
                snapshot.errors_total
            );
        }
    })
}

struct Worker<D: Database> {
    id: usize,
    rng: StdRng,
    state: Arc<RunState>,
    keys: KeySpace,
    mix: MixBuilder,
    generator: Generator,
    selector: QuerySelector,
    database: Arc<D>,
    throttle: Throttle,
    deadline: Option<Instant>,
}

impl<D: Database> Worker<D> {
    async fn run(mut self) {
        debug!(worker = self.id, "Worker running");
        loop {
            if self.deadline_passed() || self.state.is_exhausted().await {
                break;
            }

            let started = Instant::now();
            let batch = self.mix.batch(&mut self.rng);
            let issued = self.run_batch(batch).await;
            let elapsed = started.elapsed();

            let pause = self.throttle.pause_after(elapsed).map(|pause| match self.deadline {
                Some(deadline) => pause.min(deadline.saturating_duration_since(Instant::now())),
                None => pause,
            });
            match pause {
                Some(pause) => {
                    debug!(
                        worker = self.id,
                        issued,
                        "Batch took {elapsed:?}, sleeping {pause:?}"
                    );
                    tokio::time::sleep(pause).await;
                }
                None => debug!(worker = self.id, issued, "Batch took {elapsed:?}"),
            }
        }
    }

    /// Issue the batch until it ends or the budget runs out. Returns the
    /// number of operations claimed.
    async fn run_batch(&mut self, mut batch: Batch) -> usize {
        let mut issued = 0;
        for i in 0..batch.len() {
            if self.deadline_passed() {
                break;
            }

            if batch[i].needs_live_record() && self.state.live_records().await == 0 {
                swap_in_create(&mut batch, i);
            }

            let kind = batch[i];
            if !self.state.claim(kind).await {
                break;
            }
            issued += 1;

            if let Err(e) = self.execute(kind).await {
                debug!(worker = self.id, "{kind} failed: {e}");
                self.state.record_error(kind).await;
            }
        }
        issued
    }

    async fn execute(&mut self, kind: OperationKind) -> Result<(), OperationError> {
        match kind {
            OperationKind::Create => {
                let key = self.keys.new_key().await;
                let value = self.generator.generate(&key);
                self.database.create(&key, &value).await?;
            }
            OperationKind::Read => {
                let key = self.keys.existing_key(&mut self.rng).await?;
                self.database.read(&key).await?;
            }
            OperationKind::Update => {
                let key = self.keys.existing_key(&mut self.rng).await?;
                let value = self.generator.generate(&key);
                self.database.update(&key, &value).await?;
            }
            OperationKind::Delete => {
                let key = self.keys.key_for_removal().await?;
                self.database.delete(&key).await?;
            }
            OperationKind::Query => {
                let query = self.selector.select(&self.keys, &mut self.rng).await?;
                self.database.query(&query).await?;
            }
        }
        Ok(())
    }

    fn deadline_passed(&self) -> bool {
        self.deadline.is_some_and(|deadline| Instant::now() >= deadline)
    }
}

/// Move the next Create after position `i` into position `i`.
///
/// Leaves the batch untouched when no Create follows, so counts per kind
/// never change.
fn swap_in_create(batch: &mut Batch, i: usize) {
    if let Some(offset) = batch[i + 1..]
        .iter()
        .position(|kind| *kind == OperationKind::Create)
    {
        batch.swap(i, i + 1 + offset);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_in_create_moves_next_create() {
        use OperationKind::*;
        let mut batch = vec![Read, Delete, Create, Read, Create];
        swap_in_create(&mut batch, 0);
        assert_eq!(batch, vec![Create, Delete, Read, Read, Create]);

        swap_in_create(&mut batch, 1);
        assert_eq!(batch, vec![Create, Create, Read, Read, Delete]);
    }

    #[test]
    fn test_swap_in_create_without_create_is_noop() {
        use OperationKind::*;
        let mut batch = vec![Read, Update, Delete];
        swap_in_create(&mut batch, 1);
        assert_eq!(batch, vec![Read, Update, Delete]);
    }

    #[tokio::test]
    async fn test_zero_progress_interval_disables_logger() {
        use crate::memory::NoopDatabase;
        use workload_core::OperationMix;

        let config = WorkloadConfig::new(OperationMix::new(100, 0, 0, 0, 0).unwrap(), 50);
        let runner = WorkloadRunner::new(config.clone(), Arc::new(NoopDatabase))
            .unwrap()
            .with_progress_interval(Duration::ZERO);
        assert_eq!(runner.progress_interval, None);
        assert_eq!(runner.run().await.unwrap().operations_completed, 50);

        let runner = WorkloadRunner::new(config, Arc::new(NoopDatabase))
            .unwrap()
            .with_progress_interval(Duration::from_secs(5));
        assert_eq!(runner.progress_interval, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_worker_seeds_differ() {
        assert_eq!(worker_seed(42, 0), 42);
        assert_ne!(worker_seed(42, 1), worker_seed(42, 2));
    }
}
