//! Per-worker throughput control.

use crate::mix::BATCH_SIZE;
use std::time::Duration;

/// Paces one worker so that all workers together approach the target rate.
///
/// Each worker owns `1 / workers` of the target, so its ideal batch takes
/// `BATCH_SIZE * workers / target` seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Throttle {
    batch_target: Option<Duration>,
}

impl Throttle {
    pub fn new(target_throughput: Option<u64>, workers: usize) -> Self {
        let batch_target = target_throughput
            .filter(|target| *target > 0)
            .map(|target| {
                Duration::from_secs_f64(BATCH_SIZE as f64 * workers as f64 / target as f64)
            });
        Self { batch_target }
    }

    pub fn unbounded() -> Self {
        Self { batch_target: None }
    }

    pub fn batch_target(&self) -> Option<Duration> {
        self.batch_target
    }

    /// How long to sleep after a batch that took `elapsed`.
    pub fn pause_after(&self, elapsed: Duration) -> Option<Duration> {
        self.batch_target?
            .checked_sub(elapsed)
            .filter(|pause| !pause.is_zero())
    }
}
