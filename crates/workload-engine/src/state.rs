//! Run-wide counters shared by all workers.

use serde::Serialize;
use std::collections::BTreeMap;
use tokio::sync::Mutex;
use workload_core::OperationKind;

#[derive(Debug, Default)]
struct Counters {
    operations_completed: u64,
    records_created: u64,
    deleted_count: u64,
    operations_by_kind: BTreeMap<OperationKind, u64>,
    errors_by_kind: BTreeMap<OperationKind, u64>,
    errors_total: u64,
}

/// Point-in-time copy of the run counters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunSnapshot {
    pub operations_completed: u64,
    pub records_created: u64,
    pub deleted_count: u64,
    pub operations_by_kind: BTreeMap<OperationKind, u64>,
    pub errors_by_kind: BTreeMap<OperationKind, u64>,
    pub errors_total: u64,
}

impl RunSnapshot {
    /// Records created and not yet deleted.
    pub fn live_records(&self) -> u64 {
        self.records_created - self.deleted_count
    }
}

/// Shared run state.
///
/// All counters sit behind one lock. Each method is a single critical
/// section, so claims and counter increments are atomic with respect to
/// each other. Invariant: `deleted_count <= records_created`.
#[derive(Debug)]
pub struct RunState {
    budget: u64,
    counters: Mutex<Counters>,
}

impl RunState {
    /// Create a run state with a total operation budget.
    pub fn new(budget: u64) -> Self {
        Self {
            budget,
            counters: Mutex::new(Counters::default()),
        }
    }

    pub fn budget(&self) -> u64 {
        self.budget
    }

    /// Whether every operation in the budget has been claimed.
    pub async fn is_exhausted(&self) -> bool {
        self.counters.lock().await.operations_completed >= self.budget
    }

    /// Claim one unit of the operation budget for `kind`.
    ///
    /// Returns `false` once the budget is exhausted; the caller must not
    /// issue the operation in that case.
    pub async fn claim(&self, kind: OperationKind) -> bool {
        let mut counters = self.counters.lock().await;
        if counters.operations_completed >= self.budget {
            return false;
        }
        counters.operations_completed += 1;
        *counters.operations_by_kind.entry(kind).or_default() += 1;
        true
    }

    /// Advance the created counter and return the new record index.
    pub async fn next_record(&self) -> u64 {
        let mut counters = self.counters.lock().await;
        counters.records_created += 1;
        counters.records_created
    }

    /// Advance the deleted counter and return the index of the record to
    /// remove, or `None` when no live record exists.
    pub async fn next_removal(&self) -> Option<u64> {
        let mut counters = self.counters.lock().await;
        if counters.deleted_count >= counters.records_created {
            return None;
        }
        counters.deleted_count += 1;
        Some(counters.deleted_count)
    }

    /// Current `(deleted_count, records_created)`.
    pub async fn live_range(&self) -> (u64, u64) {
        let counters = self.counters.lock().await;
        (counters.deleted_count, counters.records_created)
    }

    pub async fn live_records(&self) -> u64 {
        let (deleted, created) = self.live_range().await;
        created - deleted
    }

    /// Count a failed operation against its kind and the total.
    pub async fn record_error(&self, kind: OperationKind) {
        let mut counters = self.counters.lock().await;
        *counters.errors_by_kind.entry(kind).or_default() += 1;
        counters.errors_total += 1;
    }

    pub async fn snapshot(&self) -> RunSnapshot {
        let counters = self.counters.lock().await;
        RunSnapshot {
            operations_completed: counters.operations_completed,
            records_created: counters.records_created,
            deleted_count: counters.deleted_count,
            operations_by_kind: counters.operations_by_kind.clone(),
            errors_by_kind: counters.errors_by_kind.clone(),
            errors_total: counters.errors_total,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_claim_stops_at_budget() {
        let state = RunState::new(3);
        assert!(state.claim(OperationKind::Create).await);
        assert!(state.claim(OperationKind::Read).await);
        assert!(state.claim(OperationKind::Read).await);
        assert!(!state.claim(OperationKind::Read).await);
        assert!(state.is_exhausted().await);

        let snapshot = state.snapshot().await;
        assert_eq!(snapshot.operations_completed, 3);
        assert_eq!(snapshot.operations_by_kind[&OperationKind::Read], 2);
    }

    #[tokio::test]
    async fn test_removal_never_passes_created() {
        let state = RunState::new(10);
        assert_eq!(state.next_removal().await, None);
        assert_eq!(state.next_record().await, 1);
        assert_eq!(state.next_record().await, 2);
        assert_eq!(state.next_removal().await, Some(1));
        assert_eq!(state.next_removal().await, Some(2));
        assert_eq!(state.next_removal().await, None);
        assert_eq!(state.live_range().await, (2, 2));
    }

    #[tokio::test]
    async fn test_errors_by_kind_and_total() {
        let state = RunState::new(10);
        state.record_error(OperationKind::Update).await;
        state.record_error(OperationKind::Update).await;
        state.record_error(OperationKind::Query).await;

        let snapshot = state.snapshot().await;
        assert_eq!(snapshot.errors_by_kind[&OperationKind::Update], 2);
        assert_eq!(snapshot.errors_by_kind[&OperationKind::Query], 1);
        assert_eq!(snapshot.errors_total, 3);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_claims_never_overshoot() {
        let state = Arc::new(RunState::new(1_000));
        let mut handles = Vec::new();
        for _ in 0..8 {
            let state = state.clone();
            handles.push(tokio::spawn(async move {
                let mut claimed = 0u64;
                while state.claim(OperationKind::Create).await {
                    state.next_record().await;
                    claimed += 1;
                }
                claimed
            }));
        }

        let mut total = 0;
        for handle in handles {
            total += handle.await.unwrap();
        }
        assert_eq!(total, 1_000);
        assert_eq!(state.snapshot().await.records_created, 1_000);
    }
}
