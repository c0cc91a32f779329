//! Bounded dispatch of blocking CPU work

use futures::future::join_all;
use serde::Serialize;
use std::any::Any;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use strain_config::ExecutionConfig;
use strain_core::{accumulate_chunk, partition, ParallelReport};
use tokio::sync::Semaphore;
use tokio::task::JoinError;
use tracing::{debug, warn};

use crate::error::{ExecutionError, ExecutionResult};

const PARALLEL_LABEL: &str = "parallel";

#[derive(Debug, Default)]
struct PoolCounters {
    completed: AtomicU64,
    failed: AtomicU64,
    timed_out: AtomicU64,
}

/// Snapshot of pool activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PoolStats {
    pub capacity: usize,
    pub in_flight: usize,
    pub completed: u64,
    pub failed: u64,
    pub timed_out: u64,
    pub closed: bool,
}

/// Shared handle to the compute pool. Cloning is cheap.
///
/// A job holds one permit from the moment it starts until its closure
/// returns, even when the caller has already given up on it, so the number
/// of busy CPU workloads never exceeds `capacity`.
#[derive(Debug, Clone)]
pub struct ComputePool {
    permits: Arc<Semaphore>,
    capacity: usize,
    job_timeout: Duration,
    counters: Arc<PoolCounters>,
}

impl ComputePool {
    pub fn new(config: &ExecutionConfig) -> Self {
        Self::with_limits(config.compute_threads, config.job_timeout)
    }

    /// Build a pool directly; a zero capacity is raised to one
    pub fn with_limits(capacity: usize, job_timeout: Duration) -> Self {
        let capacity = capacity.max(1);
        Self {
            permits: Arc::new(Semaphore::new(capacity)),
            capacity,
            job_timeout,
            counters: Arc::new(PoolCounters::default()),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn job_timeout(&self) -> Duration {
        self.job_timeout
    }

    /// Run `job` on the blocking pool once a permit is free.
    ///
    /// The timeout covers both the wait for a permit and the job itself.
    pub async fn run<F, T>(&self, label: &'static str, job: F) -> ExecutionResult<T>
    where
        F: FnOnce() -> T + Send + 'static,
        T: Send + 'static,
    {
        let permits = Arc::clone(&self.permits);

        let dispatch = async move {
            let permit = permits
                .acquire_owned()
                .await
                .map_err(|_| ExecutionError::PoolClosed)?;

            tokio::task::spawn_blocking(move || {
                let _permit = permit;
                job()
            })
            .await
            .map_err(|e| join_failure(label, e))
        };

        self.supervise(label, dispatch).await
    }

    /// Fork one blocking task per [`strain_core::ParallelTask`] and join
    /// them in worker-index order.
    ///
    /// The whole fork-join counts as a single job against the pool; the
    /// permit is released when the last chunk returns.
    pub async fn parallel_accumulate(
        &self,
        iterations: u64,
        threads: usize,
    ) -> ExecutionResult<Vec<f64>> {
        let permits = Arc::clone(&self.permits);

        let dispatch = async move {
            let permit = Arc::new(
                permits
                    .acquire_owned()
                    .await
                    .map_err(|_| ExecutionError::PoolClosed)?,
            );

            let handles = partition(iterations, threads).into_iter().map(|task| {
                let permit = Arc::clone(&permit);
                tokio::task::spawn_blocking(move || {
                    let _permit = permit;
                    accumulate_chunk(&task, iterations)
                })
            });

            join_all(handles)
                .await
                .into_iter()
                .map(|joined| joined.map_err(|e| join_failure(PARALLEL_LABEL, e)))
                .collect::<ExecutionResult<Vec<f64>>>()
        };

        self.supervise(PARALLEL_LABEL, dispatch).await
    }

    /// [`Self::parallel_accumulate`] summarised as a report
    pub async fn parallel_report(
        &self,
        iterations: u64,
        threads: usize,
    ) -> ExecutionResult<ParallelReport> {
        let start = Instant::now();
        let results = self.parallel_accumulate(iterations, threads).await?;
        let duration_ns = start.elapsed().as_nanos() as u64;

        Ok(ParallelReport::from_results(
            iterations,
            threads,
            &results,
            duration_ns,
        ))
    }

    /// Refuse new jobs. Jobs already running are unaffected.
    pub fn close(&self) {
        self.permits.close();
    }

    pub fn is_closed(&self) -> bool {
        self.permits.is_closed()
    }

    pub fn stats(&self) -> PoolStats {
        PoolStats {
            capacity: self.capacity,
            in_flight: self
                .capacity
                .saturating_sub(self.permits.available_permits()),
            completed: self.counters.completed.load(Ordering::Relaxed),
            failed: self.counters.failed.load(Ordering::Relaxed),
            timed_out: self.counters.timed_out.load(Ordering::Relaxed),
            closed: self.is_closed(),
        }
    }

    async fn supervise<T>(
        &self,
        label: &'static str,
        dispatch: impl Future<Output = ExecutionResult<T>>,
    ) -> ExecutionResult<T> {
        let started = Instant::now();

        let outcome = match tokio::time::timeout(self.job_timeout, dispatch).await {
            Ok(result) => result,
            Err(_) => Err(ExecutionError::Timeout {
                label,
                timeout: self.job_timeout,
            }),
        };

        let elapsed_ms = started.elapsed().as_millis() as u64;
        match &outcome {
            Ok(_) => {
                self.counters.completed.fetch_add(1, Ordering::Relaxed);
                debug!(workload = label, elapsed_ms, "Workload completed");
            }
            Err(ExecutionError::Timeout { .. }) => {
                self.counters.timed_out.fetch_add(1, Ordering::Relaxed);
                warn!(
                    workload = label,
                    elapsed_ms, "Workload abandoned after timeout, computation continues"
                );
            }
            Err(e) => {
                self.counters.failed.fetch_add(1, Ordering::Relaxed);
                warn!(workload = label, elapsed_ms, error = %e, "Workload failed");
            }
        }

        outcome
    }
}

fn join_failure(label: &'static str, err: JoinError) -> ExecutionError {
    if err.is_panic() {
        ExecutionError::Panicked {
            label,
            message: panic_message(err.into_panic()),
        }
    } else {
        ExecutionError::Cancelled(label)
    }
}

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_capacity_is_raised() {
        let pool = ComputePool::with_limits(0, Duration::from_secs(1));
        assert_eq!(pool.capacity(), 1);
        assert_eq!(pool.stats().in_flight, 0);
    }

    #[test]
    fn test_panic_message_extraction() {
        assert_eq!(panic_message(Box::new("boom")), "boom");
        assert_eq!(panic_message(Box::new(String::from("bang"))), "bang");
        assert_eq!(panic_message(Box::new(7u8)), "unknown panic payload");
    }

    #[test]
    fn test_pool_from_config() {
        let config = ExecutionConfig {
            compute_threads: 3,
            job_timeout: Duration::from_secs(9),
        };
        let pool = ComputePool::new(&config);
        assert_eq!(pool.capacity(), 3);
        assert_eq!(pool.job_timeout(), Duration::from_secs(9));
    }
}
