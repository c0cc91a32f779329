//! Shared state handed to every handler

use std::future::Future;
use std::sync::Arc;
use std::time::{Duration, Instant};
use strain_config::{StrainConfig, WorkloadsConfig};
use strain_execution::ComputePool;
use tracing::{info, warn};

use crate::errors::{RestError, RestResult};
use crate::metrics::{Workload, WorkloadMetrics};

/// Dependencies of the workload handlers. Cloning is cheap.
#[derive(Debug, Clone)]
pub struct AppContext {
    /// Pool every CPU workload runs on
    pub pool: ComputePool,
    /// Defaults and clamps for query parameters
    pub limits: Arc<WorkloadsConfig>,
    pub metrics: Arc<WorkloadMetrics>,
    started_at: Instant,
}

impl AppContext {
    pub fn new(pool: ComputePool, limits: WorkloadsConfig) -> Self {
        Self {
            pool,
            limits: Arc::new(limits),
            metrics: Arc::new(WorkloadMetrics::new()),
            started_at: Instant::now(),
        }
    }

    pub fn from_config(config: &StrainConfig) -> Self {
        Self::new(
            ComputePool::new(&config.execution),
            config.workloads.clone(),
        )
    }

    pub fn uptime(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Await a workload, record it against `workload`, and log the outcome
    pub async fn measure<T, E>(
        &self,
        workload: Workload,
        run: impl Future<Output = Result<T, E>>,
    ) -> RestResult<T>
    where
        E: Into<RestError>,
    {
        let started = Instant::now();
        let outcome = run.await.map_err(Into::into);
        let elapsed = started.elapsed();

        self.metrics.record(workload, elapsed, outcome.is_ok());

        let duration_ms = elapsed.as_millis() as u64;
        match &outcome {
            Ok(_) => info!(workload = workload.as_str(), duration_ms, "Workload served"),
            Err(e) => warn!(workload = workload.as_str(), duration_ms, error = %e, "Workload failed"),
        }

        outcome
    }
}
