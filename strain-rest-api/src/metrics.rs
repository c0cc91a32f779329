//! Per-workload request counters
//!
//! Lock-free counters updated by every `/cpu/*` request and read by the
//! metrics endpoints.

use serde::Serialize;
use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use strain_execution::PoolStats;

/// The CPU workloads exposed over HTTP
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Workload {
    Primes,
    Sort,
    Matrix,
    Recursive,
    Parallel,
}

impl Workload {
    pub const ALL: [Workload; 5] = [
        Workload::Primes,
        Workload::Sort,
        Workload::Matrix,
        Workload::Recursive,
        Workload::Parallel,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Workload::Primes => "primes",
            Workload::Sort => "sort",
            Workload::Matrix => "matrix",
            Workload::Recursive => "recursive",
            Workload::Parallel => "parallel",
        }
    }

    fn slot(self) -> usize {
        self as usize
    }
}

#[derive(Debug, Default)]
struct Counters {
    requests: AtomicU64,
    failures: AtomicU64,
    duration_ns: AtomicU64,
}

/// Request counters for every workload
#[derive(Debug, Default)]
pub struct WorkloadMetrics {
    counters: [Counters; 5],
}

/// Point-in-time copy of one workload's counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkloadSnapshot {
    pub workload: Workload,
    pub requests: u64,
    pub failures: u64,
    /// Cumulative wall-clock time spent serving requests
    pub duration_ns: u64,
    pub average_duration_ns: u64,
}

impl WorkloadMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, workload: Workload, elapsed: Duration, success: bool) {
        let counters = &self.counters[workload.slot()];
        counters.requests.fetch_add(1, Ordering::Relaxed);
        counters
            .duration_ns
            .fetch_add(elapsed.as_nanos() as u64, Ordering::Relaxed);
        if !success {
            counters.failures.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn snapshot(&self, workload: Workload) -> WorkloadSnapshot {
        let counters = &self.counters[workload.slot()];
        let requests = counters.requests.load(Ordering::Relaxed);
        let duration_ns = counters.duration_ns.load(Ordering::Relaxed);

        WorkloadSnapshot {
            workload,
            requests,
            failures: counters.failures.load(Ordering::Relaxed),
            duration_ns,
            average_duration_ns: duration_ns.checked_div(requests).unwrap_or(0),
        }
    }

    pub fn snapshots(&self) -> Vec<WorkloadSnapshot> {
        Workload::ALL.iter().map(|w| self.snapshot(*w)).collect()
    }

    /// Render counters and pool state in the Prometheus text format
    pub fn render_prometheus(&self, pool: &PoolStats, uptime: Duration) -> String {
        let snapshots = self.snapshots();
        let mut output = String::new();

        write_family(
            &mut output,
            "strain_workload_requests_total",
            "Requests served per workload",
            "counter",
            snapshots.iter().map(|s| (s.workload, s.requests.to_string())),
        );
        write_family(
            &mut output,
            "strain_workload_failures_total",
            "Failed requests per workload",
            "counter",
            snapshots.iter().map(|s| (s.workload, s.failures.to_string())),
        );
        write_family(
            &mut output,
            "strain_workload_duration_seconds_total",
            "Cumulative time spent serving each workload",
            "counter",
            snapshots
                .iter()
                .map(|s| (s.workload, format!("{:.9}", s.duration_ns as f64 / 1e9))),
        );

        let gauges = [
            ("strain_pool_capacity", "Maximum concurrent compute jobs", "gauge", pool.capacity as u64),
            ("strain_pool_in_flight", "Compute jobs currently holding a permit", "gauge", pool.in_flight as u64),
            ("strain_pool_jobs_completed_total", "Compute jobs that finished", "counter", pool.completed),
            ("strain_pool_jobs_failed_total", "Compute jobs that panicked or were rejected", "counter", pool.failed),
            ("strain_pool_jobs_timed_out_total", "Compute jobs abandoned after the timeout", "counter", pool.timed_out),
            ("strain_uptime_seconds", "Seconds since the service started", "gauge", uptime.as_secs()),
        ];
        for (name, help, kind, value) in gauges {
            let _ = writeln!(output, "# HELP {name} {help}");
            let _ = writeln!(output, "# TYPE {name} {kind}");
            let _ = writeln!(output, "{name} {value}");
        }

        output
    }
}

fn write_family(
    output: &mut String,
    name: &str,
    help: &str,
    kind: &str,
    samples: impl Iterator<Item = (Workload, String)>,
) {
    let _ = writeln!(output, "# HELP {name} {help}");
    let _ = writeln!(output, "# TYPE {name} {kind}");
    for (workload, value) in samples {
        let _ = writeln!(output, "{name}{{workload=\"{}\"}} {value}", workload.as_str());
    }
}
