//! REST API for the Strain load generator
//!
//! Exposes the CPU workloads under `/cpu/*` together with health probes and
//! metrics. Handlers resolve query parameters against the configured limits
//! and hand the actual computation to the shared [`ComputePool`].
//!
//! [`ComputePool`]: strain_execution::ComputePool

pub mod app;
pub mod context;
pub mod errors;
pub mod handlers;
pub mod metrics;
pub mod models;

pub use app::{create_rest_app, AppConfig};
pub use context::AppContext;
pub use errors::{RestError, RestResult};
pub use metrics::{Workload, WorkloadMetrics, WorkloadSnapshot};
