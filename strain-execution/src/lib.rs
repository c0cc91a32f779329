//! Compute worker pool for Strain
//!
//! CPU workloads never run on the async reactor threads. [`ComputePool`]
//! bounds how many of them run at once, moves each onto tokio's blocking
//! pool, and enforces a per-job wait timeout.

pub mod error;
pub mod pool;

pub use error::{ExecutionError, ExecutionResult};
pub use pool::{ComputePool, PoolStats};
