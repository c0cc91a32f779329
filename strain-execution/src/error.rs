//! Error types for compute dispatch

use std::time::Duration;
use thiserror::Error;

/// Compute dispatch errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// The caller stopped waiting. The computation itself keeps running
    /// until it finishes on its own.
    #[error("Workload '{label}' did not finish within {timeout:?}")]
    Timeout {
        label: &'static str,
        timeout: Duration,
    },

    #[error("Workload '{0}' was cancelled")]
    Cancelled(&'static str),

    #[error("Workload '{label}' panicked: {message}")]
    Panicked {
        label: &'static str,
        message: String,
    },

    #[error("Compute pool is closed")]
    PoolClosed,
}

impl ExecutionError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }
}

/// Result of a dispatched workload
pub type ExecutionResult<T> = Result<T, ExecutionError>;
