//! Error types for workload engines

use thiserror::Error;

/// Result type alias for workload operations
pub type WorkloadResult<T> = Result<T, WorkloadError>;

/// Errors raised by workload engines.
///
/// Degenerate sizes (`limit <= 1`, `size == 0`, `threads == 0`) are not
/// errors; they produce empty or trivial results.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkloadError {
    /// Two matrices of different dimensions were combined
    #[error("Matrix dimension mismatch: {left}x{left} vs {right}x{right}")]
    DimensionMismatch { left: usize, right: usize },

    /// A parameter is outside the range an engine can represent
    #[error("Invalid parameter '{name}': {message}")]
    InvalidParameter { name: &'static str, message: String },
}

impl WorkloadError {
    pub fn invalid_parameter(name: &'static str, message: impl Into<String>) -> Self {
        WorkloadError::InvalidParameter {
            name,
            message: message.into(),
        }
    }
}
