//! REST API specific error types and conversions

use axum::response::{IntoResponse, Response};
use strain_core::WorkloadError;
use strain_execution::ExecutionError;
use strain_web::WebError;
use thiserror::Error;

/// REST API specific error type
#[derive(Error, Debug)]
pub enum RestError {
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error(transparent)]
    Workload(#[from] WorkloadError),

    #[error(transparent)]
    Execution(#[from] ExecutionError),

    #[error(transparent)]
    Web(#[from] WebError),
}

/// Result type for REST operations
pub type RestResult<T> = Result<T, RestError>;

impl From<RestError> for WebError {
    fn from(error: RestError) -> Self {
        match error {
            RestError::ServiceUnavailable(message) => WebError::service_unavailable(message),
            RestError::Web(web) => web,
            RestError::Workload(err @ WorkloadError::InvalidParameter { .. }) => {
                WebError::bad_request(err.to_string())
            }
            RestError::Workload(err) => WebError::internal(err.to_string()),
            RestError::Execution(err) => match err {
                ExecutionError::Timeout { .. } => WebError::timeout(err.to_string()),
                ExecutionError::PoolClosed => WebError::service_unavailable(err.to_string()),
                ExecutionError::Panicked { .. } | ExecutionError::Cancelled(_) => {
                    WebError::internal(err.to_string())
                }
            },
        }
    }
}

impl IntoResponse for RestError {
    fn into_response(self) -> Response {
        WebError::from(self).into_response()
    }
}
