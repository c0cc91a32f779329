pub mod common;
pub mod queries;

pub use common::{EndpointInfo, HealthResponse, HealthStatus, MetricsResponse, ServiceInfo};
pub use queries::{
    resolve_param, MatrixQuery, ParallelQuery, PrimesQuery, RecursiveQuery, SortQuery,
};
