pub mod cpu;
pub mod health;
pub mod metrics;

use axum::Json;

use crate::models::{EndpointInfo, ServiceInfo};

pub use health::{health_check, liveness_check, readiness_check};
pub use metrics::{get_metrics, get_prometheus_metrics};

const ENDPOINTS: [(&str, &str); 10] = [
    ("/cpu/primes?limit=", "Prime sieve with trial-division verification"),
    ("/cpu/sort?size=", "Quick, bubble and merge sort of one random array"),
    ("/cpu/matrix?size=", "Matrix multiply, transpose and determinant pipeline"),
    ("/cpu/recursive?depth=", "Naive recursive Fibonacci with trigonometric perturbation"),
    ("/cpu/parallel?iterations=&threads=", "Partitioned fork-join numeric accumulation"),
    ("/health", "Overall health"),
    ("/health/live", "Liveness probe"),
    ("/health/ready", "Readiness probe"),
    ("/metrics", "Request counters as JSON"),
    ("/metrics/prometheus", "Request counters in Prometheus text format"),
];

/// `GET /`: service banner
pub async fn index() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        name: "strain",
        version: env!("CARGO_PKG_VERSION"),
        endpoints: ENDPOINTS
            .iter()
            .map(|&(path, description)| EndpointInfo { path, description })
            .collect(),
    })
}
