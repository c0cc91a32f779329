//! Response bodies shared by the non-workload endpoints

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;
use strain_execution::PoolStats;

use crate::metrics::WorkloadSnapshot;

/// Health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub checks: BTreeMap<String, HealthCheckResult>,
}

/// Individual health check result
#[derive(Debug, Clone, Serialize)]
pub struct HealthCheckResult {
    pub status: HealthStatus,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
    Degraded,
    Unhealthy,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: HealthStatus::Healthy,
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            checks: BTreeMap::new(),
        }
    }

    /// Add a check; the overall status becomes the worst of all checks
    pub fn with_check(mut self, name: &str, status: HealthStatus, message: impl Into<String>) -> Self {
        self.status = match (self.status, status) {
            (HealthStatus::Unhealthy, _) | (_, HealthStatus::Unhealthy) => HealthStatus::Unhealthy,
            (HealthStatus::Degraded, _) | (_, HealthStatus::Degraded) => HealthStatus::Degraded,
            _ => HealthStatus::Healthy,
        };
        self.checks.insert(
            name.to_string(),
            HealthCheckResult {
                status,
                message: message.into(),
            },
        );
        self
    }
}

/// JSON metrics body
#[derive(Debug, Clone, Serialize)]
pub struct MetricsResponse {
    pub uptime_seconds: u64,
    pub pool: PoolStats,
    pub workloads: Vec<WorkloadSnapshot>,
    pub timestamp: DateTime<Utc>,
}

/// Banner served at `/`
#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub endpoints: Vec<EndpointInfo>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EndpointInfo {
    pub path: &'static str,
    pub description: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_worst_check_wins() {
        let health = HealthResponse::healthy()
            .with_check("a", HealthStatus::Healthy, "ok")
            .with_check("b", HealthStatus::Degraded, "busy");
        assert_eq!(health.status, HealthStatus::Degraded);

        let health = health.with_check("c", HealthStatus::Unhealthy, "closed");
        assert_eq!(health.status, HealthStatus::Unhealthy);
        assert_eq!(health.checks.len(), 3);
    }
}
