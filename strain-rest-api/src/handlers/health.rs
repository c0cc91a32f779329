//! Health check endpoints

use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::{
    context::AppContext,
    errors::{RestError, RestResult},
    models::{HealthResponse, HealthStatus},
};

/// Overall health including the state of the compute pool.
///
/// Always answers 200; a saturated pool reports `degraded`, a closed one
/// `unhealthy`.
pub async fn health_check(State(ctx): State<AppContext>) -> Json<HealthResponse> {
    let stats = ctx.pool.stats();

    let (status, message) = if stats.closed {
        (HealthStatus::Unhealthy, "Compute pool is closed".to_string())
    } else if stats.in_flight >= stats.capacity {
        (
            HealthStatus::Degraded,
            format!("All {} compute slots busy", stats.capacity),
        )
    } else {
        (
            HealthStatus::Healthy,
            format!("{} of {} compute slots busy", stats.in_flight, stats.capacity),
        )
    };

    Json(HealthResponse::healthy().with_check("compute_pool", status, message))
}

/// Liveness probe: the process answers requests
pub async fn liveness_check() -> Json<Value> {
    Json(json!({
        "status": "alive",
        "timestamp": chrono::Utc::now(),
    }))
}

/// Readiness probe: 503 once the compute pool stops accepting work
pub async fn readiness_check(State(ctx): State<AppContext>) -> RestResult<Json<Value>> {
    let stats = ctx.pool.stats();
    if stats.closed {
        return Err(RestError::ServiceUnavailable(
            "Compute pool is closed".to_string(),
        ));
    }

    Ok(Json(json!({
        "status": "ready",
        "timestamp": chrono::Utc::now(),
        "compute_slots": stats.capacity,
        "in_flight": stats.in_flight,
    })))
}
