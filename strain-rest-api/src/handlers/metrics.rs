//! Metrics endpoints

use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    Json,
};
use tracing::debug;

use crate::{context::AppContext, models::MetricsResponse};

/// `GET /metrics`: counters as JSON
pub async fn get_metrics(State(ctx): State<AppContext>) -> Json<MetricsResponse> {
    debug!("Metrics requested");

    Json(MetricsResponse {
        uptime_seconds: ctx.uptime().as_secs(),
        pool: ctx.pool.stats(),
        workloads: ctx.metrics.snapshots(),
        timestamp: chrono::Utc::now(),
    })
}

/// `GET /metrics/prometheus`: text exposition format
pub async fn get_prometheus_metrics(State(ctx): State<AppContext>) -> impl IntoResponse {
    debug!("Prometheus metrics requested");

    let body = ctx
        .metrics
        .render_prometheus(&ctx.pool.stats(), ctx.uptime());

    ([(header::CONTENT_TYPE, "text/plain; version=0.0.4")], body)
}
