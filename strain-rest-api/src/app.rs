//! Router assembly

use axum::{middleware, routing::get, Router};
use strain_config::ServerConfig;
use strain_web::{cors_layer, error_handler_middleware, handle_not_found, request_id_middleware};
use tower_http::trace::TraceLayer;

use crate::{context::AppContext, handlers};

/// Which optional middleware to attach
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub enable_cors: bool,
    pub enable_request_id: bool,
    pub enable_tracing: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            enable_cors: true,
            enable_request_id: true,
            enable_tracing: true,
        }
    }
}

impl From<&ServerConfig> for AppConfig {
    fn from(server: &ServerConfig) -> Self {
        Self {
            enable_cors: server.enable_cors,
            enable_request_id: server.enable_request_id,
            enable_tracing: server.enable_tracing,
        }
    }
}

/// Create the complete REST application
pub fn create_rest_app(context: AppContext, config: AppConfig) -> Router {
    let mut app = Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .route("/health/live", get(handlers::liveness_check))
        .route("/health/ready", get(handlers::readiness_check))
        .route("/metrics", get(handlers::get_metrics))
        .route("/metrics/prometheus", get(handlers::get_prometheus_metrics))
        .nest("/cpu", cpu_router())
        .fallback(handle_not_found)
        .with_state(context);

    // Later layers wrap earlier ones
    if config.enable_cors {
        app = app.layer(cors_layer());
    }

    if config.enable_tracing {
        app = app.layer(TraceLayer::new_for_http());
    }

    if config.enable_request_id {
        app = app.layer(middleware::from_fn(request_id_middleware));
    }

    app.layer(middleware::from_fn(error_handler_middleware))
}

fn cpu_router() -> Router<AppContext> {
    Router::new()
        .route("/primes", get(handlers::cpu::primes))
        .route("/sort", get(handlers::cpu::sort))
        .route("/matrix", get(handlers::cpu::matrix))
        .route("/recursive", get(handlers::cpu::recursive))
        .route("/parallel", get(handlers::cpu::parallel))
}
