use axum::{
    body::Body,
    http::{Request, Uri},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::errors::WebError;

/// Log every 5xx leaving the service with its method and path
pub async fn error_handler_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    let response = next.run(request).await;

    if response.status().is_server_error() {
        error!(%method, %path, status = response.status().as_u16(), "Server error");
    }

    response
}

/// Router fallback producing the standard JSON 404
pub async fn handle_not_found(uri: Uri) -> impl IntoResponse {
    WebError::not_found(format!("No route for {}", uri.path()))
}
