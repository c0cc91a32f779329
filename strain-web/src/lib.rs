//! # Strain Web Utilities
//!
//! Reusable building blocks for the Strain HTTP surface: a JSON error type,
//! request-id tagging, CORS, a strict query extractor and the response
//! envelope shared by all workload endpoints.
//!
//! ## Example
//!
//! ```rust,no_run
//! use axum::{middleware, routing::get, Router};
//! use strain_web::{cors_layer, handle_not_found, request_id_middleware, RequestId};
//!
//! async fn hello(request_id: RequestId) -> String {
//!     format!("hello from {request_id}")
//! }
//!
//! # #[tokio::main]
//! # async fn main() {
//! let app: Router = Router::new()
//!     .route("/hello", get(hello))
//!     .fallback(handle_not_found)
//!     .layer(middleware::from_fn(request_id_middleware))
//!     .layer(cors_layer());
//!
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:8080").await.unwrap();
//! axum::serve(listener, app).await.unwrap();
//! # }
//! ```

pub mod errors;
pub mod extractors;
pub mod middleware;
pub mod utils;

// Re-export commonly used types and functions
pub use errors::{WebError, WebResult};
pub use extractors::StrictQuery;
pub use middleware::{
    cors_layer, cors_layer_with_config, error_handler_middleware, handle_not_found,
    request_id_middleware, CorsConfig, RequestId, REQUEST_ID_HEADER,
};
pub use utils::{ApiResponse, ResponseMeta};
