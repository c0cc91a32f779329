use axum::{
    response::{IntoResponse, Response},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::middleware::RequestId;

/// Standard envelope: `{"data": ..., "meta": {"request_id", "timestamp"}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

impl ResponseMeta {
    pub fn now(request_id: &RequestId) -> Self {
        Self {
            request_id: request_id.as_str().to_string(),
            timestamp: Utc::now(),
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn new(data: T, request_id: &RequestId) -> Self {
        Self {
            data,
            meta: ResponseMeta::now(request_id),
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_serialization() {
        let id = RequestId::from_string("req-1".to_string());
        let response = ApiResponse::new(vec![2, 3, 5], &id);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["data"], serde_json::json!([2, 3, 5]));
        assert_eq!(json["meta"]["request_id"], "req-1");
        assert!(json["meta"]["timestamp"].is_string());
    }
}
