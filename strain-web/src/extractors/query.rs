use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::errors::WebError;

/// `Query<T>` whose rejection is a JSON [`WebError::BadRequest`] instead of
/// axum's plain-text body.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for StrictQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = WebError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        Query::<T>::from_request_parts(parts, state)
            .await
            .map(|Query(value)| StrictQuery(value))
            .map_err(|rejection| WebError::bad_request(rejection.body_text()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct SizeQuery {
        size: Option<i64>,
    }

    async fn extract(uri: &str) -> Result<StrictQuery<SizeQuery>, WebError> {
        let request = Request::builder().uri(uri).body(()).unwrap();
        let (mut parts, _) = request.into_parts();
        StrictQuery::<SizeQuery>::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_missing_parameter_is_none() {
        let StrictQuery(query) = extract("/cpu/sort").await.unwrap();
        assert_eq!(query.size, None);
    }

    #[tokio::test]
    async fn test_negative_parameter_parses() {
        let StrictQuery(query) = extract("/cpu/sort?size=-5").await.unwrap();
        assert_eq!(query.size, Some(-5));
    }

    #[tokio::test]
    async fn test_unparsable_parameter_is_bad_request() {
        let err = extract("/cpu/sort?size=lots").await.unwrap_err();
        assert!(matches!(err, WebError::BadRequest { .. }));
    }
}
