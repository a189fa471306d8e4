//! Request extractors that reject with an `ApiError` body
//!
//! Wrappers around axum's `Json`, `Path` and `Query` so a malformed body,
//! path segment or query string gets the same `{"detail", "code"}` error as
//! every other failure instead of axum's plain-text rejection.

use axum::{
    extract::{rejection::JsonRejection, FromRequest, FromRequestParts, Request},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
};
use serde::{de::DeserializeOwned, Serialize};

use super::error::ApiError;

/// JSON request body, also usable as a JSON response
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

/// Typed path parameters
#[derive(Debug, Clone)]
pub struct Path<T>(pub T);

/// Typed query string
#[derive(Debug, Clone)]
pub struct Query<T>(pub T);

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let axum::Json(value) = axum::Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                ApiError::new(rejection.status(), body_rejection_detail(&rejection))
                    .with_code("json_parse_error")
            })?;

        Ok(Self(value))
    }
}

impl<S, T> FromRequestParts<S> for Path<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let axum::extract::Path(value) = axum::extract::Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| {
                ApiError::new(input_status(rejection.status()), rejection.body_text())
                    .with_code("invalid_path")
            })?;

        Ok(Self(value))
    }
}

impl<S, T> FromRequestParts<S> for Query<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let axum::extract::Query(value) =
            axum::extract::Query::<T>::from_request_parts(parts, state)
                .await
                .map_err(|rejection| {
                    ApiError::new(input_status(rejection.status()), rejection.body_text())
                        .with_code("invalid_query")
                })?;

        Ok(Self(value))
    }
}

impl<T> IntoResponse for Json<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

/// Undecodable path or query input is a 422; server-side failures keep their status
fn input_status(status: StatusCode) -> StatusCode {
    if status.is_server_error() {
        status
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    }
}

fn body_rejection_detail(rejection: &JsonRejection) -> String {
    match rejection {
        JsonRejection::JsonDataError(err) => format!("Invalid request body: {}", err.body_text()),
        JsonRejection::JsonSyntaxError(err) => format!("Malformed JSON: {}", err.body_text()),
        JsonRejection::MissingJsonContentType(_) => {
            "Expected request with `Content-Type: application/json`".to_string()
        }
        other => other.body_text(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Page {
        size: u32,
    }

    async fn query_from(uri: &str) -> Result<Query<Page>, ApiError> {
        let (mut parts, _) = Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap()
            .into_parts();

        Query::<Page>::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn test_query_decodes() {
        let Query(page) = query_from("/things?size=10").await.unwrap();
        assert_eq!(page.size, 10);
    }

    #[tokio::test]
    async fn test_bad_query_is_unprocessable() {
        let err = query_from("/things?size=ten").await.unwrap_err();

        assert_eq!(err.status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(err.response.code.as_deref(), Some("invalid_query"));
        assert!(!err.response.detail.is_empty());
    }

    #[tokio::test]
    async fn test_body_without_content_type_keeps_status() {
        let request = Request::builder()
            .method("POST")
            .uri("/things")
            .body(Body::from(r#"{"size": 1}"#))
            .unwrap();

        let err = Json::<serde_json::Value>::from_request(request, &())
            .await
            .unwrap_err();

        assert_eq!(err.status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
        assert_eq!(err.response.code.as_deref(), Some("json_parse_error"));
    }

    #[test]
    fn test_input_status() {
        assert_eq!(
            input_status(StatusCode::BAD_REQUEST),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            input_status(StatusCode::INTERNAL_SERVER_ERROR),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
