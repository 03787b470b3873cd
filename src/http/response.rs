//! Error normalization.
//!
//! # Responsibilities
//! - Collapse every failure into the `{"status":"error"}` envelope
//! - Pick the response status: the explicitly set one, otherwise 400
//!
//! # Design Decisions
//! - Failure detail stays server-side (logs); callers only see the envelope
//! - The first explicitly set status wins; later `with_status` calls are ignored

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::upstream::LookupError;

/// The single error body returned to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ErrorEnvelope {
    pub status: &'static str,
}

impl ErrorEnvelope {
    pub const ERROR: Self = Self { status: "error" };
}

/// Why a request failed.
#[derive(Debug, Error)]
pub enum ApiErrorKind {
    #[error("failed to read request body: {0}")]
    BodyRead(#[source] axum::Error),

    #[error("failed to decode request body: {0}")]
    InvalidRequest(#[source] serde_json::Error),

    #[error("failed to search word: {0}")]
    Lookup(#[source] LookupError),

    #[error("handler panicked: {0}")]
    Panic(String),
}

/// Failure returned by handlers and rendered as an [`ErrorEnvelope`].
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct ApiError {
    status: Option<StatusCode>,
    kind: ApiErrorKind,
}

impl ApiError {
    pub fn new(kind: ApiErrorKind) -> Self {
        Self { status: None, kind }
    }

    /// Set the response status unless one was already set.
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status.get_or_insert(status);
        self
    }

    /// Response status: the explicit one, or 400.
    pub fn status(&self) -> StatusCode {
        self.status.unwrap_or(StatusCode::BAD_REQUEST)
    }

    /// Outcome label used for metrics.
    pub fn outcome(&self) -> &'static str {
        match &self.kind {
            ApiErrorKind::BodyRead(_) | ApiErrorKind::InvalidRequest(_) => "bad_request",
            ApiErrorKind::Lookup(e) => e.kind(),
            ApiErrorKind::Panic(_) => "panic",
        }
    }
}

impl From<ApiErrorKind> for ApiError {
    fn from(kind: ApiErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(ApiErrorKind::InvalidRequest(e))
    }
}

impl From<LookupError> for ApiError {
    fn from(e: LookupError) -> Self {
        Self::new(ApiErrorKind::Lookup(e))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(ErrorEnvelope::ERROR)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    fn decode_error() -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>("{").unwrap_err()
    }

    async fn body_of(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_defaults_to_bad_request() {
        let response = ApiError::from(decode_error()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_of(response).await,
            serde_json::json!({ "status": "error" })
        );
    }

    #[tokio::test]
    async fn test_explicit_status_wins() {
        let response = ApiError::from(decode_error())
            .with_status(StatusCode::UNPROCESSABLE_ENTITY)
            .into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body_of(response).await,
            serde_json::json!({ "status": "error" })
        );
    }

    #[test]
    fn test_first_status_is_kept() {
        let err = ApiError::from(decode_error())
            .with_status(StatusCode::NOT_FOUND)
            .with_status(StatusCode::BAD_GATEWAY);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_outcomes() {
        assert_eq!(ApiError::from(decode_error()).outcome(), "bad_request");

        let lookup = LookupError::InvalidBaseUrl("x".into());
        let err = ApiError::from(lookup);
        assert_eq!(err.outcome(), "config");
        assert!(err.to_string().starts_with("failed to search word"));

        let err = ApiError::new(ApiErrorKind::Panic("boom".into()));
        assert_eq!(err.outcome(), "panic");
    }
}
