//! Error-to-HTTP response conversion.
//!
//! Implements `IntoResponse` for [`LookupError`] so that route handlers can
//! return `Result<T, AppError>` directly.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::lookup::LookupError;

/// Wrapper so we can implement `IntoResponse` and carry the request id.
#[derive(Debug)]
pub struct AppError {
    inner: LookupError,
    request_id: Option<String>,
}

impl AppError {
    pub fn new(inner: LookupError) -> Self {
        Self {
            inner,
            request_id: None,
        }
    }

    pub fn with_request_id(mut self, id: Option<String>) -> Self {
        self.request_id = id;
        self
    }
}

impl From<LookupError> for AppError {
    fn from(e: LookupError) -> Self {
        Self::new(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.inner.http_status())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            tracing::error!(
                status = %status,
                error = %self.inner,
                "Server error in API handler"
            );
        }

        let body = json!({
            "error": self.inner.to_string(),
            "code": self.inner.code(),
            "request_id": self.request_id,
        });

        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_produces_400() {
        let err = AppError::new(LookupError::Validation("URL is required".into()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn unavailable_produces_503() {
        let response = AppError::new(LookupError::ExtractorUnavailable).into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn timeout_produces_408() {
        let response = AppError::new(LookupError::Timeout).into_response();
        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);
    }

    #[test]
    fn with_request_id() {
        let err = AppError::new(LookupError::Timeout).with_request_id(Some("req-123".into()));
        assert_eq!(err.request_id.as_deref(), Some("req-123"));
    }
}
