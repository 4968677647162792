//! # HTTP API Errors
//!
//! Error taxonomy for the API adapter. Pipeline and catalog operations
//! return typed outcomes; these variants carry them to the wire.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;

use super::response::ErrorEnvelope;

/// Result type for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Malformed id path segment (non-digit)
    #[error("invalid coworking id: '{0}'")]
    InvalidId(String),

    /// No space with the requested id or slug
    #[error("coworking not found")]
    SpaceNotFound,

    /// Unrecognized path under the API prefix
    #[error("API route not found")]
    RouteNotFound,

    /// Unexpected fault during request handling
    #[error("internal server error")]
    Internal {
        /// Fault detail, exposed as `stack` only in development mode
        detail: Option<String>,
    },
}

impl ApiError {
    /// Build an internal fault, attaching detail only when `expose` is set
    pub fn internal(detail: impl Into<String>, expose: bool) -> Self {
        ApiError::Internal {
            detail: expose.then(|| detail.into()),
        }
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidId(_) => StatusCode::BAD_REQUEST,
            ApiError::SpaceNotFound => StatusCode::NOT_FOUND,
            ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorEnvelope::from(&self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::InvalidId("abc".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ApiError::SpaceNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::RouteNotFound.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::internal("boom", false).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_detail_only_when_exposed() {
        assert!(matches!(
            ApiError::internal("boom", true),
            ApiError::Internal { detail: Some(d) } if d == "boom"
        ));
        assert!(matches!(
            ApiError::internal("boom", false),
            ApiError::Internal { detail: None }
        ));
    }
}
