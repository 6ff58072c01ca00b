// src/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced to callers of a callable function.
///
/// Every downstream failure is reported as `Internal`. `InvalidArgument`
/// is only produced by the invocation layer when the request envelope
/// cannot be decoded; handlers never return it.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CallableError {
    #[error("{0}")]
    Internal(String),

    #[error("{0}")]
    InvalidArgument(String),
}

impl CallableError {
    /// Build an `Internal` error tagged with the failing downstream service.
    ///
    /// Produces messages such as `Judge API error: request failed with status code 503`.
    pub fn downstream(service: &str, cause: impl std::fmt::Display) -> Self {
        Self::Internal(format!("{} API error: {}", service, cause))
    }

    /// Canonical status string used in the callable error envelope.
    pub fn status(&self) -> &'static str {
        match self {
            Self::Internal(_) => "INTERNAL",
            Self::InvalidArgument(_) => "INVALID_ARGUMENT",
        }
    }

    fn http_status(&self) -> StatusCode {
        match self {
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::InvalidArgument(_) => StatusCode::BAD_REQUEST,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorEnvelope<'a> {
    error: ErrorBody<'a>,
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    status: &'static str,
    message: &'a str,
}

impl IntoResponse for CallableError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let body = ErrorEnvelope {
            error: ErrorBody {
                status: self.status(),
                message: &message,
            },
        };

        (self.http_status(), Json(body)).into_response()
    }
}
