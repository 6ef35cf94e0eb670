//! HTTP error taxonomy
//!
//! The resource's failures are status-code shaped: NotFound for absent
//! plugins/versions, Conflict for duplicate identifiers. Only the
//! unknown-default-version case carries a message body; everything else
//! signals through the status alone.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Errors a handler can surface to the client
#[derive(Debug, Error)]
pub enum ApiError {
    /// Referenced plugin or version does not exist
    #[error("resource not found")]
    NotFound,

    /// Not found, with an explanatory message in the response body
    #[error("{0}")]
    NotFoundMessage(String),

    /// Duplicate plugin id or duplicate version string
    #[error("resource already exists")]
    Conflict,

    /// Store failure; logged and reported as a bare 500
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::NotFoundMessage(message) => {
                (StatusCode::NOT_FOUND, message).into_response()
            }
            ApiError::Conflict => StatusCode::CONFLICT.into_response(),
            ApiError::Internal(err) => {
                tracing::error!("request failed: {err:#}");
                StatusCode::INTERNAL_SERVER_ERROR.into_response()
            }
        }
    }
}
