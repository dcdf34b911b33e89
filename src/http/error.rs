//! HTTP error responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::ports::StoreError;

/// Error body returned to clients
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}

/// HTTP-facing errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Map a store failure to a response error, attaching the operation
    /// context to every cause except not-found.
    pub fn from_store(context: &str, err: StoreError) -> Self {
        match err {
            StoreError::NotFound => Self::NotFound(err.to_string()),
            other => {
                tracing::error!("{}: {}", context, other);
                Self::Internal(format!("{}: {}", context, other))
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            Self::NotFound(detail) => (StatusCode::NOT_FOUND, detail),
            Self::Internal(detail) => (StatusCode::INTERNAL_SERVER_ERROR, detail),
        };

        (status, Json(ErrorBody { detail })).into_response()
    }
}
