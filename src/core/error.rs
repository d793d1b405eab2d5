use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::types::ApiResponse;

#[derive(Debug, Error)]
pub enum AppError {
    /// Rejected client input. Reported in-band with HTTP 200 and `success: false`.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Filesystem failure. `message` is what the client sees.
    #[error("{message}: {source}")]
    Storage {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Notification transport failure. `message` is what the client sees.
    #[error("{message}: {source}")]
    Notification {
        message: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn storage(message: impl Into<String>, source: std::io::Error) -> Self {
        AppError::Storage {
            message: message.into(),
            source,
        }
    }

    pub fn notification(
        message: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        AppError::Notification {
            message: message.into(),
            source: source.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::Validation(msg) => {
                tracing::debug!("Request rejected: {}", msg);
                (StatusCode::OK, msg)
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            AppError::Storage { message, source } => {
                tracing::error!("Storage error: {}: {:?}", message, source);
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
            AppError::Notification { message, source } => {
                tracing::error!("Notification error: {}: {}", message, source);
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ApiResponse::<()>::error(message));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
