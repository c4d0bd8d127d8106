//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::services::ServiceError;

/// Error body. Every failure the API reports has this shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// No data for the requested name
    NotFound(String),
    /// A dataset failed to load at startup
    Unavailable(String),
    /// Internal server error
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unavailable(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            AppError::NotFound(msg) => {
                debug!(%msg, "Lookup miss");
                msg
            }
            AppError::Unavailable(msg) => {
                error!(%msg, "Request needs a dataset that did not load");
                msg
            }
            AppError::Internal(msg) => {
                error!(%msg, "Internal error");
                "Internal server error.".to_string()
            }
        };

        (status, Json(ApiError::new(message))).into_response()
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::NotFound(msg) => AppError::NotFound(msg.to_string()),
            ServiceError::Unavailable { message, .. } => AppError::Unavailable(message.to_string()),
        }
    }
}
