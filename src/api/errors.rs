//! API errors
//!
//! Translation of request and estimator failures into client-facing
//! status codes and JSON bodies.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use chrono::Local;
use serde::Serialize;
use thiserror::Error;

use crate::estimator::{format_local, InvalidConditionsError};

use super::request::FieldErrors;

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// One or more fields missing or out of range
    #[error("Input validation failed")]
    ValidationFailed(FieldErrors),

    /// Body is not a JSON estimate request
    #[error("Malformed request body: {0}")]
    MalformedBody(String),

    /// Inputs contradict the cooling model
    #[error("{0}")]
    InvalidConditions(#[from] InvalidConditionsError),

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Unexpected failure
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::ValidationFailed(_) => StatusCode::BAD_REQUEST,
            ApiError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidConditions(e) if e.is_internal() => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::InvalidConditions(_) => StatusCode::BAD_REQUEST,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Stable machine-readable code
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::ValidationFailed(_) => "TOD_VALIDATION_FAILED",
            ApiError::MalformedBody(_) => "TOD_MALFORMED_REQUEST",
            ApiError::InvalidConditions(e) => e.code(),
            ApiError::Internal(_) => "TOD_INTERNAL_ERROR",
        }
    }

    /// Short error title
    pub fn title(&self) -> &'static str {
        match self {
            _ if self.status_code().is_server_error() => "Internal Server Error",
            ApiError::ValidationFailed(_) => "Validation Failed",
            ApiError::MalformedBody(_) => "Malformed Request",
            _ => "Validation Error",
        }
    }

    /// Client-safe message; server errors never leak detail
    pub fn public_message(&self) -> String {
        if self.status_code().is_server_error() {
            "An unexpected error occurred".to_string()
        } else {
            self.to_string()
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub timestamp: String,
    pub status: u16,
    pub error: String,
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_errors: Option<FieldErrors>,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        let field_errors = match err {
            ApiError::ValidationFailed(errors) => Some(errors.clone()),
            _ => None,
        };
        Self {
            timestamp: format_local(Local::now().naive_local()),
            status: err.status_code().as_u16(),
            error: err.title().to_string(),
            code: err.code().to_string(),
            message: err.public_message(),
            field_errors,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}
