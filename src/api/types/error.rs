//! JSON error bodies for the public API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

/// Broad error categories exposed to clients
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    Validation,
    NotFound,
    Server,
}

impl ApiErrorKind {
    /// Default short title placed in the `error` field
    pub fn title(&self) -> &'static str {
        match self {
            Self::Validation => "Validation error",
            Self::NotFound => "Not Found",
            Self::Server => "Server error",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Server => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl std::fmt::Display for ApiErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// Error body: `{"error": ..., "message": ...}` and `path` on 404
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// API error with status code
#[derive(Debug)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub status: StatusCode,
    pub response: ApiErrorResponse,
}

pub const NOT_FOUND_MESSAGE: &str = "The requested resource does not exist";

impl ApiError {
    /// Create a new API error using the kind's default title and status
    pub fn new(kind: ApiErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            status: kind.status(),
            response: ApiErrorResponse {
                error: kind.title().to_string(),
                message: message.into(),
                path: None,
            },
        }
    }

    /// Replace the short title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.response.error = title.into();
        self
    }

    /// Replace the status code
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }

    /// Echo the requested path
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.response.path = Some(path.into());
        self
    }

    /// Bad request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Validation, message)
    }

    /// Unknown route or resource
    pub fn not_found(path: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::NotFound, NOT_FOUND_MESSAGE).with_path(path)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ApiErrorKind::Server, message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.response)).into_response()
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.response.error, self.response.message)
    }
}

impl std::error::Error for ApiError {}
