//! API Error Handling
//!
//! Structured error responses with proper HTTP status codes and request tracking.

use crate::errors::VerifierError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Top-level API error response with request tracking
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub request_id: String,
    pub error: ErrorBody,
}

/// Error body with structured information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Error code (NOT_FOUND, BAD_REQUEST, INTERNAL_ERROR)
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details, e.g. the rejected field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

/// API error types with request tracking
#[derive(Debug)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub request_id: String,
    pub details: Option<serde_json::Value>,
}

#[derive(Debug)]
pub enum ApiErrorKind {
    NotFound(String),
    BadRequest(String),
    InternalError(String),
}

impl ApiError {
    pub fn not_found(request_id: String, message: String) -> Self {
        Self {
            kind: ApiErrorKind::NotFound(message),
            request_id,
            details: None,
        }
    }

    pub fn bad_request(request_id: String, message: String) -> Self {
        Self {
            kind: ApiErrorKind::BadRequest(message),
            request_id,
            details: None,
        }
    }

    pub fn internal_error(request_id: String, message: String) -> Self {
        Self {
            kind: ApiErrorKind::InternalError(message),
            request_id,
            details: None,
        }
    }

    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Map a verifier failure: bad input is the caller's fault, the rest is ours
    pub fn from_verifier(request_id: String, error: VerifierError) -> Self {
        let message = error.to_string();
        match error {
            VerifierError::Validation(validation) => {
                let api_error = Self::bad_request(request_id, message);
                match validation.field() {
                    Some(field) => api_error.with_details(serde_json::json!({ "field": field })),
                    None => api_error,
                }
            }
            VerifierError::UnknownGame(game) => Self::bad_request(request_id, message)
                .with_details(serde_json::json!({ "field": "game", "value": game })),
            VerifierError::Serialization(_) => Self::bad_request(request_id, message),
            VerifierError::Decode(_)
            | VerifierError::Hash(_)
            | VerifierError::Task(_)
            | VerifierError::Configuration(_)
            | VerifierError::Io(_) => Self::internal_error(request_id, message),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ApiErrorKind::NotFound(msg) => write!(f, "[{}] Not Found: {}", self.request_id, msg),
            ApiErrorKind::BadRequest(msg) => write!(f, "[{}] Bad Request: {}", self.request_id, msg),
            ApiErrorKind::InternalError(msg) => {
                write!(f, "[{}] Internal Error: {}", self.request_id, msg)
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self.kind {
            ApiErrorKind::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ApiErrorKind::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            ApiErrorKind::InternalError(msg) => {
                tracing::error!(request_id = %self.request_id, %msg, "request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg)
            }
        };

        let body = Json(ErrorResponse {
            request_id: self.request_id,
            error: ErrorBody {
                code: code.to_string(),
                message,
                details: self.details,
            },
        });

        (status, body).into_response()
    }
}
