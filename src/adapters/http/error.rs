//! Shared HTTP error response for all API modules.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};

/// Message returned for unreadable request bodies when verbose errors are off.
pub const INVALID_BODY_MESSAGE: &str = "Request body could not be read";

/// JSON error body returned by every endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
            details: None,
        }
    }

    pub fn invalid_body(message: impl Into<String>) -> Self {
        Self {
            code: "INVALID_REQUEST_BODY".to_string(),
            message: message.into(),
            details: None,
        }
    }
}

/// API error that implements IntoResponse.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorResponse,
}

impl ApiError {
    /// A 400 for malformed path or query values.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorResponse::bad_request(message),
        }
    }

    /// Wraps a JSON extractor rejection, keeping its status code.
    ///
    /// The deserializer's explanation is only exposed when `verbose` is set.
    pub fn from_rejection(rejection: JsonRejection, verbose: bool) -> Self {
        let message = if verbose {
            rejection.body_text()
        } else {
            INVALID_BODY_MESSAGE.to_string()
        };

        Self {
            status: rejection.status(),
            body: ErrorResponse::invalid_body(message),
        }
    }

    /// Maps a domain error to a status code and JSON body.
    pub fn from_domain(error: DomainError) -> Self {
        let status = match error.code {
            ErrorCode::CaseStudyNotFound => StatusCode::NOT_FOUND,
            ErrorCode::InvalidInput | ErrorCode::EmptyField | ErrorCode::OutOfRange => {
                StatusCode::BAD_REQUEST
            }
        };

        let details = if error.details.is_empty() {
            None
        } else {
            serde_json::to_value(&error.details).ok()
        };

        Self {
            status,
            body: ErrorResponse {
                code: error.code.to_string(),
                message: error.message,
                details,
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<DomainError> for ApiError {
    fn from(error: DomainError) -> Self {
        Self::from_domain(error)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::debug!(code = %self.body.code, "Request rejected: {}", self.body.message);
        (self.status, Json(self.body)).into_response()
    }
}
