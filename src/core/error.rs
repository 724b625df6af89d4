//! Typed error handling for the API
//!
//! All handler failures are funnelled through [`ApiError`], which maps each
//! error category to an HTTP status, a stable error code and a uniform JSON
//! body. Nothing is silently swallowed: every store, validation or lookup
//! failure surfaces here.
//!
//! # Error Categories
//!
//! - `NotFound`: a referenced id does not resolve to a persisted entity
//! - `Validation`: one or more fields of a write payload violate a rule
//! - `UnresolvedReference`: a lesson references a nonexistent teacher
//!   (surfaced as a validation-class error, not a generic failure)
//! - `InvalidBody`: the request body could not be decoded after validation
//! - `Store`: underlying persistence failure, fatal for the current request

use crate::storage::StoreError;
use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// The main error type for API operations
#[derive(Debug)]
pub enum ApiError {
    /// Entity was not found
    NotFound {
        resource: &'static str,
        id: i64,
    },

    /// One or more fields failed validation
    Validation(Vec<FieldValidationError>),

    /// A foreign key does not resolve to a persisted entity
    UnresolvedReference {
        field: &'static str,
        value: i64,
    },

    /// Request body could not be decoded into the expected shape
    InvalidBody(String),

    /// Underlying storage failure
    Store(String),
}

/// A single field validation error
#[derive(Debug, Clone, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound { resource, id } => {
                write!(f, "{} with id '{}' not found", resource, id)
            }
            // The public message stays coarse; per-field detail travels in
            // the `details` payload.
            ApiError::Validation(_) => write!(f, "Validation failed"),
            ApiError::UnresolvedReference { .. } => write!(f, "Validation failed"),
            ApiError::InvalidBody(message) => {
                write!(f, "Invalid request body: {}", message)
            }
            ApiError::Store(message) => write!(f, "Storage error: {}", message),
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    pub fn not_found(resource: &'static str, id: i64) -> Self {
        ApiError::NotFound { resource, id }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::UnresolvedReference { .. } => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the stable error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::Validation(_) => "WRONG_ARGS",
            ApiError::UnresolvedReference { .. } => "WRONG_ARGS",
            ApiError::InvalidBody(_) => "WRONG_ARGS",
            ApiError::Store(_) => "STORE_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    /// Get additional details for the error
    fn details(&self) -> Option<serde_json::Value> {
        match self {
            ApiError::NotFound { resource, id } => Some(serde_json::json!({
                "resource": resource,
                "id": id,
            })),
            ApiError::Validation(errors) => Some(serde_json::json!({ "fields": errors })),
            ApiError::UnresolvedReference { field, value } => Some(serde_json::json!({
                "fields": [{
                    "field": field,
                    "message": format!("does not reference an existing record (value: {})", value),
                }],
            })),
            _ => None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::ForeignKey { field, value } => {
                ApiError::UnresolvedReference { field, value }
            }
            StoreError::LockPoisoned => ApiError::Store(err.to_string()),
        }
    }
}

/// A specialized Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_display() {
        let err = ApiError::not_found("Teacher", 7);
        assert!(err.to_string().contains("Teacher"));
        assert!(err.to_string().contains("not found"));
        assert_eq!(err.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(err.error_code(), "NOT_FOUND");
    }

    #[test]
    fn test_validation_error_is_wrong_args() {
        let err = ApiError::Validation(vec![FieldValidationError {
            field: "age".to_string(),
            message: "must not exceed 67".to_string(),
        }]);
        assert_eq!(err.to_string(), "Validation failed");
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "WRONG_ARGS");

        let response = err.to_response();
        assert_eq!(response.code, "WRONG_ARGS");
        let fields = &response.details.unwrap()["fields"];
        assert_eq!(fields[0]["field"], "age");
    }

    #[test]
    fn test_unresolved_reference_is_validation_class() {
        let err: ApiError = StoreError::ForeignKey {
            field: "teacher_id",
            value: 99,
        }
        .into();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.error_code(), "WRONG_ARGS");
        assert_eq!(err.to_string(), "Validation failed");
    }

    #[test]
    fn test_store_error_is_server_error() {
        let err: ApiError = StoreError::LockPoisoned.into();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.error_code(), "STORE_ERROR");
    }

    #[test]
    fn test_error_response_serialization() {
        let err = ApiError::not_found("Lesson", 3);
        let response = err.to_response();
        assert_eq!(response.code, "NOT_FOUND");
        assert!(response.details.is_some());
    }
}
