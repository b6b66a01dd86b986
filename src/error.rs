//! Application error type and its HTTP mapping.
//!
//! Services return [`AppError`] for every expected failure. The kind decides
//! the HTTP status; the message is fixed per failure and reaches the client
//! unchanged.
//!
//! | Variant                         | Status | `code`                |
//! |---------------------------------|--------|-----------------------|
//! | [`AppError::NotFound`]          | 404    | `not_found`           |
//! | [`AppError::InvalidArgument`]   | 400    | `invalid_argument`    |
//! | [`AppError::PreconditionFailed`]| 412    | `precondition_failed` |
//! | [`AppError::Validation`]        | 400    | `validation_error`    |
//! | [`AppError::Internal`]          | 500    | `internal_error`      |

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use thiserror::Error;

/// Fixed client-facing messages for business failures.
pub mod messages {
    pub const PRODUCT_NOT_FOUND: &str = "the product with the given id was not found";
    pub const STORE_NOT_FOUND: &str = "the store with the given id was not found";
    pub const STORE_NOT_ASSOCIATED: &str =
        "the store with the given id was not associate to a product";
    pub const INVALID_PRODUCT_TYPE: &str = "the product type given was not correct";
    pub const INVALID_STORE_CITY: &str = "the store city given was not correct";
}

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Error payload rendered inside the `error` key of a failed response.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, Error)]
pub enum AppError {
    /// A referenced record does not exist.
    #[error("{message}")]
    NotFound { message: String, details: Value },

    /// A field broke a domain rule (product type whitelist, city length).
    #[error("{message}")]
    InvalidArgument { message: String, details: Value },

    /// Two records exist but are not related the way the operation requires.
    #[error("{message}")]
    PreconditionFailed { message: String, details: Value },

    /// The request body is malformed.
    #[error("{message}")]
    Validation { message: String, details: Value },

    /// Storage or runtime failure. Details are logged, never returned.
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn invalid_argument(message: impl Into<String>, details: Value) -> Self {
        Self::InvalidArgument {
            message: message.into(),
            details,
        }
    }

    pub fn precondition_failed(message: impl Into<String>, details: Value) -> Self {
        Self::PreconditionFailed {
            message: message.into(),
            details,
        }
    }

    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Machine-readable error code used in the response body.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::NotFound { .. } => "not_found",
            AppError::InvalidArgument { .. } => "invalid_argument",
            AppError::PreconditionFailed { .. } => "precondition_failed",
            AppError::Validation { .. } => "validation_error",
            AppError::Internal { .. } => "internal_error",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::InvalidArgument { .. } => StatusCode::BAD_REQUEST,
            AppError::PreconditionFailed { .. } => StatusCode::PRECONDITION_FAILED,
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            AppError::NotFound { message, .. }
            | AppError::InvalidArgument { message, .. }
            | AppError::PreconditionFailed { message, .. }
            | AppError::Validation { message, .. }
            | AppError::Internal { message, .. } => message,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        let (message, details) = match self {
            AppError::NotFound { message, details }
            | AppError::InvalidArgument { message, details }
            | AppError::PreconditionFailed { message, details }
            | AppError::Validation { message, details } => (message, details),
            AppError::Internal { message, .. } => (message, json!({})),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        tracing::error!(error = %e, "Database error");
        AppError::internal("Database error", json!({ "reason": e.to_string() }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let fields: serde_json::Map<String, Value> = e
            .field_errors()
            .into_iter()
            .map(|(field, errors)| {
                let codes: Vec<Value> = errors
                    .iter()
                    .map(|err| {
                        err.message
                            .as_ref()
                            .map(|m| Value::String(m.to_string()))
                            .unwrap_or_else(|| Value::String(err.code.to_string()))
                    })
                    .collect();
                (field.to_string(), Value::Array(codes))
            })
            .collect();

        AppError::bad_request("Invalid request body", json!({ "fields": fields }))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        let reason = match &rejection {
            JsonRejection::JsonDataError(_) => "data",
            JsonRejection::JsonSyntaxError(_) => "syntax",
            JsonRejection::MissingJsonContentType(_) => "content_type",
            _ => "body",
        };

        AppError::bad_request(
            "Invalid request body",
            json!({ "reason": reason, "error": rejection.body_text() }),
        )
    }
}
