//! Application error type and its HTTP representation.
//!
//! Every error leaving a handler is rendered as
//!
//! ```json
//! { "error": { "code": "validation_error", "message": "...", "details": {} } }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use validator::{ValidationErrors, ValidationErrorsKind};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Serializable error payload.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Errors produced by services, repositories and handlers.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String, details: Value },

    #[error("{message}")]
    NotFound { message: String, details: Value },

    #[error("{message}")]
    Conflict { message: String, details: Value },

    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
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

    /// HTTP status matching the error kind.
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into its serializable payload.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            Self::Validation { message, details } => ("validation_error", message, details),
            Self::NotFound { message, details } => ("not_found", message, details),
            Self::Conflict { message, details } => ("conflict", message, details),
            Self::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Self::Internal { message, .. } = &self {
            tracing::error!("Internal error: {}", message);
        }

        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (self.status(), Json(body)).into_response()
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut details = serde_json::Map::new();
        collect_validation_messages(&errors, "", &mut details);

        AppError::bad_request("Validation failed", Value::Object(details))
    }
}

/// Flattens nested validation errors into `field.path -> [messages]`.
fn collect_validation_messages(
    errors: &ValidationErrors,
    prefix: &str,
    out: &mut serde_json::Map<String, Value>,
) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };

        match kind {
            ValidationErrorsKind::Field(errs) => {
                let messages: Vec<String> = errs
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                out.insert(path, json!(messages));
            }
            ValidationErrorsKind::Struct(inner) => {
                collect_validation_messages(inner, &path, out);
            }
            ValidationErrorsKind::List(items) => {
                for (index, inner) in items {
                    collect_validation_messages(inner, &format!("{path}[{index}]"), out);
                }
            }
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::internal("Storage I/O error", json!({ "reason": e.to_string() }))
    }
}

impl From<csv::Error> for AppError {
    fn from(e: csv::Error) -> Self {
        AppError::internal("Record store error", json!({ "reason": e.to_string() }))
    }
}
