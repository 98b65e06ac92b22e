pub mod handlers;
pub mod responses;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use utoipa::ToSchema;
use uuid::Error as UuidError;
use validator::{ValidationErrors, ValidationErrorsKind};

/// Standard JSON error envelope.
///
/// Every error response carries a human-readable `message` and nothing else;
/// clients never see stack traces or raw driver errors.
///
/// ```json
/// { "message": "Brand not found" }
/// ```
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable error message
    pub message: String,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Application error type that converts to a single HTTP response.
///
/// Handlers return `Result<_, impl Into<AppError>>`; the boundary converts
/// the error kind to exactly one response and logs it. Nothing is re-raised
/// after a response is committed.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppError {
    #[error("JSON extraction error: {0}")]
    JsonExtractorRejection(#[from] JsonRejection),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationErrors),

    #[error("UUID error: {0}")]
    UuidError(#[from] UuidError),

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error("Not Found: {0}")]
    NotFound(String),

    #[error("Internal Server Error: {0}")]
    InternalServerError(String),

    #[error("Service Unavailable: {0}")]
    ServiceUnavailable(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::JsonExtractorRejection(e) => {
                tracing::warn!("JSON extraction error: {:?}", e);
                (e.status(), e.body_text())
            }
            AppError::ValidationError(e) => {
                tracing::info!("Validation error: {:?}", e);
                let message = validation_messages(&e)
                    .into_iter()
                    .next()
                    .unwrap_or_else(|| "Request validation failed".to_string());
                (StatusCode::BAD_REQUEST, message)
            }
            AppError::UuidError(e) => {
                tracing::warn!("UUID error: {:?}", e);
                (StatusCode::BAD_REQUEST, "Invalid id format".to_string())
            }
            AppError::BadRequest(msg) => {
                tracing::info!("Bad request: {}", msg);
                (StatusCode::BAD_REQUEST, msg)
            }
            AppError::NotFound(msg) => {
                tracing::info!("Not found: {}", msg);
                (StatusCode::NOT_FOUND, msg)
            }
            AppError::InternalServerError(msg) => {
                tracing::error!("Internal server error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
            AppError::ServiceUnavailable(msg) => {
                tracing::warn!("Service unavailable: {}", msg);
                (StatusCode::SERVICE_UNAVAILABLE, msg)
            }
        };

        (status, Json(ErrorBody::new(message))).into_response()
    }
}

/// Flatten a [`ValidationErrors`] tree into its human-readable messages.
///
/// Custom rule messages are used verbatim; rules without a message fall back
/// to `"<field>: <code>"`. Nested struct and list errors (e.g. embedded
/// variants) are flattened recursively.
pub fn validation_messages(errors: &ValidationErrors) -> Vec<String> {
    let mut messages = Vec::new();
    collect_messages(errors, &mut messages);
    messages
}

fn collect_messages(errors: &ValidationErrors, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for err in field_errors {
                    match &err.message {
                        Some(msg) => out.push(msg.to_string()),
                        None => out.push(format!("{}: {}", field, err.code)),
                    }
                }
            }
            ValidationErrorsKind::Struct(nested) => collect_messages(nested, out),
            ValidationErrorsKind::List(items) => {
                for nested in items.values() {
                    collect_messages(nested, out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn test_validation_messages_uses_custom_message() {
        let mut errors = ValidationErrors::new();
        let mut err = ValidationError::new("min_length");
        err.message = Some("Name must be at least 3 characters long.".into());
        errors.add("name".into(), err);

        let messages = validation_messages(&errors);
        assert_eq!(messages, vec!["Name must be at least 3 characters long."]);
    }

    #[test]
    fn test_validation_messages_falls_back_to_code() {
        let mut errors = ValidationErrors::new();
        errors.add("name".into(), ValidationError::new("length"));

        let messages = validation_messages(&errors);
        assert_eq!(messages, vec!["name: length"]);
    }

    #[test]
    fn test_app_error_not_found_status() {
        let response = AppError::NotFound("Brand not found".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_app_error_bad_request_status() {
        let response = AppError::BadRequest("nope".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
