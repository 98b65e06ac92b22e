use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Domain error type for catalog operations.
///
/// Handlers return `Result<_, CatalogError>`; the error converts to exactly
/// one HTTP response and is logged at the boundary. Clients always receive a
/// JSON `{message}` body.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A single resource was requested but does not exist. Carries the
    /// client-facing message, e.g. "Brand not found".
    #[error("{0}")]
    NotFound(&'static str),

    /// A collection listing found no documents. Reported as 404 with a
    /// zero `count`, e.g. "Any brands not found".
    #[error("{0}")]
    NoneFound(&'static str),

    /// Request validation failed. Create-mode carries a single message,
    /// update-mode carries every violated rule.
    #[error("validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("database error: {0}")]
    Database(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        match self {
            CatalogError::NotFound(message) => {
                tracing::info!("Not found: {}", message);
                (StatusCode::NOT_FOUND, Json(json!({ "message": message }))).into_response()
            }
            CatalogError::NoneFound(message) => {
                tracing::info!("Empty collection: {}", message);
                (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "message": message, "count": 0 })),
                )
                    .into_response()
            }
            CatalogError::Validation(messages) => {
                tracing::info!("Validation failed: {:?}", messages);
                // A single violation is reported as a plain string, several
                // as an array.
                let message = if messages.len() == 1 {
                    serde_json::Value::String(messages.into_iter().next().unwrap_or_default())
                } else {
                    json!(messages)
                };
                (StatusCode::BAD_REQUEST, Json(json!({ "message": message }))).into_response()
            }
            CatalogError::Database(message) => {
                tracing::error!("Database error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": message })),
                )
                    .into_response()
            }
        }
    }
}

impl From<mongodb::error::Error> for CatalogError {
    fn from(err: mongodb::error::Error) -> Self {
        CatalogError::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_response() {
        let response = CatalogError::NotFound("Brand not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Brand not found");
        assert!(json.get("count").is_none());
    }

    #[tokio::test]
    async fn test_none_found_carries_zero_count() {
        let response = CatalogError::NoneFound("Any brands not found").into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Any brands not found");
        assert_eq!(json["count"], 0);
    }

    #[tokio::test]
    async fn test_single_validation_message_is_a_string() {
        let response =
            CatalogError::Validation(vec!["Brand name is required.".to_string()]).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["message"], "Brand name is required.");
    }

    #[tokio::test]
    async fn test_multiple_validation_messages_are_an_array() {
        let response = CatalogError::Validation(vec![
            "Category name is required.".to_string(),
            "Category color must be a hex color.".to_string(),
        ])
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert!(json["message"].is_array());
        assert_eq!(json["message"].as_array().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_database_error_is_internal() {
        let response = CatalogError::Database("pool exhausted".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
