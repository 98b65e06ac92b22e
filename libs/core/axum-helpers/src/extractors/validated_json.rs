//! JSON extractor with automatic validation using the validator crate.

use crate::errors::{validation_messages, AppError, ErrorBody};
use axum::{
    extract::{FromRequest, Json, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use validator::Validate;

/// JSON extractor with fail-fast validation.
///
/// Deserializes the body and runs the payload's `Validate` rules. On
/// failure only the first rule message is reported, as a 400 with the
/// standard `{message}` envelope. Unknown body fields are ignored.
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use axum::routing::post;
/// use axum_helpers::extractors::ValidatedJson;
/// use serde::Deserialize;
/// use validator::Validate;
///
/// #[derive(Deserialize, Validate)]
/// struct CreateBrand {
///     #[validate(length(min = 3, max = 30))]
///     name: String,
/// }
///
/// async fn create_brand(ValidatedJson(payload): ValidatedJson<CreateBrand>) -> String {
///     format!("Creating brand: {}", payload.name)
/// }
///
/// let app = Router::new().route("/brands", post(create_brand));
/// ```
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::JsonExtractorRejection(e).into_response())?;

        data.validate().map_err(|e| {
            let message = validation_messages(&e)
                .into_iter()
                .next()
                .unwrap_or_else(|| "Request validation failed".to_string());

            (StatusCode::BAD_REQUEST, axum::Json(ErrorBody::new(message))).into_response()
        })?;

        Ok(ValidatedJson(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request as HttpRequest, routing::post, Router};
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize, Validate)]
    struct CreatePayload {
        #[validate(length(min = 3, message = "Name must be at least 3 characters long."))]
        name: String,
    }

    async fn create(ValidatedJson(payload): ValidatedJson<CreatePayload>) -> String {
        payload.name
    }

    fn app() -> Router {
        Router::new().route("/things", post(create))
    }

    async fn send(app: Router, body: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(
                HttpRequest::builder()
                    .method("POST")
                    .uri("/things")
                    .header("content-type", "application/json")
                    .body(Body::from(body.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();

        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_valid_payload_passes() {
        let (status, _) = send(app(), r#"{"name":"Nike"}"#).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_short_name_rejected_with_first_message() {
        let (status, body) = send(app(), r#"{"name":"ab"}"#).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], "Name must be at least 3 characters long.");
    }

    #[tokio::test]
    async fn test_unknown_fields_are_ignored() {
        let (status, _) = send(app(), r#"{"name":"Nike","bogus":true}"#).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_malformed_body_keeps_json_envelope() {
        let (status, body) = send(app(), r#"{"name": "Nik"#).await;
        assert!(status.is_client_error());
        assert!(body["message"].is_string());
    }
}
