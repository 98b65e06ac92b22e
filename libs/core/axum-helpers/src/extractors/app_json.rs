//! JSON extractor whose rejection keeps the standard error envelope.

use crate::errors::AppError;
use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;

/// Drop-in replacement for [`axum::Json`] as an extractor.
///
/// Deserialization failures are converted to [`AppError`], so malformed or
/// missing bodies produce the `{message}` envelope instead of axum's
/// plain-text rejection. Use it for bodies that are validated later (or not
/// at all); [`super::ValidatedJson`] builds on the same conversion.
pub struct AppJson<T>(pub T);

impl<T, S> FromRequest<S> for AppJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = Json::<T>::from_request(req, state).await?;
        Ok(AppJson(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use axum::{body::Body, http::Request as HttpRequest, routing::put, Router};
    use http_body_util::BodyExt;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    struct UpdatePayload {
        name: Option<String>,
    }

    async fn update(AppJson(payload): AppJson<UpdatePayload>) -> String {
        payload.name.unwrap_or_default()
    }

    fn app() -> Router {
        Router::new().route("/things", put(update))
    }

    async fn send(app: Router, body: &str) -> (StatusCode, serde_json::Value) {
        let response = app
            .oneshot(
                HttpRequest::builder()
                    .method("PUT")
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
    async fn test_valid_body_passes() {
        let (status, _) = send(app(), r#"{"name":"Nike"}"#).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_malformed_body_keeps_json_envelope() {
        let (status, body) = send(app(), r#"{"name": "Nik"#).await;
        assert!(status.is_client_error());
        assert!(body["message"].is_string());
    }
}
