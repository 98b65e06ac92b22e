//! HTTP handlers for the Brands API

use axum::{
    extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
    AppJson, UuidPath, ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::CatalogResult;
use crate::models::{Brand, BrandDetails, CreateBrand, UpdateBrand};
use crate::repository::{BrandRepository, ProductRepository};
use crate::response::{DataResponse, DeletedResponse, ListResponse};
use crate::service::BrandService;

/// OpenAPI documentation for the Brands API
#[derive(OpenApi)]
#[openapi(
    paths(get_all, create, get_by_id, update, remove),
    components(
        schemas(
            Brand, BrandDetails, CreateBrand, UpdateBrand,
            DataResponse<Brand>, DataResponse<BrandDetails>,
            ListResponse<BrandDetails>, DeletedResponse
        ),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Brands", description = "Brand management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the brands router with all HTTP endpoints
pub fn router<B, P>(service: BrandService<B, P>) -> Router
where
    B: BrandRepository + 'static,
    P: ProductRepository + 'static,
{
    Router::new()
        .route("/", get(get_all).post(create))
        .route("/{id}", get(get_by_id).put(update).delete(remove))
        .with_state(Arc::new(service))
}

/// List all brands
#[utoipa::path(
    get,
    path = "",
    tag = "Brands",
    responses(
        (status = 200, description = "Brands fetched", body = ListResponse<BrandDetails>),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_all<B: BrandRepository, P: ProductRepository>(
    State(service): State<Arc<BrandService<B, P>>>,
) -> CatalogResult<Json<ListResponse<BrandDetails>>> {
    let rows = service.list().await?;
    Ok(Json(ListResponse::new("Brands fetched", rows)))
}

/// Create a new brand
#[utoipa::path(
    post,
    path = "",
    tag = "Brands",
    request_body = CreateBrand,
    responses(
        (status = 201, description = "Brand created", body = DataResponse<Brand>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create<B: BrandRepository, P: ProductRepository>(
    State(service): State<Arc<BrandService<B, P>>>,
    ValidatedJson(input): ValidatedJson<CreateBrand>,
) -> CatalogResult<impl IntoResponse> {
    let brand = service.create(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            message: "Brand created",
            data: brand,
        }),
    ))
}

/// Get a brand by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Brands",
    params(
        ("id" = Uuid, Path, description = "Brand ID")
    ),
    responses(
        (status = 200, description = "Brand fetched", body = DataResponse<BrandDetails>),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_by_id<B: BrandRepository, P: ProductRepository>(
    State(service): State<Arc<BrandService<B, P>>>,
    UuidPath(id): UuidPath,
) -> CatalogResult<Json<DataResponse<BrandDetails>>> {
    let brand = service.get(id).await?;
    Ok(Json(DataResponse {
        message: "Brand fetched",
        data: brand,
    }))
}

/// Update a brand
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Brands",
    params(
        ("id" = Uuid, Path, description = "Brand ID")
    ),
    request_body = UpdateBrand,
    responses(
        (status = 200, description = "Brand updated", body = DataResponse<Brand>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update<B: BrandRepository, P: ProductRepository>(
    State(service): State<Arc<BrandService<B, P>>>,
    UuidPath(id): UuidPath,
    AppJson(input): AppJson<UpdateBrand>,
) -> CatalogResult<Json<DataResponse<Brand>>> {
    let brand = service.update(id, input).await?;
    Ok(Json(DataResponse {
        message: "Brand updated",
        data: brand,
    }))
}

/// Delete a brand
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Brands",
    params(
        ("id" = Uuid, Path, description = "Brand ID")
    ),
    responses(
        (status = 200, description = "Brand deleted", body = DeletedResponse),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn remove<B: BrandRepository, P: ProductRepository>(
    State(service): State<Arc<BrandService<B, P>>>,
    UuidPath(id): UuidPath,
) -> CatalogResult<Json<DeletedResponse>> {
    service.delete(id).await?;
    Ok(Json(DeletedResponse::with_outcome(
        "Brand deleted",
        "Remove",
        "Success",
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::repository::{MockBrandRepository, MockProductRepository};

    fn app(brands: MockBrandRepository, products: MockProductRepository) -> Router {
        router(BrandService::new(Arc::new(brands), Arc::new(products)))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_create_returns_envelope() {
        let mut brands = MockBrandRepository::new();
        brands.expect_insert().returning(|brand| Ok(brand));

        let (status, json) = send(
            app(brands, MockProductRepository::new()),
            post_json("/", r#"{"name": "Nike"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["message"], "Brand created");
        assert_eq!(json["data"]["name"], "Nike");
    }

    #[tokio::test]
    async fn test_create_short_name_reports_first_message_only() {
        let mut brands = MockBrandRepository::new();
        brands.expect_insert().never();

        let (status, json) = send(
            app(brands, MockProductRepository::new()),
            post_json("/", r#"{"name": "ab"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            json["message"],
            "Brand name must be at least 3 characters long."
        );
    }

    #[tokio::test]
    async fn test_get_all_empty_is_404_with_zero_count() {
        let mut brands = MockBrandRepository::new();
        brands.expect_list().returning(|| Ok(Vec::new()));

        let (status, json) = send(
            app(brands, MockProductRepository::new()),
            Request::builder().uri("/").body(Body::empty()).unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "Any brands not found");
        assert_eq!(json["count"], 0);
        assert!(json.get("rows").is_none());
    }

    #[tokio::test]
    async fn test_get_all_returns_rows_and_count() {
        let brand = Brand::new(CreateBrand {
            name: "Nike".to_string(),
        });

        let mut brands = MockBrandRepository::new();
        brands
            .expect_list()
            .returning(move || Ok(vec![brand.clone()]));

        let mut products = MockProductRepository::new();
        products.expect_get_refs().returning(|_| Ok(Vec::new()));

        let (status, json) = send(
            app(brands, products),
            Request::builder().uri("/").body(Body::empty()).unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Brands fetched");
        assert_eq!(json["count"], 1);
        assert_eq!(json["rows"][0]["name"], "Nike");
    }

    #[tokio::test]
    async fn test_get_by_id_unknown_is_404_without_data() {
        let mut brands = MockBrandRepository::new();
        brands.expect_get_by_id().returning(|_| Ok(None));

        let uri = format!("/{}", Uuid::now_v7());
        let (status, json) = send(
            app(brands, MockProductRepository::new()),
            Request::builder().uri(uri).body(Body::empty()).unwrap(),
        )
        .await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "Brand not found");
        assert!(json.get("data").is_none());
    }

    #[tokio::test]
    async fn test_get_by_id_invalid_uuid_is_400() {
        let (status, _) = send(
            app(MockBrandRepository::new(), MockProductRepository::new()),
            Request::builder()
                .uri("/not-a-uuid")
                .body(Body::empty())
                .unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_update_empty_body_is_400() {
        let brand = Brand::new(CreateBrand {
            name: "Nike".to_string(),
        });
        let id = brand.id;

        let mut brands = MockBrandRepository::new();
        brands
            .expect_get_by_id()
            .returning(move |_| Ok(Some(brand.clone())));

        let request = Request::builder()
            .method("PUT")
            .uri(format!("/{}", id))
            .header("content-type", "application/json")
            .body(Body::from(r#"{"unknown": true}"#))
            .unwrap();

        let (status, json) = send(app(brands, MockProductRepository::new()), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "At least one field must be provided.");
    }

    #[tokio::test]
    async fn test_create_truncated_body_keeps_json_envelope() {
        let (status, json) = send(
            app(MockBrandRepository::new(), MockProductRepository::new()),
            post_json("/", r#"{"name": "Nik"#),
        )
        .await;

        assert!(status.is_client_error());
        assert!(json["message"].is_string());
    }

    #[tokio::test]
    async fn test_update_truncated_body_keeps_json_envelope() {
        let request = Request::builder()
            .method("PUT")
            .uri(format!("/{}", Uuid::now_v7()))
            .header("content-type", "application/json")
            .body(Body::from(r#"{"name": "Nik"#))
            .unwrap();

        let (status, json) = send(
            app(MockBrandRepository::new(), MockProductRepository::new()),
            request,
        )
        .await;

        assert!(status.is_client_error());
        assert!(json["message"].is_string());
    }

    #[tokio::test]
    async fn test_delete_returns_operation_outcome() {
        let mut brands = MockBrandRepository::new();
        brands.expect_delete().returning(|_| Ok(true));

        let request = Request::builder()
            .method("DELETE")
            .uri(format!("/{}", Uuid::now_v7()))
            .body(Body::empty())
            .unwrap();

        let (status, json) = send(app(brands, MockProductRepository::new()), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["message"], "Brand deleted");
        assert_eq!(json["operation"], "Remove");
        assert_eq!(json["status"], "Success");
    }
}
