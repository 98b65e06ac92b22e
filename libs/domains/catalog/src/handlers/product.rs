//! HTTP handlers for the Products API

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
use crate::models::{CreateProduct, Product, UpdateProduct, Variant};
use crate::repository::{
    BrandRepository, CategoryRepository, ProductImageRepository, ProductRepository,
};
use crate::response::{DataResponse, DeletedResponse, ListResponse};
use crate::service::ProductService;

/// OpenAPI documentation for the Products API
#[derive(OpenApi)]
#[openapi(
    paths(get_all, create, get_by_id, update, remove),
    components(
        schemas(
            Product, Variant, CreateProduct, UpdateProduct,
            DataResponse<Product>, ListResponse<Product>, DeletedResponse
        ),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Products", description = "Product management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the products router with all HTTP endpoints
pub fn router<P, B, C, I>(service: ProductService<P, B, C, I>) -> Router
where
    P: ProductRepository + 'static,
    B: BrandRepository + 'static,
    C: CategoryRepository + 'static,
    I: ProductImageRepository + 'static,
{
    Router::new()
        .route("/", get(get_all).post(create))
        .route("/{id}", get(get_by_id).put(update).delete(remove))
        .with_state(Arc::new(service))
}

/// List all products
#[utoipa::path(
    get,
    path = "",
    tag = "Products",
    responses(
        (status = 200, description = "Products fetched", body = ListResponse<Product>),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_all<P, B, C, I>(
    State(service): State<Arc<ProductService<P, B, C, I>>>,
) -> CatalogResult<Json<ListResponse<Product>>>
where
    P: ProductRepository,
    B: BrandRepository,
    C: CategoryRepository,
    I: ProductImageRepository,
{
    let rows = service.list().await?;
    Ok(Json(ListResponse::new("Products fetched", rows)))
}

/// Create a new product
#[utoipa::path(
    post,
    path = "",
    tag = "Products",
    request_body = CreateProduct,
    responses(
        (status = 201, description = "Product created", body = DataResponse<Product>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create<P, B, C, I>(
    State(service): State<Arc<ProductService<P, B, C, I>>>,
    ValidatedJson(input): ValidatedJson<CreateProduct>,
) -> CatalogResult<impl IntoResponse>
where
    P: ProductRepository,
    B: BrandRepository,
    C: CategoryRepository,
    I: ProductImageRepository,
{
    let product = service.create(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            message: "Product created",
            data: product,
        }),
    ))
}

/// Get a product by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product fetched", body = DataResponse<Product>),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_by_id<P, B, C, I>(
    State(service): State<Arc<ProductService<P, B, C, I>>>,
    UuidPath(id): UuidPath,
) -> CatalogResult<Json<DataResponse<Product>>>
where
    P: ProductRepository,
    B: BrandRepository,
    C: CategoryRepository,
    I: ProductImageRepository,
{
    let product = service.get(id).await?;
    Ok(Json(DataResponse {
        message: "Product fetched",
        data: product,
    }))
}

/// Update a product
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    request_body = UpdateProduct,
    responses(
        (status = 200, description = "Product updated", body = DataResponse<Product>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update<P, B, C, I>(
    State(service): State<Arc<ProductService<P, B, C, I>>>,
    UuidPath(id): UuidPath,
    AppJson(input): AppJson<UpdateProduct>,
) -> CatalogResult<Json<DataResponse<Product>>>
where
    P: ProductRepository,
    B: BrandRepository,
    C: CategoryRepository,
    I: ProductImageRepository,
{
    let product = service.update(id, input).await?;
    Ok(Json(DataResponse {
        message: "Product updated",
        data: product,
    }))
}

/// Delete a product and its images
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Products",
    params(
        ("id" = Uuid, Path, description = "Product ID")
    ),
    responses(
        (status = 200, description = "Product deleted", body = DeletedResponse),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn remove<P, B, C, I>(
    State(service): State<Arc<ProductService<P, B, C, I>>>,
    UuidPath(id): UuidPath,
) -> CatalogResult<Json<DeletedResponse>>
where
    P: ProductRepository,
    B: BrandRepository,
    C: CategoryRepository,
    I: ProductImageRepository,
{
    service.delete(id).await?;
    Ok(Json(DeletedResponse::new("Product deleted")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use uuid::Uuid;

    use crate::repository::{
        MockBrandRepository, MockCategoryRepository, MockProductImageRepository,
        MockProductRepository,
    };

    fn app(
        products: MockProductRepository,
        brands: MockBrandRepository,
        categories: MockCategoryRepository,
        images: MockProductImageRepository,
    ) -> Router {
        router(ProductService::new(
            Arc::new(products),
            Arc::new(brands),
            Arc::new(categories),
            Arc::new(images),
        ))
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn test_create_returns_envelope_with_defaults() {
        let mut products = MockProductRepository::new();
        products.expect_insert().returning(|product| Ok(product));

        let mut brands = MockBrandRepository::new();
        brands.expect_exists().returning(|_| Ok(true));
        brands.expect_push_product().returning(|_, _| Ok(()));

        let mut categories = MockCategoryRepository::new();
        categories.expect_exists().returning(|_| Ok(true));
        categories.expect_push_product().returning(|_, _| Ok(()));

        let body = format!(
            r#"{{"name": "Air Max", "description": "Running shoe", "brand": "{}", "category": "{}", "variants": []}}"#,
            Uuid::now_v7(),
            Uuid::now_v7()
        );
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();

        let (status, json) = send(
            app(products, brands, categories, MockProductImageRepository::new()),
            request,
        )
        .await;

        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["message"], "Product created");
        assert_eq!(json["data"]["price"], 0.0);
        assert_eq!(json["data"]["isFeatured"], false);
        assert_eq!(json["data"]["numReviews"], 0);
    }

    #[tokio::test]
    async fn test_create_unknown_brand_is_400() {
        let mut brands = MockBrandRepository::new();
        brands.expect_exists().returning(|_| Ok(false));

        let body = format!(
            r#"{{"name": "Air Max", "description": "Running shoe", "brand": "{}", "category": "{}"}}"#,
            Uuid::now_v7(),
            Uuid::now_v7()
        );
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap();

        let (status, json) = send(
            app(
                MockProductRepository::new(),
                brands,
                MockCategoryRepository::new(),
                MockProductImageRepository::new(),
            ),
            request,
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["message"], "Brand does not exist.");
    }

    #[tokio::test]
    async fn test_get_all_empty_is_404_with_zero_count() {
        let mut products = MockProductRepository::new();
        products.expect_list().returning(|| Ok(Vec::new()));

        let (status, json) = send(
            app(
                products,
                MockBrandRepository::new(),
                MockCategoryRepository::new(),
                MockProductImageRepository::new(),
            ),
            Request::builder().uri("/").body(Body::empty()).unwrap(),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["message"], "Any products not found");
        assert_eq!(json["count"], 0);
    }
}
