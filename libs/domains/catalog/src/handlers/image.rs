//! HTTP handlers for the Product Images API

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use axum_helpers::{
    errors::responses::{
        BadRequestUuidResponse, BadRequestValidationResponse, InternalServerErrorResponse,
        NotFoundResponse,
    },
    UuidPath, ValidatedJson,
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::CatalogResult;
use crate::models::{CreateProductImage, ProductImage};
use crate::repository::{ProductImageRepository, ProductRepository};
use crate::response::{DataResponse, DeletedResponse};
use crate::service::ProductImageService;

/// OpenAPI documentation for the Product Images API
#[derive(OpenApi)]
#[openapi(
    paths(create, get_by_id, remove, set_main),
    components(
        schemas(
            ProductImage, CreateProductImage,
            DataResponse<ProductImage>, DeletedResponse
        ),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Product Images", description = "Product image management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the product images router with all HTTP endpoints
pub fn router<I, P>(service: ProductImageService<I, P>) -> Router
where
    I: ProductImageRepository + 'static,
    P: ProductRepository + 'static,
{
    Router::new()
        .route("/", post(create))
        .route("/{id}", get(get_by_id).delete(remove))
        .route("/{id}/main", post(set_main))
        .with_state(Arc::new(service))
}

/// Create a new product image
#[utoipa::path(
    post,
    path = "",
    tag = "Product Images",
    request_body = CreateProductImage,
    responses(
        (status = 201, description = "Product image created", body = DataResponse<ProductImage>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create<I: ProductImageRepository, P: ProductRepository>(
    State(service): State<Arc<ProductImageService<I, P>>>,
    ValidatedJson(input): ValidatedJson<CreateProductImage>,
) -> CatalogResult<impl IntoResponse> {
    let image = service.create(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            message: "Product image created",
            data: image,
        }),
    ))
}

/// Get a product image by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Product Images",
    params(
        ("id" = Uuid, Path, description = "Product image ID")
    ),
    responses(
        (status = 200, description = "Product image fetched", body = DataResponse<ProductImage>),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_by_id<I: ProductImageRepository, P: ProductRepository>(
    State(service): State<Arc<ProductImageService<I, P>>>,
    UuidPath(id): UuidPath,
) -> CatalogResult<Json<DataResponse<ProductImage>>> {
    let image = service.get(id).await?;
    Ok(Json(DataResponse {
        message: "Product image fetched",
        data: image,
    }))
}

/// Delete a product image
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Product Images",
    params(
        ("id" = Uuid, Path, description = "Product image ID")
    ),
    responses(
        (status = 200, description = "Product image deleted", body = DeletedResponse),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn remove<I: ProductImageRepository, P: ProductRepository>(
    State(service): State<Arc<ProductImageService<I, P>>>,
    UuidPath(id): UuidPath,
) -> CatalogResult<Json<DeletedResponse>> {
    service.delete(id).await?;
    Ok(Json(DeletedResponse::new("Product image deleted")))
}

/// Make an image the main image of its product
#[utoipa::path(
    post,
    path = "/{id}/main",
    tag = "Product Images",
    params(
        ("id" = Uuid, Path, description = "Product image ID")
    ),
    responses(
        (status = 200, description = "Main image set", body = DataResponse<ProductImage>),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn set_main<I: ProductImageRepository, P: ProductRepository>(
    State(service): State<Arc<ProductImageService<I, P>>>,
    UuidPath(id): UuidPath,
) -> CatalogResult<Json<DataResponse<ProductImage>>> {
    let image = service.set_main(id).await?;
    Ok(Json(DataResponse {
        message: "Main image set",
        data: image,
    }))
}
