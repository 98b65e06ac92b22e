//! HTTP handlers for the Categories API

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
use crate::models::{Category, CategoryDetails, CreateCategory, UpdateCategory};
use crate::repository::{CategoryRepository, ProductRepository};
use crate::response::{DataResponse, DeletedResponse, ListResponse};
use crate::service::CategoryService;

/// OpenAPI documentation for the Categories API
#[derive(OpenApi)]
#[openapi(
    paths(get_all, create, get_by_id, update, remove),
    components(
        schemas(
            Category, CategoryDetails, CreateCategory, UpdateCategory,
            DataResponse<Category>, DataResponse<CategoryDetails>,
            ListResponse<CategoryDetails>, DeletedResponse
        ),
        responses(
            NotFoundResponse,
            BadRequestValidationResponse,
            BadRequestUuidResponse,
            InternalServerErrorResponse
        )
    ),
    tags(
        (name = "Categories", description = "Category management endpoints")
    )
)]
pub struct ApiDoc;

/// Create the categories router with all HTTP endpoints
pub fn router<C, P>(service: CategoryService<C, P>) -> Router
where
    C: CategoryRepository + 'static,
    P: ProductRepository + 'static,
{
    Router::new()
        .route("/", get(get_all).post(create))
        .route("/{id}", get(get_by_id).put(update).delete(remove))
        .with_state(Arc::new(service))
}

/// List all categories
#[utoipa::path(
    get,
    path = "",
    tag = "Categories",
    responses(
        (status = 200, description = "Categories fetched", body = ListResponse<CategoryDetails>),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_all<C: CategoryRepository, P: ProductRepository>(
    State(service): State<Arc<CategoryService<C, P>>>,
) -> CatalogResult<Json<ListResponse<CategoryDetails>>> {
    let rows = service.list().await?;
    Ok(Json(ListResponse::new("Categories fetched", rows)))
}

/// Create a new category
#[utoipa::path(
    post,
    path = "",
    tag = "Categories",
    request_body = CreateCategory,
    responses(
        (status = 201, description = "Category created", body = DataResponse<Category>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn create<C: CategoryRepository, P: ProductRepository>(
    State(service): State<Arc<CategoryService<C, P>>>,
    ValidatedJson(input): ValidatedJson<CreateCategory>,
) -> CatalogResult<impl IntoResponse> {
    let category = service.create(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            message: "Category created",
            data: category,
        }),
    ))
}

/// Get a category by ID
#[utoipa::path(
    get,
    path = "/{id}",
    tag = "Categories",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category fetched", body = DataResponse<CategoryDetails>),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn get_by_id<C: CategoryRepository, P: ProductRepository>(
    State(service): State<Arc<CategoryService<C, P>>>,
    UuidPath(id): UuidPath,
) -> CatalogResult<Json<DataResponse<CategoryDetails>>> {
    let category = service.get(id).await?;
    Ok(Json(DataResponse {
        message: "Category fetched",
        data: category,
    }))
}

/// Update a category
#[utoipa::path(
    put,
    path = "/{id}",
    tag = "Categories",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    request_body = UpdateCategory,
    responses(
        (status = 200, description = "Category updated", body = DataResponse<Category>),
        (status = 400, response = BadRequestValidationResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn update<C: CategoryRepository, P: ProductRepository>(
    State(service): State<Arc<CategoryService<C, P>>>,
    UuidPath(id): UuidPath,
    AppJson(input): AppJson<UpdateCategory>,
) -> CatalogResult<Json<DataResponse<Category>>> {
    let category = service.update(id, input).await?;
    Ok(Json(DataResponse {
        message: "Category updated",
        data: category,
    }))
}

/// Delete a category
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = "Categories",
    params(
        ("id" = Uuid, Path, description = "Category ID")
    ),
    responses(
        (status = 200, description = "Category deleted", body = DeletedResponse),
        (status = 400, response = BadRequestUuidResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = InternalServerErrorResponse)
    )
)]
async fn remove<C: CategoryRepository, P: ProductRepository>(
    State(service): State<Arc<CategoryService<C, P>>>,
    UuidPath(id): UuidPath,
) -> CatalogResult<Json<DeletedResponse>> {
    service.delete(id).await?;
    Ok(Json(DeletedResponse::new("Category deleted")))
}
