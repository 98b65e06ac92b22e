//! API routes module
//!
//! Wires the MongoDB repositories into the catalog services and mounts the
//! resource routers. These are nested under the configured API prefix by
//! `axum_helpers::create_router`.

pub mod health;

use std::sync::Arc;

use axum::Router;
use domain_catalog::handlers;
use domain_catalog::mongodb::{
    MongoBrandRepository, MongoCategoryRepository, MongoProductImageRepository,
    MongoProductRepository,
};
use domain_catalog::service::{BrandService, CategoryService, ProductImageService, ProductService};

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    let brands = Arc::new(MongoBrandRepository::new(&state.db));
    let categories = Arc::new(MongoCategoryRepository::new(&state.db));
    let products = Arc::new(MongoProductRepository::new(&state.db));
    let images = Arc::new(MongoProductImageRepository::new(&state.db));

    handlers::routes(
        BrandService::new(brands.clone(), products.clone()),
        CategoryService::new(categories.clone(), products.clone()),
        ProductService::new(products.clone(), brands, categories, images.clone()),
        ProductImageService::new(images, products),
    )
}
