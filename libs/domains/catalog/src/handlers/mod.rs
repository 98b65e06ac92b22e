//! HTTP handlers for the catalog API.
//!
//! Each resource gets its own router and OpenAPI fragment; [`routes`]
//! combines them under `/brands`, `/categories`, `/products` and
//! `/product-images`.

pub mod brand;
pub mod category;
pub mod image;
pub mod product;

use axum::Router;

use crate::repository::{
    BrandRepository, CategoryRepository, ProductImageRepository, ProductRepository,
};
use crate::service::{BrandService, CategoryService, ProductImageService, ProductService};

/// Combine the per-resource routers into the catalog API router.
pub fn routes<B, C, P, I>(
    brands: BrandService<B, P>,
    categories: CategoryService<C, P>,
    products: ProductService<P, B, C, I>,
    images: ProductImageService<I, P>,
) -> Router
where
    B: BrandRepository + 'static,
    C: CategoryRepository + 'static,
    P: ProductRepository + 'static,
    I: ProductImageRepository + 'static,
{
    Router::new()
        .nest("/brands", brand::router(brands))
        .nest("/categories", category::router(categories))
        .nest("/products", product::router(products))
        .nest("/product-images", image::router(images))
}
