//! Catalog Domain
//!
//! Brands, categories, products (with embedded variants) and product images
//! persisted in MongoDB.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints, response envelopes
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation, cross-resource rules
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (traits + MongoDB implementations)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_catalog::{
//!     handlers,
//!     mongodb::{
//!         MongoBrandRepository, MongoCategoryRepository, MongoProductImageRepository,
//!         MongoProductRepository,
//!     },
//!     service::{BrandService, CategoryService, ProductImageService, ProductService},
//! };
//! use mongodb::Client;
//! use std::sync::Arc;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let db = client.database("catalog");
//!
//! let brands = Arc::new(MongoBrandRepository::new(&db));
//! let categories = Arc::new(MongoCategoryRepository::new(&db));
//! let products = Arc::new(MongoProductRepository::new(&db));
//! let images = Arc::new(MongoProductImageRepository::new(&db));
//!
//! let router = handlers::routes(
//!     BrandService::new(brands.clone(), products.clone()),
//!     CategoryService::new(categories.clone(), products.clone()),
//!     ProductService::new(products.clone(), brands, categories, images.clone()),
//!     ProductImageService::new(images, products),
//! );
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod response;
pub mod service;

pub use error::{CatalogError, CatalogResult};
pub use models::{
    Brand, BrandDetails, Category, CategoryDetails, CreateBrand, CreateCategory, CreateProduct,
    CreateProductImage, Product, ProductImage, ProductRef, UpdateBrand, UpdateCategory,
    UpdateProduct, Variant,
};
pub use mongodb::{
    MongoBrandRepository, MongoCategoryRepository, MongoProductImageRepository,
    MongoProductRepository,
};
pub use repository::{
    BrandRepository, CategoryRepository, ProductImageRepository, ProductRepository,
};
pub use service::{BrandService, CategoryService, ProductImageService, ProductService};
