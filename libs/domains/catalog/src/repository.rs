//! Data access traits for the catalog domain.
//!
//! Services receive constructed repositories, so storage backends can be
//! swapped and the traits mocked in unit tests.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::CatalogResult;
use crate::models::{Brand, Category, Product, ProductImage, ProductRef};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BrandRepository: Send + Sync {
    /// Persist a new brand
    async fn insert(&self, brand: Brand) -> CatalogResult<Brand>;

    /// Get a brand by ID
    async fn get_by_id(&self, id: Uuid) -> CatalogResult<Option<Brand>>;

    /// List all brands
    async fn list(&self) -> CatalogResult<Vec<Brand>>;

    /// Replace a brand document with its merged state
    async fn replace(&self, brand: Brand) -> CatalogResult<Brand>;

    /// Delete a brand by ID, returning whether a document was removed
    async fn delete(&self, id: Uuid) -> CatalogResult<bool>;

    /// Check whether a brand exists
    async fn exists(&self, id: Uuid) -> CatalogResult<bool>;

    /// Add a product id to the brand's back-reference array
    async fn push_product(&self, id: Uuid, product_id: Uuid) -> CatalogResult<()>;

    /// Remove a product id from the brand's back-reference array
    async fn pull_product(&self, id: Uuid, product_id: Uuid) -> CatalogResult<()>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Persist a new category
    async fn insert(&self, category: Category) -> CatalogResult<Category>;

    /// Get a category by ID
    async fn get_by_id(&self, id: Uuid) -> CatalogResult<Option<Category>>;

    /// List all categories
    async fn list(&self) -> CatalogResult<Vec<Category>>;

    /// Replace a category document with its merged state
    async fn replace(&self, category: Category) -> CatalogResult<Category>;

    /// Delete a category by ID, returning whether a document was removed
    async fn delete(&self, id: Uuid) -> CatalogResult<bool>;

    /// Check whether a category exists
    async fn exists(&self, id: Uuid) -> CatalogResult<bool>;

    /// Add a product id to the category's back-reference array
    async fn push_product(&self, id: Uuid, product_id: Uuid) -> CatalogResult<()>;

    /// Remove a product id from the category's back-reference array
    async fn pull_product(&self, id: Uuid, product_id: Uuid) -> CatalogResult<()>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Persist a new product
    async fn insert(&self, product: Product) -> CatalogResult<Product>;

    /// Get a product by ID
    async fn get_by_id(&self, id: Uuid) -> CatalogResult<Option<Product>>;

    /// List all products
    async fn list(&self) -> CatalogResult<Vec<Product>>;

    /// Replace a product document with its merged state
    async fn replace(&self, product: Product) -> CatalogResult<Product>;

    /// Delete a product by ID, returning whether a document was removed
    async fn delete(&self, id: Uuid) -> CatalogResult<bool>;

    /// Check whether a product exists
    async fn exists(&self, id: Uuid) -> CatalogResult<bool>;

    /// Resolve product ids to shallow `{_id, name}` references
    async fn get_refs(&self, ids: Vec<Uuid>) -> CatalogResult<Vec<ProductRef>>;

    /// Add an image id to the product's ordered image array
    async fn push_image(&self, id: Uuid, image_id: Uuid) -> CatalogResult<()>;

    /// Remove an image id from the product's ordered image array
    async fn pull_image(&self, id: Uuid, image_id: Uuid) -> CatalogResult<()>;

    /// Set or clear the product's main-image pointer
    async fn set_main_image(&self, id: Uuid, image_id: Option<Uuid>) -> CatalogResult<()>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductImageRepository: Send + Sync {
    /// Persist a new image
    async fn insert(&self, image: ProductImage) -> CatalogResult<ProductImage>;

    /// Get an image by ID
    async fn get_by_id(&self, id: Uuid) -> CatalogResult<Option<ProductImage>>;

    /// Delete an image by ID, returning whether a document was removed
    async fn delete(&self, id: Uuid) -> CatalogResult<bool>;

    /// Clear the denormalized main flag on every image of a product
    async fn clear_main_flags(&self, product_id: Uuid) -> CatalogResult<()>;

    /// Set the denormalized main flag on a single image
    async fn set_main_flag(&self, id: Uuid, is_main: bool) -> CatalogResult<()>;

    /// Delete every image belonging to a product, returning the count
    async fn delete_by_product(&self, product_id: Uuid) -> CatalogResult<u64>;
}
