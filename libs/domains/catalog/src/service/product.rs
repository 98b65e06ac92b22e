//! Product business logic

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use super::{empty_update_error, validate_create, validate_update};
use crate::error::{CatalogError, CatalogResult};
use crate::models::{CreateProduct, Product, UpdateProduct};
use crate::repository::{
    BrandRepository, CategoryRepository, ProductImageRepository, ProductRepository,
};

/// Product service.
///
/// Creation verifies that the referenced brand and category exist and
/// appends the new product id to their back-reference arrays. Deletion
/// cascades: back-references are pulled and the product's images removed.
pub struct ProductService<P, B, C, I>
where
    P: ProductRepository,
    B: BrandRepository,
    C: CategoryRepository,
    I: ProductImageRepository,
{
    products: Arc<P>,
    brands: Arc<B>,
    categories: Arc<C>,
    images: Arc<I>,
}

impl<P, B, C, I> ProductService<P, B, C, I>
where
    P: ProductRepository,
    B: BrandRepository,
    C: CategoryRepository,
    I: ProductImageRepository,
{
    pub fn new(products: Arc<P>, brands: Arc<B>, categories: Arc<C>, images: Arc<I>) -> Self {
        Self {
            products,
            brands,
            categories,
            images,
        }
    }

    #[instrument(skip(self, input), fields(product_name = %input.name))]
    pub async fn create(&self, input: CreateProduct) -> CatalogResult<Product> {
        validate_create(&input)?;

        if !self.brands.exists(input.brand).await? {
            return Err(CatalogError::Validation(vec![
                "Brand does not exist.".to_string(),
            ]));
        }
        if !self.categories.exists(input.category).await? {
            return Err(CatalogError::Validation(vec![
                "Category does not exist.".to_string(),
            ]));
        }

        let product = self.products.insert(Product::new(input)).await?;

        self.brands.push_product(product.brand, product.id).await?;
        self.categories
            .push_product(product.category, product.id)
            .await?;

        Ok(product)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> CatalogResult<Product> {
        self.products
            .get_by_id(id)
            .await?
            .ok_or(CatalogError::NotFound("Product not found"))
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> CatalogResult<Vec<Product>> {
        let products = self.products.list().await?;
        if products.is_empty() {
            return Err(CatalogError::NoneFound("Any products not found"));
        }
        Ok(products)
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: Uuid, input: UpdateProduct) -> CatalogResult<Product> {
        let mut product = self
            .products
            .get_by_id(id)
            .await?
            .ok_or(CatalogError::NotFound("Product not found"))?;

        if input.is_empty() {
            return Err(empty_update_error());
        }
        validate_update(&input)?;

        product.apply_update(input);
        self.products.replace(product).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> CatalogResult<()> {
        let product = self
            .products
            .get_by_id(id)
            .await?
            .ok_or(CatalogError::NotFound("Product not found"))?;

        self.brands.pull_product(product.brand, product.id).await?;
        self.categories
            .pull_product(product.category, product.id)
            .await?;
        self.images.delete_by_product(product.id).await?;

        self.products.delete(id).await?;
        Ok(())
    }
}

impl<P, B, C, I> Clone for ProductService<P, B, C, I>
where
    P: ProductRepository,
    B: BrandRepository,
    C: CategoryRepository,
    I: ProductImageRepository,
{
    fn clone(&self) -> Self {
        Self {
            products: Arc::clone(&self.products),
            brands: Arc::clone(&self.brands),
            categories: Arc::clone(&self.categories),
            images: Arc::clone(&self.images),
        }
    }
}
