//! Product image business logic

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use super::validate_create;
use crate::error::{CatalogError, CatalogResult};
use crate::models::{CreateProductImage, ProductImage};
use crate::repository::{ProductImageRepository, ProductRepository};

/// Product image service.
///
/// Maintains the main-image invariant: `Product.mainImage` is the source of
/// truth, the per-image `isMain` flag is denormalized from it.
pub struct ProductImageService<I: ProductImageRepository, P: ProductRepository> {
    images: Arc<I>,
    products: Arc<P>,
}

impl<I: ProductImageRepository, P: ProductRepository> ProductImageService<I, P> {
    pub fn new(images: Arc<I>, products: Arc<P>) -> Self {
        Self { images, products }
    }

    #[instrument(skip(self, input), fields(product_id = %input.product))]
    pub async fn create(&self, input: CreateProductImage) -> CatalogResult<ProductImage> {
        validate_create(&input)?;

        if !self.products.exists(input.product).await? {
            return Err(CatalogError::Validation(vec![
                "Product does not exist.".to_string(),
            ]));
        }

        let image = self.images.insert(ProductImage::new(input)).await?;
        self.products.push_image(image.product, image.id).await?;

        if image.is_main {
            return self.set_main(image.id).await;
        }
        Ok(image)
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> CatalogResult<ProductImage> {
        self.images
            .get_by_id(id)
            .await?
            .ok_or(CatalogError::NotFound("Product image not found"))
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> CatalogResult<()> {
        let image = self
            .images
            .get_by_id(id)
            .await?
            .ok_or(CatalogError::NotFound("Product image not found"))?;

        self.products.pull_image(image.product, image.id).await?;

        let owner = self.products.get_by_id(image.product).await?;
        if owner.and_then(|p| p.main_image) == Some(id) {
            self.products.set_main_image(image.product, None).await?;
        }

        self.images.delete(id).await?;
        Ok(())
    }

    /// Make an image the main image of its product.
    ///
    /// `Product.mainImage` is written first; the denormalized flags follow
    /// (all siblings cleared, then the target set). Under a
    /// no-concurrent-writer assumption the flags end consistent with the
    /// pointer.
    #[instrument(skip(self))]
    pub async fn set_main(&self, id: Uuid) -> CatalogResult<ProductImage> {
        let image = self
            .images
            .get_by_id(id)
            .await?
            .ok_or(CatalogError::NotFound("Product image not found"))?;

        self.products
            .set_main_image(image.product, Some(image.id))
            .await?;
        self.images.clear_main_flags(image.product).await?;
        self.images.set_main_flag(image.id, true).await?;

        Ok(ProductImage {
            is_main: true,
            ..image
        })
    }
}

impl<I: ProductImageRepository, P: ProductRepository> Clone for ProductImageService<I, P> {
    fn clone(&self) -> Self {
        Self {
            images: Arc::clone(&self.images),
            products: Arc::clone(&self.products),
        }
    }
}
