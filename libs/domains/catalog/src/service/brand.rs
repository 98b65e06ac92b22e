//! Brand business logic

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use super::{empty_update_error, validate_create, validate_update};
use crate::error::{CatalogError, CatalogResult};
use crate::models::{Brand, BrandDetails, CreateBrand, UpdateBrand};
use crate::repository::{BrandRepository, ProductRepository};

/// Brand service.
///
/// Holds the brand repository plus the product repository used to expand
/// back-reference arrays into `{_id, name}` pairs.
pub struct BrandService<B: BrandRepository, P: ProductRepository> {
    brands: Arc<B>,
    products: Arc<P>,
}

impl<B: BrandRepository, P: ProductRepository> BrandService<B, P> {
    pub fn new(brands: Arc<B>, products: Arc<P>) -> Self {
        Self { brands, products }
    }

    #[instrument(skip(self, input), fields(brand_name = %input.name))]
    pub async fn create(&self, input: CreateBrand) -> CatalogResult<Brand> {
        validate_create(&input)?;
        self.brands.insert(Brand::new(input)).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> CatalogResult<BrandDetails> {
        let brand = self
            .brands
            .get_by_id(id)
            .await?
            .ok_or(CatalogError::NotFound("Brand not found"))?;
        self.expand(brand).await
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> CatalogResult<Vec<BrandDetails>> {
        let brands = self.brands.list().await?;
        if brands.is_empty() {
            return Err(CatalogError::NoneFound("Any brands not found"));
        }

        let mut rows = Vec::with_capacity(brands.len());
        for brand in brands {
            rows.push(self.expand(brand).await?);
        }
        Ok(rows)
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: Uuid, input: UpdateBrand) -> CatalogResult<Brand> {
        let mut brand = self
            .brands
            .get_by_id(id)
            .await?
            .ok_or(CatalogError::NotFound("Brand not found"))?;

        if input.is_empty() {
            return Err(empty_update_error());
        }
        validate_update(&input)?;

        brand.apply_update(input);
        self.brands.replace(brand).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> CatalogResult<()> {
        if !self.brands.delete(id).await? {
            return Err(CatalogError::NotFound("Brand not found"));
        }
        Ok(())
    }

    async fn expand(&self, brand: Brand) -> CatalogResult<BrandDetails> {
        let products = self.products.get_refs(brand.products).await?;
        Ok(BrandDetails {
            id: brand.id,
            name: brand.name,
            products,
        })
    }
}

impl<B: BrandRepository, P: ProductRepository> Clone for BrandService<B, P> {
    fn clone(&self) -> Self {
        Self {
            brands: Arc::clone(&self.brands),
            products: Arc::clone(&self.products),
        }
    }
}
