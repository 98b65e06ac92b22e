//! Category business logic

use std::sync::Arc;
use tracing::instrument;
use uuid::Uuid;

use super::{empty_update_error, validate_create, validate_update};
use crate::error::{CatalogError, CatalogResult};
use crate::models::{Category, CategoryDetails, CreateCategory, UpdateCategory};
use crate::repository::{CategoryRepository, ProductRepository};

/// Category service.
///
/// Creation assigns a pseudo-random `#rrggbb` color when the request omits
/// one, so `color` is never empty after creation.
pub struct CategoryService<C: CategoryRepository, P: ProductRepository> {
    categories: Arc<C>,
    products: Arc<P>,
}

impl<C: CategoryRepository, P: ProductRepository> CategoryService<C, P> {
    pub fn new(categories: Arc<C>, products: Arc<P>) -> Self {
        Self {
            categories,
            products,
        }
    }

    #[instrument(skip(self, input), fields(category_name = %input.name))]
    pub async fn create(&self, input: CreateCategory) -> CatalogResult<Category> {
        validate_create(&input)?;
        self.categories.insert(Category::new(input)).await
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: Uuid) -> CatalogResult<CategoryDetails> {
        let category = self
            .categories
            .get_by_id(id)
            .await?
            .ok_or(CatalogError::NotFound("Category not found"))?;
        self.expand(category).await
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> CatalogResult<Vec<CategoryDetails>> {
        let categories = self.categories.list().await?;
        if categories.is_empty() {
            return Err(CatalogError::NoneFound("Any categories not found"));
        }

        let mut rows = Vec::with_capacity(categories.len());
        for category in categories {
            rows.push(self.expand(category).await?);
        }
        Ok(rows)
    }

    #[instrument(skip(self, input))]
    pub async fn update(&self, id: Uuid, input: UpdateCategory) -> CatalogResult<Category> {
        let mut category = self
            .categories
            .get_by_id(id)
            .await?
            .ok_or(CatalogError::NotFound("Category not found"))?;

        if input.is_empty() {
            return Err(empty_update_error());
        }
        validate_update(&input)?;

        category.apply_update(input);
        self.categories.replace(category).await
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, id: Uuid) -> CatalogResult<()> {
        if !self.categories.delete(id).await? {
            return Err(CatalogError::NotFound("Category not found"));
        }
        Ok(())
    }

    async fn expand(&self, category: Category) -> CatalogResult<CategoryDetails> {
        let products = self.products.get_refs(category.products).await?;
        Ok(CategoryDetails {
            id: category.id,
            name: category.name,
            icon: category.icon,
            color: category.color,
            image: category.image,
            products,
        })
    }
}

impl<C: CategoryRepository, P: ProductRepository> Clone for CategoryService<C, P> {
    fn clone(&self) -> Self {
        Self {
            categories: Arc::clone(&self.categories),
            products: Arc::clone(&self.products),
        }
    }
}
