//! MongoDB implementation of CategoryRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{bson::doc, Collection, Database};
use tracing::instrument;
use uuid::Uuid;

use super::{id_filter, uuid_bson};
use crate::error::CatalogResult;
use crate::models::Category;
use crate::repository::CategoryRepository;

pub struct MongoCategoryRepository {
    collection: Collection<Category>,
}

impl MongoCategoryRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<Category>("categories"),
        }
    }
}

#[async_trait]
impl CategoryRepository for MongoCategoryRepository {
    #[instrument(skip(self, category), fields(category_id = %category.id))]
    async fn insert(&self, category: Category) -> CatalogResult<Category> {
        self.collection.insert_one(&category).await?;
        tracing::info!("Category inserted");
        Ok(category)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> CatalogResult<Option<Category>> {
        Ok(self.collection.find_one(id_filter(id)).await?)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> CatalogResult<Vec<Category>> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    #[instrument(skip(self, category), fields(category_id = %category.id))]
    async fn replace(&self, category: Category) -> CatalogResult<Category> {
        self.collection
            .replace_one(id_filter(category.id), &category)
            .await?;
        tracing::info!("Category replaced");
        Ok(category)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> CatalogResult<bool> {
        let result = self.collection.delete_one(id_filter(id)).await?;
        Ok(result.deleted_count > 0)
    }

    #[instrument(skip(self))]
    async fn exists(&self, id: Uuid) -> CatalogResult<bool> {
        let count = self.collection.count_documents(id_filter(id)).await?;
        Ok(count > 0)
    }

    #[instrument(skip(self))]
    async fn push_product(&self, id: Uuid, product_id: Uuid) -> CatalogResult<()> {
        let update = doc! { "$addToSet": { "products": uuid_bson(product_id) } };
        self.collection.update_one(id_filter(id), update).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn pull_product(&self, id: Uuid, product_id: Uuid) -> CatalogResult<()> {
        let update = doc! { "$pull": { "products": uuid_bson(product_id) } };
        self.collection.update_one(id_filter(id), update).await?;
        Ok(())
    }
}
