//! MongoDB implementation of BrandRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{bson::doc, Collection, Database};
use tracing::instrument;
use uuid::Uuid;

use super::{id_filter, uuid_bson};
use crate::error::CatalogResult;
use crate::models::Brand;
use crate::repository::BrandRepository;

pub struct MongoBrandRepository {
    collection: Collection<Brand>,
}

impl MongoBrandRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<Brand>("brands"),
        }
    }
}

#[async_trait]
impl BrandRepository for MongoBrandRepository {
    #[instrument(skip(self, brand), fields(brand_id = %brand.id))]
    async fn insert(&self, brand: Brand) -> CatalogResult<Brand> {
        self.collection.insert_one(&brand).await?;
        tracing::info!("Brand inserted");
        Ok(brand)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> CatalogResult<Option<Brand>> {
        Ok(self.collection.find_one(id_filter(id)).await?)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> CatalogResult<Vec<Brand>> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    #[instrument(skip(self, brand), fields(brand_id = %brand.id))]
    async fn replace(&self, brand: Brand) -> CatalogResult<Brand> {
        self.collection
            .replace_one(id_filter(brand.id), &brand)
            .await?;
        tracing::info!("Brand replaced");
        Ok(brand)
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
