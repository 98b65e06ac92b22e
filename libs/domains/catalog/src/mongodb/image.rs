//! MongoDB implementation of ProductImageRepository

use async_trait::async_trait;
use mongodb::{bson::doc, Collection, Database};
use tracing::instrument;
use uuid::Uuid;

use super::{id_filter, uuid_bson};
use crate::error::CatalogResult;
use crate::models::ProductImage;
use crate::repository::ProductImageRepository;

pub struct MongoProductImageRepository {
    collection: Collection<ProductImage>,
}

impl MongoProductImageRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<ProductImage>("productimages"),
        }
    }
}

#[async_trait]
impl ProductImageRepository for MongoProductImageRepository {
    #[instrument(skip(self, image), fields(image_id = %image.id, product_id = %image.product))]
    async fn insert(&self, image: ProductImage) -> CatalogResult<ProductImage> {
        self.collection.insert_one(&image).await?;
        tracing::info!("Product image inserted");
        Ok(image)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> CatalogResult<Option<ProductImage>> {
        Ok(self.collection.find_one(id_filter(id)).await?)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: Uuid) -> CatalogResult<bool> {
        let result = self.collection.delete_one(id_filter(id)).await?;
        Ok(result.deleted_count > 0)
    }

    #[instrument(skip(self))]
    async fn clear_main_flags(&self, product_id: Uuid) -> CatalogResult<()> {
        let filter = doc! { "product": uuid_bson(product_id) };
        let update = doc! { "$set": { "isMain": false } };
        self.collection.update_many(filter, update).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_main_flag(&self, id: Uuid, is_main: bool) -> CatalogResult<()> {
        let update = doc! { "$set": { "isMain": is_main } };
        self.collection.update_one(id_filter(id), update).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_by_product(&self, product_id: Uuid) -> CatalogResult<u64> {
        let filter = doc! { "product": uuid_bson(product_id) };
        let result = self.collection.delete_many(filter).await?;
        Ok(result.deleted_count)
    }
}
