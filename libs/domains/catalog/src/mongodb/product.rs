//! MongoDB implementation of ProductRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{
    bson::{doc, Bson},
    Collection, Database,
};
use tracing::instrument;
use uuid::Uuid;

use super::{id_filter, uuid_bson};
use crate::error::CatalogResult;
use crate::models::{Product, ProductRef};
use crate::repository::ProductRepository;

pub struct MongoProductRepository {
    collection: Collection<Product>,
}

impl MongoProductRepository {
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.collection::<Product>("products"),
        }
    }
}

#[async_trait]
impl ProductRepository for MongoProductRepository {
    #[instrument(skip(self, product), fields(product_id = %product.id, product_name = %product.name))]
    async fn insert(&self, product: Product) -> CatalogResult<Product> {
        self.collection.insert_one(&product).await?;
        tracing::info!("Product inserted");
        Ok(product)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: Uuid) -> CatalogResult<Option<Product>> {
        Ok(self.collection.find_one(id_filter(id)).await?)
    }

    #[instrument(skip(self))]
    async fn list(&self) -> CatalogResult<Vec<Product>> {
        let cursor = self.collection.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    #[instrument(skip(self, product), fields(product_id = %product.id))]
    async fn replace(&self, product: Product) -> CatalogResult<Product> {
        self.collection
            .replace_one(id_filter(product.id), &product)
            .await?;
        tracing::info!("Product replaced");
        Ok(product)
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

    #[instrument(skip(self, ids), fields(id_count = ids.len()))]
    async fn get_refs(&self, ids: Vec<Uuid>) -> CatalogResult<Vec<ProductRef>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let ids_bson: Vec<Bson> = ids.iter().map(|id| uuid_bson(*id)).collect();
        let filter = doc! { "_id": { "$in": ids_bson } };

        let cursor = self
            .collection
            .clone_with_type::<ProductRef>()
            .find(filter)
            .await?;
        Ok(cursor.try_collect().await?)
    }

    #[instrument(skip(self))]
    async fn push_image(&self, id: Uuid, image_id: Uuid) -> CatalogResult<()> {
        let update = doc! { "$addToSet": { "images": uuid_bson(image_id) } };
        self.collection.update_one(id_filter(id), update).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn pull_image(&self, id: Uuid, image_id: Uuid) -> CatalogResult<()> {
        let update = doc! { "$pull": { "images": uuid_bson(image_id) } };
        self.collection.update_one(id_filter(id), update).await?;
        Ok(())
    }

    #[instrument(skip(self))]
    async fn set_main_image(&self, id: Uuid, image_id: Option<Uuid>) -> CatalogResult<()> {
        let value = match image_id {
            Some(image_id) => uuid_bson(image_id),
            None => Bson::Null,
        };
        let update = doc! { "$set": { "mainImage": value } };
        self.collection.update_one(id_filter(id), update).await?;
        Ok(())
    }
}
