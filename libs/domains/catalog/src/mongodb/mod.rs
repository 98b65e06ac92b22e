//! MongoDB implementations of the catalog repositories.

pub mod brand;
pub mod category;
pub mod image;
pub mod product;

pub use brand::MongoBrandRepository;
pub use category::MongoCategoryRepository;
pub use image::MongoProductImageRepository;
pub use product::MongoProductRepository;

use mongodb::bson::{doc, to_bson, Bson, Document};
use uuid::Uuid;

pub(crate) fn id_filter(id: Uuid) -> Document {
    doc! { "_id": uuid_bson(id) }
}

pub(crate) fn uuid_bson(id: Uuid) -> Bson {
    to_bson(&id).unwrap_or(Bson::Null)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_filter_uses_underscore_id() {
        let filter = id_filter(Uuid::now_v7());
        assert!(filter.contains_key("_id"));
        assert_ne!(filter.get("_id"), Some(&Bson::Null));
    }
}
