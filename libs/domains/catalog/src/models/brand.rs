use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::{name_rule, ProductRef};

/// Brand entity - stored in the `brands` collection
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Brand {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Brand name
    pub name: String,
    /// Ids of products carrying this brand (back-references, display only)
    #[serde(default)]
    pub products: Vec<Uuid>,
}

/// Brand with its product references expanded to `{_id, name}` pairs
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct BrandDetails {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    pub products: Vec<ProductRef>,
}

/// DTO for creating a new brand.
///
/// Unknown body fields are stripped by deserialization.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateBrand {
    #[validate(custom(function = validate_brand_name))]
    pub name: String,
}

/// DTO for updating a brand.
///
/// Unknown body fields are accepted but never merged; at least one declared
/// field must be present.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateBrand {
    #[validate(custom(function = validate_brand_name))]
    pub name: Option<String>,
    #[serde(flatten)]
    #[schema(ignore)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl UpdateBrand {
    /// True when no declared field was provided.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
    }
}

impl Brand {
    pub fn new(input: CreateBrand) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            products: Vec::new(),
        }
    }

    /// Merge declared update fields into the entity.
    pub fn apply_update(&mut self, update: UpdateBrand) {
        if let Some(name) = update.name {
            self.name = name;
        }
    }
}

pub fn validate_brand_name(name: &str) -> Result<(), ValidationError> {
    name_rule(name, "Brand name", 3, 64)
}
