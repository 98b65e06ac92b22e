use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::required_rule;

/// Product image entity - stored in the `productimages` collection.
///
/// At most one image per product carries `isMain = true`; the owning
/// product's `mainImage` field is the source of truth.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductImage {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub url: String,
    #[serde(default = "default_dimension")]
    pub width: i32,
    #[serde(default = "default_dimension")]
    pub height: i32,
    #[serde(default)]
    pub alt: String,
    #[serde(default)]
    pub title: String,
    /// Owning product id
    pub product: Uuid,
    /// Denormalized main-image flag
    #[serde(default)]
    pub is_main: bool,
}

/// DTO for creating a product image.
///
/// `product` must reference an existing document; the service checks this
/// before persisting.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductImage {
    #[validate(custom(function = validate_url))]
    pub url: String,
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub alt: Option<String>,
    pub title: Option<String>,
    pub product: Uuid,
    pub is_main: Option<bool>,
}

impl ProductImage {
    pub fn new(input: CreateProductImage) -> Self {
        Self {
            id: Uuid::now_v7(),
            url: input.url,
            width: input.width.unwrap_or_else(default_dimension),
            height: input.height.unwrap_or_else(default_dimension),
            alt: input.alt.unwrap_or_default(),
            title: input.title.unwrap_or_default(),
            product: input.product,
            is_main: input.is_main.unwrap_or(false),
        }
    }
}

fn default_dimension() -> i32 {
    100
}

pub fn validate_url(url: &str) -> Result<(), ValidationError> {
    required_rule(url, "Image url")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_input() -> CreateProductImage {
        CreateProductImage {
            url: "https://cdn.example.com/shoe.jpg".to_string(),
            width: None,
            height: None,
            alt: None,
            title: None,
            product: Uuid::now_v7(),
            is_main: None,
        }
    }

    #[test]
    fn test_new_image_applies_defaults() {
        let image = ProductImage::new(create_input());
        assert_eq!(image.width, 100);
        assert_eq!(image.height, 100);
        assert_eq!(image.alt, "");
        assert_eq!(image.title, "");
        assert!(!image.is_main);
    }

    #[test]
    fn test_create_image_rejects_blank_url() {
        let input = CreateProductImage {
            url: " ".to_string(),
            ..create_input()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let image = ProductImage::new(CreateProductImage {
            is_main: Some(true),
            ..create_input()
        });
        let json = serde_json::to_value(&image).unwrap();
        assert_eq!(json["isMain"], true);
        assert!(json.get("_id").is_some());
    }
}
