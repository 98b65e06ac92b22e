use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::{name_rule, required_rule, rule_error};

/// Product variant, embedded in the owning product document
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    /// Option name, e.g. "Size"
    #[validate(custom(function = validate_option_name))]
    pub option_name: String,
    /// Option value, e.g. "42"
    #[validate(custom(function = validate_option_value))]
    pub option_value: String,
    /// Price delta relative to the product price
    #[serde(default)]
    pub price_modifier: f64,
    /// Stock quantity for this variant (0-255)
    #[serde(default)]
    pub quantity: u8,
}

/// Product entity - stored in the `products` collection
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub rich_description: String,
    /// Ordered ProductImage ids
    #[serde(default)]
    pub images: Vec<Uuid>,
    /// The main ProductImage id; source of truth for the main-image flag
    #[serde(default)]
    pub main_image: Option<Uuid>,
    /// Owning brand id
    pub brand: Uuid,
    /// Owning category id
    pub category: Uuid,
    #[serde(default)]
    pub price: f64,
    /// Embedded variants, may be empty
    pub variants: Vec<Variant>,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub num_reviews: i32,
    #[serde(default)]
    pub is_featured: bool,
    pub date_created: DateTime<Utc>,
}

/// Shallow `{_id, name}` reference used when expanding brand/category
/// back-reference arrays
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductRef {
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    pub name: String,
}

/// DTO for creating a new product.
///
/// `brand` and `category` must reference existing documents; the service
/// checks this before persisting.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateProduct {
    #[validate(custom(function = validate_product_name))]
    pub name: String,
    #[validate(custom(function = validate_description))]
    pub description: String,
    pub rich_description: Option<String>,
    pub brand: Uuid,
    pub category: Uuid,
    #[validate(custom(function = validate_price))]
    pub price: Option<f64>,
    #[validate(nested)]
    #[serde(default)]
    pub variants: Vec<Variant>,
    pub is_featured: Option<bool>,
}

/// DTO for updating a product.
///
/// Unknown body fields are accepted but never merged; at least one declared
/// field must be present. Brand and category assignments are fixed at
/// creation.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProduct {
    #[validate(custom(function = validate_product_name))]
    pub name: Option<String>,
    #[validate(custom(function = validate_description))]
    pub description: Option<String>,
    pub rich_description: Option<String>,
    #[validate(custom(function = validate_price))]
    pub price: Option<f64>,
    #[validate(nested)]
    pub variants: Option<Vec<Variant>>,
    pub is_featured: Option<bool>,
    #[serde(flatten)]
    #[schema(ignore)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl UpdateProduct {
    /// True when no declared field was provided.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.rich_description.is_none()
            && self.price.is_none()
            && self.variants.is_none()
            && self.is_featured.is_none()
    }
}

impl Product {
    pub fn new(input: CreateProduct) -> Self {
        Self {
            id: Uuid::now_v7(),
            name: input.name,
            description: input.description,
            rich_description: input.rich_description.unwrap_or_default(),
            images: Vec::new(),
            main_image: None,
            brand: input.brand,
            category: input.category,
            price: input.price.unwrap_or(0.0),
            variants: input.variants,
            rating: 0.0,
            num_reviews: 0,
            is_featured: input.is_featured.unwrap_or(false),
            date_created: Utc::now(),
        }
    }

    /// Merge declared update fields into the entity.
    pub fn apply_update(&mut self, update: UpdateProduct) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(rich_description) = update.rich_description {
            self.rich_description = rich_description;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        if let Some(variants) = update.variants {
            self.variants = variants;
        }
        if let Some(is_featured) = update.is_featured {
            self.is_featured = is_featured;
        }
    }
}

pub fn validate_product_name(name: &str) -> Result<(), ValidationError> {
    name_rule(name, "Product name", 3, 64)
}

pub fn validate_description(description: &str) -> Result<(), ValidationError> {
    required_rule(description, "Product description")
}

pub fn validate_option_name(option_name: &str) -> Result<(), ValidationError> {
    required_rule(option_name, "Variant option name")
}

pub fn validate_option_value(option_value: &str) -> Result<(), ValidationError> {
    required_rule(option_value, "Variant option value")
}

pub fn validate_price(price: f64) -> Result<(), ValidationError> {
    if price < 0.0 {
        return Err(rule_error(
            "range",
            "Product price must be zero or greater.".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_input() -> CreateProduct {
        CreateProduct {
            name: "Air Max".to_string(),
            description: "Running shoe".to_string(),
            rich_description: None,
            brand: Uuid::now_v7(),
            category: Uuid::now_v7(),
            price: Some(129.99),
            variants: vec![Variant {
                option_name: "Size".to_string(),
                option_value: "42".to_string(),
                price_modifier: 0.0,
                quantity: 10,
            }],
            is_featured: None,
        }
    }

    #[test]
    fn test_new_product_applies_defaults() {
        let product = Product::new(create_input());
        assert_eq!(product.rich_description, "");
        assert_eq!(product.rating, 0.0);
        assert_eq!(product.num_reviews, 0);
        assert!(!product.is_featured);
        assert!(product.images.is_empty());
        assert!(product.main_image.is_none());
    }

    #[test]
    fn test_create_product_rejects_negative_price() {
        let input = CreateProduct {
            price: Some(-1.0),
            ..create_input()
        };
        let errors = input.validate().unwrap_err();
        assert_eq!(
            axum_helpers::validation_messages(&errors),
            vec!["Product price must be zero or greater."]
        );
    }

    #[test]
    fn test_update_product_rejects_negative_price() {
        let update: UpdateProduct = serde_json::from_str(r#"{"price": -0.01}"#).unwrap();
        let errors = update.validate().unwrap_err();
        assert_eq!(
            axum_helpers::validation_messages(&errors),
            vec!["Product price must be zero or greater."]
        );
    }

    #[test]
    fn test_zero_price_is_accepted() {
        let input = CreateProduct {
            price: Some(0.0),
            ..create_input()
        };
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_create_product_rejects_blank_variant_option() {
        let input = CreateProduct {
            variants: vec![Variant {
                option_name: "".to_string(),
                option_value: "42".to_string(),
                price_modifier: 0.0,
                quantity: 0,
            }],
            ..create_input()
        };
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_update_product_is_empty() {
        let update: UpdateProduct = serde_json::from_str(r#"{"unknown": 1}"#).unwrap();
        assert!(update.is_empty());
    }

    #[test]
    fn test_wire_format_is_camel_case() {
        let product = Product::new(create_input());
        let json = serde_json::to_value(&product).unwrap();
        assert!(json.get("richDescription").is_some());
        assert!(json.get("isFeatured").is_some());
        assert!(json.get("numReviews").is_some());
        assert!(json.get("dateCreated").is_some());
        assert!(json.get("_id").is_some());
    }

    #[test]
    fn test_variant_quantity_rejects_out_of_range() {
        let result: Result<Variant, _> = serde_json::from_str(
            r#"{"optionName": "Size", "optionValue": "42", "quantity": 300}"#,
        );
        assert!(result.is_err());
    }
}
