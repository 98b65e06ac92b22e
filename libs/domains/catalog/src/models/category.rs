use rand::Rng;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use super::{name_rule, ProductRef};

/// Category entity - stored in the `categories` collection
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Category {
    /// Unique identifier (stored as _id in MongoDB)
    #[serde(rename = "_id", alias = "id")]
    pub id: Uuid,
    /// Category name
    pub name: String,
    /// Icon identifier
    #[serde(default)]
    pub icon: Option<String>,
    /// Display color, never empty after creation
    pub color: String,
    /// Image URL
    #[serde(default)]
    pub image: String,
    /// Ids of products in this category (back-references, display only)
    #[serde(default)]
    pub products: Vec<Uuid>,
}

/// Category with its product references expanded to `{_id, name}` pairs
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryDetails {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    pub color: String,
    pub image: String,
    pub products: Vec<ProductRef>,
}

/// DTO for creating a new category.
///
/// Unknown body fields are stripped by deserialization. When `color` is
/// omitted or blank a pseudo-random `#rrggbb` color is assigned.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCategory {
    #[validate(custom(function = validate_category_name))]
    pub name: String,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub image: Option<String>,
}

/// DTO for updating a category.
///
/// Unknown body fields are accepted but never merged; at least one declared
/// field must be present.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateCategory {
    #[validate(custom(function = validate_category_name))]
    pub name: Option<String>,
    pub icon: Option<String>,
    pub color: Option<String>,
    pub image: Option<String>,
    #[serde(flatten)]
    #[schema(ignore)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl UpdateCategory {
    /// True when no declared field was provided.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.icon.is_none() && self.color.is_none() && self.image.is_none()
    }
}

impl Category {
    pub fn new(input: CreateCategory) -> Self {
        let color = input
            .color
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(default_color);

        Self {
            id: Uuid::now_v7(),
            name: input.name,
            icon: input.icon,
            color,
            image: input.image.unwrap_or_default(),
            products: Vec::new(),
        }
    }

    /// Merge declared update fields into the entity.
    pub fn apply_update(&mut self, update: UpdateCategory) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(icon) = update.icon {
            self.icon = Some(icon);
        }
        if let Some(color) = update.color {
            self.color = color;
        }
        if let Some(image) = update.image {
            self.image = image;
        }
    }
}

/// Pseudo-random `#rrggbb` hex color for categories created without one.
pub fn default_color() -> String {
    format!("#{:06x}", rand::rng().random_range(0..0x100_0000u32))
}

pub fn validate_category_name(name: &str) -> Result<(), ValidationError> {
    name_rule(name, "Category name", 3, 64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_color_is_hex() {
        for _ in 0..32 {
            let color = default_color();
            assert_eq!(color.len(), 7);
            assert!(color.starts_with('#'));
            assert!(color[1..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn test_new_category_assigns_color_when_omitted() {
        let category = Category::new(CreateCategory {
            name: "Shoes".to_string(),
            icon: None,
            color: None,
            image: None,
        });
        assert!(!category.color.is_empty());
        assert!(category.color.starts_with('#'));
        assert_eq!(category.image, "");
    }

    #[test]
    fn test_new_category_assigns_color_when_blank() {
        let category = Category::new(CreateCategory {
            name: "Shoes".to_string(),
            icon: None,
            color: Some("  ".to_string()),
            image: None,
        });
        assert!(category.color.trim().len() > 1);
    }

    #[test]
    fn test_new_category_keeps_provided_color() {
        let category = Category::new(CreateCategory {
            name: "Shoes".to_string(),
            icon: None,
            color: Some("#ff0000".to_string()),
            image: None,
        });
        assert_eq!(category.color, "#ff0000");
    }

    #[test]
    fn test_update_category_is_empty_with_unknown_fields_only() {
        let update: UpdateCategory = serde_json::from_str(r#"{"bogus": true}"#).unwrap();
        assert!(update.is_empty());
    }

    #[test]
    fn test_apply_update_merges_partial_fields() {
        let mut category = Category::new(CreateCategory {
            name: "Shoes".to_string(),
            icon: Some("shoe".to_string()),
            color: Some("#ff0000".to_string()),
            image: None,
        });
        category.apply_update(UpdateCategory {
            color: Some("#00ff00".to_string()),
            ..Default::default()
        });
        assert_eq!(category.name, "Shoes");
        assert_eq!(category.icon.as_deref(), Some("shoe"));
        assert_eq!(category.color, "#00ff00");
    }
}
