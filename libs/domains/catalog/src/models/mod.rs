//! Entities and DTOs for the catalog domain.
//!
//! Wire format is camelCase and matches the persisted document layout;
//! ids are UUID v7 stored as `_id`.

pub mod brand;
pub mod category;
pub mod image;
pub mod product;

pub use brand::{Brand, BrandDetails, CreateBrand, UpdateBrand};
pub use category::{Category, CategoryDetails, CreateCategory, UpdateCategory};
pub use image::{CreateProductImage, ProductImage};
pub use product::{CreateProduct, Product, ProductRef, UpdateProduct, Variant};

use std::borrow::Cow;
use validator::ValidationError;

/// Shared name rule: required, with distinct min/max-length messages.
pub(crate) fn name_rule(
    value: &str,
    label: &str,
    min: usize,
    max: usize,
) -> Result<(), ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(rule_error("required", format!("{label} is required.")));
    }
    let length = trimmed.chars().count();
    if length < min {
        return Err(rule_error(
            "min_length",
            format!("{label} must be at least {min} characters long."),
        ));
    }
    if length > max {
        return Err(rule_error(
            "max_length",
            format!("{label} must be at most {max} characters long."),
        ));
    }
    Ok(())
}

pub(crate) fn required_rule(value: &str, label: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(rule_error("required", format!("{label} is required.")));
    }
    Ok(())
}

pub(crate) fn rule_error(code: &'static str, message: String) -> ValidationError {
    ValidationError::new(code).with_message(Cow::Owned(message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_rule_required() {
        let err = name_rule("   ", "Brand name", 3, 64).unwrap_err();
        assert_eq!(err.message.unwrap(), "Brand name is required.");
    }

    #[test]
    fn test_name_rule_min_length() {
        let err = name_rule("ab", "Brand name", 3, 64).unwrap_err();
        assert_eq!(
            err.message.unwrap(),
            "Brand name must be at least 3 characters long."
        );
    }

    #[test]
    fn test_name_rule_max_length() {
        let long = "x".repeat(65);
        let err = name_rule(&long, "Brand name", 3, 64).unwrap_err();
        assert_eq!(
            err.message.unwrap(),
            "Brand name must be at most 64 characters long."
        );
    }

    #[test]
    fn test_name_rule_accepts_valid_name() {
        assert!(name_rule("Nike", "Brand name", 3, 64).is_ok());
    }
}
