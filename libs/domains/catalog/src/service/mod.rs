//! Business logic layer for the catalog domain.
//!
//! Validation is asymmetric: create operations fail fast and report the
//! first violated rule only, update operations collect every violated rule.
//! Update requests must carry at least one declared field.

pub mod brand;
pub mod category;
pub mod image;
pub mod product;

pub use brand::BrandService;
pub use category::CategoryService;
pub use image::ProductImageService;
pub use product::ProductService;

use axum_helpers::validation_messages;
use validator::Validate;

use crate::error::{CatalogError, CatalogResult};

pub(crate) const EMPTY_UPDATE_MESSAGE: &str = "At least one field must be provided.";

/// Create-mode validation: fail fast, first violated rule only.
pub(crate) fn validate_create<T: Validate>(input: &T) -> CatalogResult<()> {
    if let Err(errors) = input.validate() {
        let first = validation_messages(&errors)
            .into_iter()
            .next()
            .unwrap_or_else(|| "Request validation failed".to_string());
        return Err(CatalogError::Validation(vec![first]));
    }
    Ok(())
}

/// Update-mode validation: collect every violated rule.
pub(crate) fn validate_update<T: Validate>(input: &T) -> CatalogResult<()> {
    if let Err(errors) = input.validate() {
        return Err(CatalogError::Validation(validation_messages(&errors)));
    }
    Ok(())
}

pub(crate) fn empty_update_error() -> CatalogError {
    CatalogError::Validation(vec![EMPTY_UPDATE_MESSAGE.to_string()])
}
