//! Database connectors and utilities for the catalog backend.
//!
//! Currently only MongoDB is supported; the module is feature-gated so the
//! crate can grow additional backends without forcing their dependencies on
//! every consumer.
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb;
//!
//! let client = mongodb::connect("mongodb://localhost:27017").await?;
//! let db = client.database("catalog");
//! let collection = db.collection::<Document>("brands");
//! ```

pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;
