//! # Axum Helpers
//!
//! Utilities and helpers shared by the catalog HTTP services.
//!
//! ## Modules
//!
//! - **[`errors`]**: the `{message}` JSON error envelope and [`AppError`]
//! - **[`extractors`]**: custom extractors (UUID path, validated JSON)
//! - **[`server`]**: router/server setup, health endpoint, graceful shutdown
//!
//! ## Quick Start
//!
//! ```ignore
//! use axum::Router;
//! use axum_helpers::server::{create_app, create_router};
//! use core_config::server::ServerConfig;
//! use utoipa::OpenApi;
//!
//! #[derive(OpenApi)]
//! #[openapi(paths())]
//! struct ApiDoc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api_routes = Router::new(); // Add your routes
//!     let router = create_router::<ApiDoc>("/api/1.0", api_routes)?;
//!
//!     create_app(router, &ServerConfig::default()).await?;
//!     Ok(())
//! }
//! ```

pub mod errors;
pub mod extractors;
pub mod server;

pub use errors::{validation_messages, AppError, ErrorBody};
pub use extractors::{AppJson, UuidPath, ValidatedJson};
pub use server::{
    create_app, create_production_app, create_router, health_router, shutdown_signal,
    ShutdownCoordinator,
};
