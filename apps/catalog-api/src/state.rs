//! Shared application state passed to the readiness handlers.

use mongodb::{Client, Database};

/// Shared application state.
///
/// Cloning is cheap; the MongoDB client shares its underlying connection pool.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded from environment variables
    pub config: crate::config::Config,
    /// MongoDB client (cloneable, shares underlying connection pool)
    pub mongo_client: Client,
    /// MongoDB database instance
    pub db: Database,
}
