//! Custom extractors for request handling.

pub mod app_json;
pub mod uuid_path;
pub mod validated_json;

pub use app_json::AppJson;
pub use uuid_path::UuidPath;
pub use validated_json::ValidatedJson;
