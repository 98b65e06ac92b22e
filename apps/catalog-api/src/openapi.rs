//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all catalog resources
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Catalog API",
        version = "0.1.0",
        description = "MongoDB-based REST API for brands, categories, products and product images",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:5000", description = "Local development server")
    ),
    nest(
        (path = "/api/1.0/brands", api = domain_catalog::handlers::brand::ApiDoc),
        (path = "/api/1.0/categories", api = domain_catalog::handlers::category::ApiDoc),
        (path = "/api/1.0/products", api = domain_catalog::handlers::product::ApiDoc),
        (path = "/api/1.0/product-images", api = domain_catalog::handlers::image::ApiDoc)
    ),
    tags(
        (name = "Brands", description = "Brand management endpoints"),
        (name = "Categories", description = "Category management endpoints"),
        (name = "Products", description = "Product management endpoints"),
        (name = "Product Images", description = "Product image management endpoints")
    )
)]
pub struct ApiDoc;
