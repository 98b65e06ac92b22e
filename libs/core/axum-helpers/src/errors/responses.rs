//! Reusable OpenAPI response types for consistent API documentation.

use super::ErrorBody;
#[allow(unused_imports)]
use serde_json::json;
use utoipa::ToResponse;

#[derive(ToResponse)]
#[response(
    description = "Internal Server Error",
    content_type = "application/json",
    example = json!({ "message": "An internal server error occurred" })
)]
pub struct InternalServerErrorResponse(pub ErrorBody);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Validation Error",
    content_type = "application/json",
    example = json!({ "message": "Brand name must be at least 3 characters long." })
)]
pub struct BadRequestValidationResponse(pub ErrorBody);

#[derive(ToResponse)]
#[response(
    description = "Bad Request - Invalid id",
    content_type = "application/json",
    example = json!({ "message": "Invalid id format" })
)]
pub struct BadRequestUuidResponse(pub ErrorBody);

#[derive(ToResponse)]
#[response(
    description = "Resource not found",
    content_type = "application/json",
    example = json!({ "message": "Resource not found" })
)]
pub struct NotFoundResponse(pub ErrorBody);
