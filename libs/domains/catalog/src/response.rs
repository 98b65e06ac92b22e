//! Response envelopes shared by every catalog endpoint.
//!
//! Successful responses always carry a `message` alongside the payload:
//! `{message, data}` for single entities, `{message, rows, count}` for
//! collections and `{message}` (plus an optional operation outcome) for
//! delete confirmations.

use serde::Serialize;
use utoipa::ToSchema;

/// Envelope for single-entity responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct DataResponse<T> {
    /// e.g. "Brand created"
    pub message: &'static str,
    pub data: T,
}

/// Envelope for collection responses.
#[derive(Debug, Serialize, ToSchema)]
pub struct ListResponse<T> {
    /// e.g. "Brands fetched"
    pub message: &'static str,
    pub rows: Vec<T>,
    pub count: u64,
}

impl<T> ListResponse<T> {
    pub fn new(message: &'static str, rows: Vec<T>) -> Self {
        let count = rows.len() as u64;
        Self {
            message,
            rows,
            count,
        }
    }
}

/// Envelope for delete confirmations.
#[derive(Debug, Serialize, ToSchema)]
pub struct DeletedResponse {
    /// e.g. "Category deleted"
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<&'static str>,
}

impl DeletedResponse {
    pub fn new(message: &'static str) -> Self {
        Self {
            message,
            operation: None,
            status: None,
        }
    }

    pub fn with_outcome(
        message: &'static str,
        operation: &'static str,
        status: &'static str,
    ) -> Self {
        Self {
            message,
            operation: Some(operation),
            status: Some(status),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_response_counts_rows() {
        let response = ListResponse::new("Brands fetched", vec!["a", "b", "c"]);
        assert_eq!(response.count, 3);
    }

    #[test]
    fn test_deleted_response_omits_absent_outcome() {
        let json = serde_json::to_value(DeletedResponse::new("Category deleted")).unwrap();
        assert_eq!(json["message"], "Category deleted");
        assert!(json.get("operation").is_none());
        assert!(json.get("status").is_none());
    }

    #[test]
    fn test_deleted_response_with_outcome() {
        let json = serde_json::to_value(DeletedResponse::with_outcome(
            "Brand deleted",
            "Remove",
            "Success",
        ))
        .unwrap();
        assert_eq!(json["operation"], "Remove");
        assert_eq!(json["status"], "Success");
    }
}
