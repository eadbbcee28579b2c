//! Common DTOs used across the API

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Default page size for the call list
pub const DEFAULT_CALL_PAGE_SIZE: u64 = 10;

/// Default page size for the outbound batch list
pub const DEFAULT_BATCH_PAGE_SIZE: u64 = 20;

/// Standard API response wrapper
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Create a success response with data
    pub fn success(data: T) -> Self {
        Self {
            data,
            message: None,
        }
    }

    /// Create a success response with data and message
    pub fn with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: Some(message.into()),
        }
    }
}

/// Pagination query parameters
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PageQuery {
    /// Page number (1-indexed)
    #[serde(default = "default_page")]
    #[validate(range(min = 1))]
    pub page: u64,

    /// Items per page; each endpoint supplies its own default
    #[validate(range(min = 1, max = 100))]
    pub page_size: Option<u64>,
}

fn default_page() -> u64 {
    1
}

impl Default for PageQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: None,
        }
    }
}

/// Pagination metadata echoed back with every list response
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PageMeta {
    /// Page that was served
    pub page: u64,
    /// Page size that was applied
    pub page_size: u64,
    /// Total page count known for the dataset
    pub total_pages: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_query_validation() {
        let query = PageQuery {
            page: 1,
            page_size: Some(20),
        };
        assert!(query.validate().is_ok());

        let query = PageQuery {
            page: 0,
            page_size: None,
        };
        assert!(query.validate().is_err());

        let query = PageQuery {
            page: 1,
            page_size: Some(5000),
        };
        assert!(query.validate().is_err());
    }

    #[test]
    fn test_api_response() {
        let resp = ApiResponse::success("test");
        assert_eq!(resp.data, "test");
        assert!(resp.message.is_none());

        let resp = ApiResponse::with_message("data", "degraded");
        assert_eq!(resp.message, Some("degraded".to_string()));
    }
}
