//! One fetched page of records or batches
//!
//! Pages are replaced wholesale on navigation; nothing is cached or merged
//! across fetches.

use serde::{Deserialize, Serialize};

use crate::models::batch::CallBatch;
use crate::models::call::CallRecord;

/// One page of normalized call records
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CallPage {
    /// 1-based page number this page was fetched for
    pub page: u64,

    /// Total page count reported (or derived) for the dataset
    pub total_pages: u64,

    /// Normalized records, in upstream order
    pub records: Vec<CallRecord>,
}

/// One page of outbound call batches
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchPage {
    /// 1-based page number this page was fetched for
    pub page: u64,

    /// Total page count derived from the reported document count
    pub total_pages: u64,

    /// Batches, in upstream order
    pub batches: Vec<CallBatch>,
}

/// Page count for `total` items at `page_size` per page, rounded up
pub fn total_pages(total: u64, page_size: u64) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total.div_ceil(page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages_rounds_up() {
        assert_eq!(total_pages(95, 10), 10);
        assert_eq!(total_pages(100, 10), 10);
        assert_eq!(total_pages(101, 10), 11);
        assert_eq!(total_pages(0, 10), 0);
    }

    #[test]
    fn test_total_pages_zero_page_size() {
        assert_eq!(total_pages(50, 0), 0);
    }
}
