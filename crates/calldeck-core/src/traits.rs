//! Ports consumed by the view layer and the HTTP handlers
//!
//! Abstracting the upstream fetch behind a trait keeps the views and
//! handlers testable with an in-memory stub instead of a live API.

use async_trait::async_trait;

use crate::error::AppError;
use crate::models::{BatchPage, CallPage};

/// Read-only source of paginated call data
///
/// The production implementation talks HTTP to the voice-assistant API;
/// tests substitute a stub. Both operations are single-shot: no retry,
/// no caching, one in-flight request per view transition.
#[async_trait]
pub trait CallDirectory: Send + Sync {
    /// Fetch one page of normalized call records
    async fn call_page(&self, page: u64, page_size: u64) -> Result<CallPage, AppError>;

    /// Fetch one page of outbound call batches
    async fn batch_page(&self, page: u64, page_size: u64) -> Result<BatchPage, AppError>;
}
