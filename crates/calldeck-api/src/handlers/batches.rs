//! Outbound batch handlers
//!
//! Serves the claim-status campaign drill-down. Unlike the call list this
//! endpoint has no fallback dataset; an unreachable upstream surfaces as a
//! 502 so the failure is visible rather than papered over.

use actix_web::{
    web::{self, Data, Json, Query},
    Result,
};
use tracing::{debug, info, instrument, warn};
use validator::Validate;

use calldeck_core::{error::AppError, traits::CallDirectory};

use crate::dto::{ApiResponse, BatchListResponse, PageQuery, DEFAULT_BATCH_PAGE_SIZE};

/// List outbound batches with their member calls inline
///
/// # Errors
///
/// Returns 400 if query validation fails, 502 if the upstream source is
/// unreachable or returns a malformed payload.
///
/// # Examples
///
/// ```text
/// GET /api/v1/batches?page=1
/// ```
#[instrument(skip(directory, query))]
pub async fn list_batches(
    query: Query<PageQuery>,
    directory: Data<dyn CallDirectory>,
) -> Result<Json<ApiResponse<BatchListResponse>>> {
    query.validate().map_err(|e| {
        warn!("Invalid query parameters: {}", e);
        AppError::Validation(e.to_string())
    })?;

    let page_size = query.page_size.unwrap_or(DEFAULT_BATCH_PAGE_SIZE);
    debug!(
        "Listing batches: page={}, page_size={}",
        query.page, page_size
    );

    let page = directory.batch_page(query.page, page_size).await?;

    info!(
        "Retrieved {} batches (page {} of {})",
        page.batches.len(),
        page.page,
        page.total_pages
    );

    Ok(Json(ApiResponse::success(BatchListResponse::from_page(
        page, page_size,
    ))))
}

/// Register batch routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/batches", web::get().to(list_batches));
}
