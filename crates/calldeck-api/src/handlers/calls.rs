//! Call list handlers
//!
//! Serves the scheduling-assistant call table. When the upstream source
//! is unreachable the handler degrades to a small built-in dataset so the
//! dashboard stays usable, flagging the substitution in the response
//! message.

use actix_web::{
    web::{self, Data, Json, Query},
    Result,
};
use tracing::{debug, error, info, instrument, warn};
use validator::Validate;

use calldeck_client::fallback;
use calldeck_core::{error::AppError, traits::CallDirectory};

use crate::dto::{ApiResponse, CallListResponse, PageQuery, DEFAULT_CALL_PAGE_SIZE};

/// List normalized call records with page stats
///
/// # Errors
///
/// Returns 400 if query validation fails. Upstream failures do not
/// surface as errors here; the fallback dataset is served instead.
///
/// # Examples
///
/// ```text
/// GET /api/v1/calls?page=2&page_size=10
/// ```
#[instrument(skip(directory, query))]
pub async fn list_calls(
    query: Query<PageQuery>,
    directory: Data<dyn CallDirectory>,
) -> Result<Json<ApiResponse<CallListResponse>>> {
    query.validate().map_err(|e| {
        warn!("Invalid query parameters: {}", e);
        AppError::Validation(e.to_string())
    })?;

    let page_size = query.page_size.unwrap_or(DEFAULT_CALL_PAGE_SIZE);
    debug!("Listing calls: page={}, page_size={}", query.page, page_size);

    match directory.call_page(query.page, page_size).await {
        Ok(page) => {
            info!(
                "Retrieved {} calls (page {} of {})",
                page.records.len(),
                page.page,
                page.total_pages
            );
            Ok(Json(ApiResponse::success(CallListResponse::from_page(
                page, page_size,
            ))))
        }
        Err(e) => {
            error!("Upstream call fetch failed, serving sample data: {}", e);
            let page = fallback::sample_call_page(query.page);
            Ok(Json(ApiResponse::with_message(
                CallListResponse::from_page(page, page_size),
                "upstream unavailable; showing sample data",
            )))
        }
    }
}

/// Register call routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/calls", web::get().to(list_calls));
}
