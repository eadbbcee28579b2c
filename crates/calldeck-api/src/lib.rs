//! API layer for Calldeck
//!
//! HTTP handlers and DTOs for the dashboard endpoints consumed by the
//! browser UI. Each list endpoint returns the full normalized payload in
//! one round-trip (rows with segmented transcripts and badge labels, page
//! stats, pagination metadata) so opening a detail view needs no second
//! fetch.

#![forbid(unsafe_code)]
#![warn(clippy::all, missing_docs)]

pub mod dto;
pub mod handlers;

pub use dto::{ApiResponse, PageQuery};
pub use handlers::{configure_batches, configure_calls};
