//! Calldeck Core Library
//!
//! This crate provides the foundational types and logic for the Calldeck
//! voice-assistant call dashboard. It includes:
//!
//! - Display-facing domain models (`CallRecord`, `CallBatch`, `CallStats`)
//! - Normalization heuristics for raw upstream status strings
//! - Transcript segmentation and duration formatting
//! - The `CallDirectory` port consumed by views and handlers
//! - Unified error handling with HTTP response mapping
//! - Application configuration

pub mod config;
pub mod error;
pub mod models;
pub mod traits;

pub use config::AppConfig;
pub use error::AppError;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
