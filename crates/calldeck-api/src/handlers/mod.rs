//! HTTP request handlers

pub mod batches;
pub mod calls;

pub use batches::configure as configure_batches;
pub use calls::configure as configure_calls;
