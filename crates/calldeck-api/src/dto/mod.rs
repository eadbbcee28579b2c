//! Data Transfer Objects (DTOs) for API requests and responses

pub mod batches;
pub mod calls;
pub mod common;

pub use batches::*;
pub use calls::*;
pub use common::*;
