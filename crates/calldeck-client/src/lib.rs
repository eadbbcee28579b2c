//! Upstream API client for Calldeck
//!
//! Talks to the two read-only voice-assistant endpoints (the call list and
//! the outbound batch list), decodes their loosely-shaped payloads, and
//! normalizes them into the display-facing models from `calldeck-core`.
//! Also carries the static fallback dataset used when the upstream is
//! unreachable.

pub mod client;
pub mod fallback;
pub mod normalize;
pub mod raw;

pub use client::UpstreamClient;
