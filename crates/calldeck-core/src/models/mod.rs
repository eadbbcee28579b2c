//! Domain models for the call dashboard

pub mod batch;
pub mod call;
pub mod page;
pub mod stats;
pub mod transcript;

pub use batch::CallBatch;
pub use call::{CallRecord, Direction, EndReason, Outcome};
pub use page::{BatchPage, CallPage};
pub use stats::CallStats;
pub use transcript::{Speaker, TranscriptTurn};
