//! Outbound call batch model
//!
//! A batch is a named group of outbound claim-status calls processed
//! together. Its aggregate counts come precomputed from the upstream and
//! are trusted as given - the dataset is allowed to disagree with itself,
//! and reconciliation against the member list is reported, not enforced.

use serde::{Deserialize, Serialize};

use crate::models::call::CallRecord;

/// A named group of outbound call records with aggregate counts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CallBatch {
    /// Batch identifier shared by all member calls
    pub batch_id: String,

    /// Total calls in the batch, as reported by the source
    pub total_calls: u64,

    /// Successful calls, as reported by the source
    pub success_calls: u64,

    /// Calls still pending, as reported by the source
    pub pending_calls: u64,

    /// Failed calls, as reported by the source
    pub failed_calls: u64,

    /// Member call records
    pub calls: Vec<CallRecord>,
}

impl CallBatch {
    /// Whether the reported total matches the member list length.
    ///
    /// Counts are never corrected; a mismatch is only worth a warning log.
    pub fn member_count_matches(&self) -> bool {
        self.total_calls == self.calls.len() as u64
    }

    /// First member record, used for batch-level date and status columns
    pub fn first_call(&self) -> Option<&CallRecord> {
        self.calls.first()
    }
}
