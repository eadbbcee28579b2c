//! Page-level call statistics
//!
//! Simple derived counts over the current page of normalized records,
//! rendered as the status cards above the call table.

use serde::{Deserialize, Serialize};

use crate::models::call::{CallRecord, Outcome};

/// Known stub: the data model has no transferred concept, so the
/// "Transferred" card shows this fixed demo value. Do not derive it from
/// the records until the upstream grows a transfer outcome.
pub const TRANSFERRED_PLACEHOLDER: u64 = 3;

/// Derived counts for one page of call records
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CallStats {
    /// Number of records on the page
    pub all: u64,

    /// Fixed placeholder, see [`TRANSFERRED_PLACEHOLDER`]
    pub transferred: u64,

    /// Records with a success outcome
    pub successful: u64,

    /// Records with a fail outcome
    pub failed: u64,
}

impl CallStats {
    /// Aggregate counts over an ordered sequence of records
    pub fn from_records(records: &[CallRecord]) -> Self {
        let successful = records
            .iter()
            .filter(|r| r.outcome == Outcome::Success)
            .count() as u64;
        let failed = records
            .iter()
            .filter(|r| r.outcome == Outcome::Fail)
            .count() as u64;

        Self {
            all: records.len() as u64,
            transferred: TRANSFERRED_PLACEHOLDER,
            successful,
            failed,
        }
    }
}
