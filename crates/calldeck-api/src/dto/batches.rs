//! Outbound batch DTOs
//!
//! The claim-status feature interprets `end_reason` as an enumerated
//! machine code, so member rows carry the code-mapped badge label instead
//! of the free-text heuristics used by the call list.

use chrono::{DateTime, Utc};
use serde::Serialize;

use calldeck_core::models::call::PLACEHOLDER;
use calldeck_core::models::{BatchPage, CallBatch, CallRecord, TranscriptTurn};

use super::calls::or_placeholder;
use super::common::PageMeta;

/// One member call of an expanded batch
#[derive(Debug, Clone, Serialize)]
pub struct BatchMemberResponse {
    /// Opaque call identifier
    pub call_id: String,

    /// Call start, absent for calls that never connected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,

    /// When the call completed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,

    /// Counterparty phone number
    pub phone: String,

    /// Claim number, placeholder when absent
    pub claim_number: String,

    /// Claim status read back to the caller, placeholder when absent
    pub claim_status: String,

    /// Raw dialer line status, placeholder when absent
    pub line_status: String,

    /// Machine-code completion reason mapped to its badge label
    pub end_reason_label: &'static str,

    /// Wire outcome value
    pub outcome: &'static str,

    /// "Xm Ys" display duration
    pub duration: String,

    /// Segmented transcript
    pub transcript_turns: Vec<TranscriptTurn>,

    /// Assistant-generated summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Recording URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recording_url: Option<String>,
}

impl From<&CallRecord> for BatchMemberResponse {
    fn from(record: &CallRecord) -> Self {
        Self {
            call_id: record.call_id.clone(),
            started_at: record.started_at,
            completed_at: record.completed_at,
            phone: record.counterparty_phone.clone(),
            claim_number: or_placeholder(&record.claim_number),
            claim_status: or_placeholder(&record.claim_status),
            line_status: or_placeholder(&record.line_status),
            end_reason_label: record.end_reason_code_label(),
            outcome: record.outcome.as_str(),
            duration: record.duration_display(),
            transcript_turns: record.transcript_turns(),
            summary: record.summary.clone(),
            recording_url: record.recording_url.clone(),
        }
    }
}

/// One row of the batch table with its members inline
#[derive(Debug, Clone, Serialize)]
pub struct BatchRowResponse {
    /// Batch identifier
    pub batch_id: String,

    /// Start of the first member call, used as the batch date column
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,

    /// Completion of the first member call
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,

    /// Line status of the first member call, placeholder when absent
    pub line_status: String,

    /// Successful calls, as reported by the source
    pub success_calls: u64,

    /// Failed calls, as reported by the source
    pub failed_calls: u64,

    /// Pending calls, as reported by the source
    pub pending_calls: u64,

    /// Total calls, as reported by the source
    pub total_calls: u64,

    /// Member call documents
    pub members: Vec<BatchMemberResponse>,
}

impl From<&CallBatch> for BatchRowResponse {
    fn from(batch: &CallBatch) -> Self {
        let first = batch.first_call();
        Self {
            batch_id: batch.batch_id.clone(),
            started_at: first.and_then(|c| c.started_at),
            completed_at: first.and_then(|c| c.completed_at),
            line_status: first
                .map(|c| or_placeholder(&c.line_status))
                .unwrap_or_else(|| PLACEHOLDER.to_string()),
            success_calls: batch.success_calls,
            failed_calls: batch.failed_calls,
            pending_calls: batch.pending_calls,
            total_calls: batch.total_calls,
            members: batch.calls.iter().map(BatchMemberResponse::from).collect(),
        }
    }
}

/// Full payload of `GET /api/v1/batches`
#[derive(Debug, Clone, Serialize)]
pub struct BatchListResponse {
    /// Batch rows for the requested page
    pub rows: Vec<BatchRowResponse>,

    /// Pagination metadata
    pub pagination: PageMeta,
}

impl BatchListResponse {
    /// Build the response from a fetched page
    pub fn from_page(page: BatchPage, page_size: u64) -> Self {
        Self {
            rows: page.batches.iter().map(BatchRowResponse::from).collect(),
            pagination: PageMeta {
                page: page.page,
                page_size,
                total_pages: page.total_pages,
            },
        }
    }
}
