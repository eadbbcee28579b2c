//! Call list DTOs
//!
//! Rows carry everything the detail modal needs (segmented transcript,
//! summary, recording URL) so selecting a row on the client side is a
//! state change, not a fetch.

use chrono::{DateTime, Utc};
use serde::Serialize;

use calldeck_core::models::call::PLACEHOLDER;
use calldeck_core::models::{CallPage, CallRecord, CallStats, TranscriptTurn};

use super::common::PageMeta;

/// One row of the call-list table, badge labels included
#[derive(Debug, Clone, Serialize)]
pub struct CallRowResponse {
    /// Opaque call identifier
    pub call_id: String,

    /// Wire direction value ("inbound"/"outbound")
    pub direction: &'static str,

    /// Direction badge label
    pub direction_label: &'static str,

    /// Name of the assistant that handled the call
    pub assistant_name: String,

    /// Counterparty phone number
    pub counterparty_phone: String,

    /// Completion reason folded into the closed scheduling label set
    pub end_reason_label: &'static str,

    /// Wire outcome value ("success"/"fail"/"n/a")
    pub outcome: &'static str,

    /// Outcome badge label
    pub outcome_label: &'static str,

    /// Call start, absent for calls that never connected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,

    /// "Xm Ys" display duration, placeholder when unknown
    pub duration: String,

    /// Segmented transcript, empty when none was captured
    pub transcript_turns: Vec<TranscriptTurn>,

    /// Assistant-generated summary
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,

    /// Recording URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recording_url: Option<String>,
}

impl From<&CallRecord> for CallRowResponse {
    fn from(record: &CallRecord) -> Self {
        Self {
            call_id: record.call_id.clone(),
            direction: record.direction.as_str(),
            direction_label: record.direction.label(),
            assistant_name: record.assistant_name.clone(),
            counterparty_phone: record.counterparty_phone.clone(),
            end_reason_label: record.end_reason_label(),
            outcome: record.outcome.as_str(),
            outcome_label: record.outcome.label(),
            started_at: record.started_at,
            duration: record.duration_display(),
            transcript_turns: record.transcript_turns(),
            summary: record.summary.clone(),
            recording_url: record.recording_url.clone(),
        }
    }
}

/// Full payload of `GET /api/v1/calls`
#[derive(Debug, Clone, Serialize)]
pub struct CallListResponse {
    /// Table rows for the requested page
    pub rows: Vec<CallRowResponse>,

    /// Status-card counts derived from this page
    pub stats: CallStats,

    /// Pagination metadata
    pub pagination: PageMeta,
}

impl CallListResponse {
    /// Build the response from a fetched page
    pub fn from_page(page: CallPage, page_size: u64) -> Self {
        let rows = page.records.iter().map(CallRowResponse::from).collect();
        let stats = CallStats::from_records(&page.records);
        Self {
            rows,
            stats,
            pagination: PageMeta {
                page: page.page,
                page_size,
                total_pages: page.total_pages,
            },
        }
    }
}

/// Placeholder helper for optional display strings
pub(crate) fn or_placeholder(value: &Option<String>) -> String {
    value
        .clone()
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use calldeck_core::models::call::{Direction, Outcome};

    #[test]
    fn test_row_from_record() {
        let record = CallRecord {
            call_id: "c-1".to_string(),
            direction: Direction::Inbound,
            assistant_name: "IONM Scheduler 1.1".to_string(),
            counterparty_phone: "+1 555 0100".to_string(),
            end_reason: "customer hung up".to_string(),
            outcome: Outcome::Success,
            duration_seconds: Some(90),
            transcript: Some("AI: Hello\nUser: Hi".to_string()),
            ..Default::default()
        };

        let row = CallRowResponse::from(&record);
        assert_eq!(row.direction, "inbound");
        assert_eq!(row.direction_label, "Inbound");
        assert_eq!(row.assistant_name, "IONM Scheduler 1.1");
        assert_eq!(row.end_reason_label, "Customer Ended Call");
        assert_eq!(row.outcome_label, "Success");
        assert_eq!(row.duration, "1m 30s");
        assert_eq!(row.transcript_turns.len(), 2);
    }

    #[test]
    fn test_missing_fields_render_placeholders() {
        let row = CallRowResponse::from(&CallRecord::default());
        assert_eq!(row.duration, PLACEHOLDER);
        assert_eq!(row.outcome_label, PLACEHOLDER);
        assert!(row.transcript_turns.is_empty());

        // Serialized form exposes labels, never nulls for required columns.
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["duration"], PLACEHOLDER);
        assert!(json.get("summary").is_none());
    }

    #[test]
    fn test_list_response_from_page() {
        let page = CallPage {
            page: 2,
            total_pages: 5,
            records: vec![
                CallRecord {
                    outcome: Outcome::Success,
                    ..Default::default()
                },
                CallRecord {
                    outcome: Outcome::Fail,
                    ..Default::default()
                },
            ],
        };

        let response = CallListResponse::from_page(page, 10);
        assert_eq!(response.rows.len(), 2);
        assert_eq!(response.stats.all, 2);
        assert_eq!(response.stats.successful, 1);
        assert_eq!(response.pagination.page, 2);
        assert_eq!(response.pagination.total_pages, 5);
    }
}
