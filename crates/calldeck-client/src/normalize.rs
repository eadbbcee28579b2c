//! Raw document to display record normalization
//!
//! Pure mapping from the wire shapes in [`crate::raw`] to the models in
//! `calldeck-core`. Never fails: any field that cannot be parsed degrades
//! to its placeholder, and the same input always yields the same output.

use chrono::{DateTime, NaiveDateTime, Utc};
use tracing::warn;

use calldeck_core::models::call::{
    CallRecord, Direction, Outcome, DEFAULT_ASSISTANT_NAME, PLACEHOLDER,
};
use calldeck_core::models::CallBatch;

use crate::raw::{NumericField, RawBatch, RawCallDetail};

/// Normalize one raw call document into a `CallRecord`
pub fn normalize_call(raw: &RawCallDetail) -> CallRecord {
    let line_status = raw.line_status.as_deref().unwrap_or_default();
    let call_status = raw.call_status.as_deref().unwrap_or_default();

    CallRecord {
        call_id: raw
            .any_id()
            .map(str::to_string)
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        direction: Direction::from_status(line_status),
        assistant_name: non_empty(raw.first_name.clone())
            .unwrap_or_else(|| DEFAULT_ASSISTANT_NAME.to_string()),
        counterparty_phone: raw
            .phone
            .clone()
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        end_reason: raw.call_end_reason.clone().unwrap_or_default(),
        outcome: Outcome::from_status(call_status),
        started_at: raw.created_at.as_deref().and_then(parse_timestamp),
        duration_seconds: raw.call_seconds.as_ref().and_then(NumericField::as_u64),
        transcript: non_empty(raw.transcript.clone()),
        summary: non_empty(raw.summary.clone()),
        recording_url: non_empty(raw.call_recording_link.clone()),
        claim_number: non_empty(raw.claim_number.clone()),
        claim_status: non_empty(raw.claim_status.clone()),
        line_status: non_empty(raw.line_status.clone()),
        completed_at: raw.completed_at.as_deref().and_then(parse_timestamp),
        batch_id: non_empty(raw.batch_id.clone()),
    }
}

/// Normalize one raw batch, trusting its counts as given
///
/// A disagreement between the reported total and the member list length is
/// logged and left alone - the upstream owns those numbers.
pub fn normalize_batch(raw: &RawBatch) -> CallBatch {
    let batch = CallBatch {
        batch_id: raw
            .batch_id
            .clone()
            .unwrap_or_else(|| PLACEHOLDER.to_string()),
        total_calls: count(&raw.total_calls),
        success_calls: count(&raw.success_calls),
        pending_calls: count(&raw.pending_calls),
        failed_calls: count(&raw.failed_calls),
        calls: raw.documents.iter().map(normalize_call).collect(),
    };

    if !batch.member_count_matches() {
        warn!(
            batch_id = %batch.batch_id,
            reported = batch.total_calls,
            members = batch.calls.len(),
            "batch count disagrees with member list; rendering counts as reported"
        );
    }

    batch
}

fn count(field: &Option<NumericField>) -> u64 {
    field.as_ref().and_then(NumericField::as_u64).unwrap_or(0)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

/// Parse an upstream timestamp, RFC 3339 first, then the bare
/// "YYYY-MM-DD HH:MM:SS" form some documents carry. Unparseable input
/// means the call never connected as far as the dashboard is concerned.
fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .ok()
        .map(|naive| naive.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use calldeck_core::models::call::{Direction, Outcome};

    fn raw_from_json(value: serde_json::Value) -> RawCallDetail {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_full_document_normalizes() {
        let raw = raw_from_json(serde_json::json!({
            "id": "fe8a74b7-860f-4163-9b5d-65c36479c34a",
            "first_name": "IONM Scheduler 1.1",
            "phone": "+1 (732) 824 1474",
            "line_status": "Inbound Call Completed",
            "call_end_reason": "Customer hung up",
            "call_recording_link": "https://recordings.example.com/a.mp3",
            "call_status": "success",
            "summary": "Scheduled a case for Friday.",
            "call_seconds": 90,
            "transcript": "AI: Hello\nUser: Hi there"
        }));

        let record = normalize_call(&raw);
        assert_eq!(record.call_id, "fe8a74b7-860f-4163-9b5d-65c36479c34a");
        assert_eq!(record.direction, Direction::Inbound);
        assert_eq!(record.assistant_name, "IONM Scheduler 1.1");
        assert_eq!(record.outcome, Outcome::Success);
        assert_eq!(record.counterparty_phone, "+1 (732) 824 1474");
        assert_eq!(record.duration_seconds, Some(90));
        assert_eq!(record.duration_display(), "1m 30s");
        assert_eq!(record.end_reason_label(), "Customer Ended Call");
        assert_eq!(record.transcript_turns().len(), 2);
    }

    #[test]
    fn test_empty_document_degrades_to_placeholders() {
        let record = normalize_call(&RawCallDetail::default());

        // Every field resolves; nothing is left for the render layer to
        // null-check.
        assert_eq!(record.call_id, PLACEHOLDER);
        assert_eq!(record.assistant_name, DEFAULT_ASSISTANT_NAME);
        assert_eq!(record.counterparty_phone, PLACEHOLDER);
        assert_eq!(record.direction, Direction::Outbound);
        assert_eq!(record.outcome, Outcome::NotApplicable);
        assert_eq!(record.end_reason, "");
        assert!(record.started_at.is_none());
        assert!(record.duration_seconds.is_none());
        assert_eq!(record.duration_display(), PLACEHOLDER);
        assert!(record.transcript.is_none());
        assert!(record.transcript_turns().is_empty());
    }

    #[test]
    fn test_blank_strings_become_absent() {
        let raw = raw_from_json(serde_json::json!({
            "summary": "   ",
            "transcript": "",
            "call_recording_link": ""
        }));
        let record = normalize_call(&raw);
        assert!(record.summary.is_none());
        assert!(record.transcript.is_none());
        assert!(record.recording_url.is_none());
    }

    #[test]
    fn test_blank_assistant_name_gets_default() {
        let raw = raw_from_json(serde_json::json!({ "first_name": "  " }));
        assert_eq!(normalize_call(&raw).assistant_name, DEFAULT_ASSISTANT_NAME);

        let raw = raw_from_json(serde_json::json!({ "first_name": null }));
        assert_eq!(normalize_call(&raw).assistant_name, DEFAULT_ASSISTANT_NAME);
    }

    #[test]
    fn test_suffixed_seconds_string() {
        let raw = raw_from_json(serde_json::json!({ "call_seconds": "46s" }));
        assert_eq!(normalize_call(&raw).duration_seconds, Some(46));

        let raw = raw_from_json(serde_json::json!({ "call_seconds": "busy" }));
        let record = normalize_call(&raw);
        assert!(record.duration_seconds.is_none());
        assert_eq!(record.duration_display(), PLACEHOLDER);
    }

    #[test]
    fn test_timestamp_parsing() {
        let raw = raw_from_json(serde_json::json!({
            "created_at": "2025-05-06T21:18:00Z",
            "completed_at": "2025-05-06 21:19:30"
        }));
        let record = normalize_call(&raw);
        assert!(record.started_at.is_some());
        assert!(record.completed_at.is_some());

        let raw = raw_from_json(serde_json::json!({ "created_at": "May 6, 2025" }));
        assert!(normalize_call(&raw).started_at.is_none());
    }

    #[test]
    fn test_batch_counts_trusted_as_given() {
        let raw: RawBatch = serde_json::from_value(serde_json::json!({
            "batch_id": "b-77",
            "total_calls": 10,
            "success_calls": 6,
            "pending_calls": 1,
            "failed_calls": 3,
            "documents": [{ "id": "only-one" }]
        }))
        .unwrap();

        let batch = normalize_batch(&raw);
        // Reported counts survive even though only one member came back.
        assert_eq!(batch.total_calls, 10);
        assert_eq!(batch.success_calls, 6);
        assert_eq!(batch.calls.len(), 1);
        assert!(!batch.member_count_matches());
    }
}
