//! Static fallback dataset
//!
//! When the upstream is unreachable the call-list view substitutes these
//! records so the table stays non-empty instead of spinning forever. The
//! data mirrors a real afternoon of the scheduling assistant; it is only
//! ever served alongside an error log, never silently.

use chrono::{TimeZone, Utc};

use calldeck_core::models::call::{CallRecord, Direction, Outcome};
use calldeck_core::models::CallPage;

/// The built-in sample records
pub fn sample_records() -> Vec<CallRecord> {
    vec![
        CallRecord {
            call_id: "fe8a74b7-860f-4163-9b5d-65c36479c34a".to_string(),
            direction: Direction::Inbound,
            assistant_name: "IONM Scheduler [Dev]".to_string(),
            counterparty_phone: "+1 (732) 824 1474".to_string(),
            end_reason: "Customer Ended Call".to_string(),
            outcome: Outcome::Fail,
            started_at: Utc.with_ymd_and_hms(2025, 5, 6, 23, 46, 0).single(),
            duration_seconds: Some(22),
            ..Default::default()
        },
        CallRecord {
            call_id: "6573b9ef-ee69-4b9d-bfc8-65c36479c34a".to_string(),
            direction: Direction::Inbound,
            assistant_name: "IONM Scheduler [Dev]".to_string(),
            counterparty_phone: "+1 (415) 723 4000".to_string(),
            end_reason: "Customer Ended Call".to_string(),
            outcome: Outcome::Fail,
            started_at: Utc.with_ymd_and_hms(2025, 5, 6, 21, 26, 0).single(),
            duration_seconds: Some(39),
            ..Default::default()
        },
        CallRecord {
            call_id: "45bf6fbf-0293-4a31-9af2-65c36479c34a".to_string(),
            direction: Direction::Outbound,
            assistant_name: "IONM Scheduler 1.1".to_string(),
            counterparty_phone: "+1 (732) 824 1474".to_string(),
            end_reason: "Connection Failed".to_string(),
            outcome: Outcome::NotApplicable,
            started_at: None,
            duration_seconds: None,
            ..Default::default()
        },
        CallRecord {
            call_id: "1aadf1ab-45f2-4e13-86c6-65c36479c34a".to_string(),
            direction: Direction::Outbound,
            assistant_name: "IONM Scheduler 1.1".to_string(),
            counterparty_phone: "+1 (207) 831 1829".to_string(),
            end_reason: "Silence Timed Out".to_string(),
            outcome: Outcome::Fail,
            started_at: Utc.with_ymd_and_hms(2025, 5, 6, 21, 18, 0).single(),
            duration_seconds: Some(46),
            ..Default::default()
        },
        CallRecord {
            call_id: "9b48d538-8ad8-4de1-b5c8-65c36479c34a".to_string(),
            direction: Direction::Outbound,
            assistant_name: "IONM Scheduler 1.1".to_string(),
            counterparty_phone: "+1 (732) 824 1474".to_string(),
            end_reason: "Connection Failed".to_string(),
            outcome: Outcome::NotApplicable,
            started_at: None,
            duration_seconds: None,
            ..Default::default()
        },
    ]
}

/// The fallback dataset dressed up as a single-page fetch result
pub fn sample_call_page(page: u64) -> CallPage {
    CallPage {
        page,
        total_pages: 1,
        records: sample_records(),
    }
}
