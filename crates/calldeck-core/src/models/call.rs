//! Normalized call record model
//!
//! One `CallRecord` per call, regardless of which voice-assistant workflow
//! produced it. The raw upstream objects vary in shape; the normalization
//! heuristics here are total functions - every raw status string resolves
//! to an enumerated value, and unparseable fields degrade to placeholders
//! rather than failing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::transcript::{self, TranscriptTurn};

/// Placeholder shown for any field the upstream did not provide
pub const PLACEHOLDER: &str = "N/A";

/// Display name used when the upstream names no assistant for a call
pub const DEFAULT_ASSISTANT_NAME: &str = "AI Assistant";

/// Call direction classification
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Call received by the scheduling assistant
    Inbound,
    /// Call placed by the claim-status campaign
    #[default]
    Outbound,
}

impl Direction {
    /// Resolve a raw status string to a direction.
    ///
    /// Total: any text containing "inbound" (case-insensitive) is inbound,
    /// everything else is outbound. No raw value passes through unresolved.
    pub fn from_status(status: &str) -> Self {
        if status.to_lowercase().contains("inbound") {
            Direction::Inbound
        } else {
            Direction::Outbound
        }
    }

    /// Lowercase wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Inbound => "inbound",
            Direction::Outbound => "outbound",
        }
    }

    /// Human badge label
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Inbound => "Inbound",
            Direction::Outbound => "Outbound",
        }
    }
}

/// Success evaluation of a call
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum Outcome {
    #[serde(rename = "success")]
    Success,
    #[serde(rename = "fail")]
    Fail,
    #[default]
    #[serde(rename = "n/a")]
    NotApplicable,
}

impl Outcome {
    /// Resolve a raw status string to an outcome.
    ///
    /// Substring match, case-insensitive, "success" checked before "fail".
    /// Total: unrecognized input falls back to `NotApplicable`.
    pub fn from_status(status: &str) -> Self {
        let lower = status.to_lowercase();
        if lower.contains("success") {
            Outcome::Success
        } else if lower.contains("fail") {
            Outcome::Fail
        } else {
            Outcome::NotApplicable
        }
    }

    /// Lowercase wire representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Outcome::Success => "success",
            Outcome::Fail => "fail",
            Outcome::NotApplicable => "n/a",
        }
    }

    /// Human badge label
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Success => "Success",
            Outcome::Fail => "Fail",
            Outcome::NotApplicable => PLACEHOLDER,
        }
    }
}

/// Completion reason, as the inbound scheduling feature interprets it
///
/// Free-text reasons from the upstream are folded into this closed set of
/// three human labels by substring heuristics. The outbound claim feature
/// interprets the same raw field differently - see [`end_reason_code_label`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum EndReason {
    CustomerEnded,
    ConnectionFailed,
    SilenceTimeout,
}

impl EndReason {
    /// Fold a free-text completion reason into the closed set.
    ///
    /// "customer"/"hung up" win over "failed"/"error"; anything else is a
    /// silence timeout. Case-insensitive, total.
    pub fn from_raw(reason: &str) -> Self {
        let lower = reason.to_lowercase();
        if lower.contains("customer") || lower.contains("hung up") {
            EndReason::CustomerEnded
        } else if lower.contains("failed") || lower.contains("error") {
            EndReason::ConnectionFailed
        } else {
            EndReason::SilenceTimeout
        }
    }

    /// Human badge label
    pub fn label(&self) -> &'static str {
        match self {
            EndReason::CustomerEnded => "Customer Ended Call",
            EndReason::ConnectionFailed => "Connection Failed",
            EndReason::SilenceTimeout => "Silence Timed Out",
        }
    }
}

/// Badge label for an already-enumerated machine completion code.
///
/// The outbound claim-status feature receives `end_reason` as a machine
/// code rather than free text. Each recognized code maps 1:1 to a label;
/// unrecognized codes get an explicit fallback label instead of leaking
/// the raw code to the render layer.
pub fn end_reason_code_label(code: &str) -> &'static str {
    match code.trim().to_uppercase().as_str() {
        "SCHEDULE_SUCCESS" => "Schedule Confirmed",
        "SCHEDULE_FAIL" => "Schedule Failed",
        "RESCHEDULE_SUCCESS" => "Reschedule Confirmed",
        "RESCHEDULE_FAIL" => "Reschedule Failed",
        "CANCEL_SUCCESS" => "Cancellation Confirmed",
        "CANCEL_FAIL" => "Cancellation Failed",
        "CLAIM_STATUS_READ" => "Claim Status Delivered",
        "NO_ANSWER" => "No Answer",
        "VOICEMAIL" => "Voicemail Reached",
        _ => "Unknown Outcome",
    }
}

/// Format a seconds count as "Xm Ys"
pub fn format_duration(seconds: u64) -> String {
    let mins = seconds / 60;
    let secs = seconds % 60;
    format!("{}m {}s", mins, secs)
}

/// Parse a raw seconds value that may carry a trailing unit letter
///
/// Accepts "90", "46s", "22 s". Returns `None` for anything non-numeric;
/// the caller degrades to the placeholder.
pub fn parse_seconds(raw: &str) -> Option<u64> {
    let trimmed = raw.trim().trim_end_matches(|c: char| c.is_alphabetic());
    let value: f64 = trimmed.trim().parse().ok()?;
    if value.is_finite() && value >= 0.0 {
        Some(value as u64)
    } else {
        None
    }
}

/// Normalized, display-facing call record
///
/// Optional fields are `None` when the upstream omitted them; the
/// presentation layer renders the placeholder, never a raw null.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CallRecord {
    /// Opaque external identifier, unique per call
    pub call_id: String,

    /// Inbound vs outbound, derived from the raw line status
    pub direction: Direction,

    /// Name of the assistant that handled the call
    pub assistant_name: String,

    /// The non-assistant party's phone number, opaque, not validated
    pub counterparty_phone: String,

    /// Raw completion reason; interpretation is feature-specific
    pub end_reason: String,

    /// Success evaluation, derived from the raw call status
    pub outcome: Outcome,

    /// Call start; absent for calls that never connected
    pub started_at: Option<DateTime<Utc>>,

    /// Call length in seconds
    pub duration_seconds: Option<u64>,

    /// Raw transcript text, turn-delimited
    pub transcript: Option<String>,

    /// Assistant-generated call summary
    pub summary: Option<String>,

    /// URL of the call recording, if one was captured
    pub recording_url: Option<String>,

    /// Claim number (outbound claim-status calls only)
    pub claim_number: Option<String>,

    /// Claim status read back to the caller (outbound only)
    pub claim_status: Option<String>,

    /// Raw line status string as reported by the dialer
    pub line_status: Option<String>,

    /// When the outbound call completed
    pub completed_at: Option<DateTime<Utc>>,

    /// Owning batch, for outbound campaign calls
    pub batch_id: Option<String>,
}

impl CallRecord {
    /// Duration for display: "Xm Ys", or the placeholder when unknown
    pub fn duration_display(&self) -> String {
        match self.duration_seconds {
            Some(secs) => format_duration(secs),
            None => PLACEHOLDER.to_string(),
        }
    }

    /// Completion reason folded into the inbound feature's closed label set
    pub fn end_reason_label(&self) -> &'static str {
        EndReason::from_raw(&self.end_reason).label()
    }

    /// Completion reason interpreted as a machine code (outbound feature)
    pub fn end_reason_code_label(&self) -> &'static str {
        end_reason_code_label(&self.end_reason)
    }

    /// Transcript segmented into speaker-tagged turns
    pub fn transcript_turns(&self) -> Vec<TranscriptTurn> {
        self.transcript
            .as_deref()
            .map(transcript::split_transcript)
            .unwrap_or_default()
    }
}
