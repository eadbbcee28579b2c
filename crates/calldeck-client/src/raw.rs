//! Raw wire shapes of the upstream voice-assistant API
//!
//! The upstream has no published schema and its two features disagree on
//! field names and types (numeric seconds vs "46s" strings, `id` vs
//! `call_id` vs `_id`). Every field is optional at the wire level; the
//! normalizer decides the placeholders.

use serde::Deserialize;

/// A numeric field that may arrive as a JSON number or a string,
/// optionally suffixed with a unit letter ("46s").
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum NumericField {
    Number(f64),
    Text(String),
}

impl NumericField {
    /// Interpret as a non-negative whole number; `None` if non-numeric
    pub fn as_u64(&self) -> Option<u64> {
        match self {
            NumericField::Number(n) if n.is_finite() && *n >= 0.0 => Some(*n as u64),
            NumericField::Number(_) => None,
            NumericField::Text(s) => calldeck_core::models::call::parse_seconds(s),
        }
    }
}

/// One raw call document, as either feature emits it
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCallDetail {
    #[serde(default)]
    pub id: Option<String>,

    #[serde(default)]
    pub call_id: Option<String>,

    #[serde(default, rename = "_id")]
    pub doc_id: Option<String>,

    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    #[serde(default)]
    pub line_status: Option<String>,

    #[serde(default)]
    pub call_end_reason: Option<String>,

    #[serde(default)]
    pub call_recording_link: Option<String>,

    #[serde(default)]
    pub call_status: Option<String>,

    #[serde(default)]
    pub summary: Option<String>,

    #[serde(default)]
    pub call_seconds: Option<NumericField>,

    #[serde(default)]
    pub transcript: Option<String>,

    #[serde(default)]
    pub claim_number: Option<String>,

    #[serde(default)]
    pub claim_status: Option<String>,

    #[serde(default)]
    pub batch_id: Option<String>,

    #[serde(default)]
    pub created_at: Option<String>,

    #[serde(default)]
    pub completed_at: Option<String>,
}

impl RawCallDetail {
    /// Best available identifier across the feature variants
    pub fn any_id(&self) -> Option<&str> {
        self.id
            .as_deref()
            .or(self.call_id.as_deref())
            .or(self.doc_id.as_deref())
    }
}

/// Envelope of `getAllCallDetails`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCallListEnvelope {
    #[serde(default, rename = "callDetails")]
    pub call_details: Option<Vec<RawCallDetail>>,

    #[serde(default, rename = "totalPages")]
    pub total_pages: Option<u64>,
}

/// One raw outbound batch with its member documents
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawBatch {
    #[serde(default)]
    pub batch_id: Option<String>,

    #[serde(default)]
    pub total_calls: Option<NumericField>,

    #[serde(default)]
    pub success_calls: Option<NumericField>,

    #[serde(default)]
    pub pending_calls: Option<NumericField>,

    #[serde(default)]
    pub failed_calls: Option<NumericField>,

    #[serde(default)]
    pub documents: Vec<RawCallDetail>,
}

/// Inner page object of `getOutboundCallDetails`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawBatchPage {
    #[serde(default)]
    pub total_documents: Option<u64>,

    #[serde(default)]
    pub batches: Vec<RawBatch>,
}

/// Envelope of `getOutboundCallDetails`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawBatchEnvelope {
    #[serde(default, rename = "outboundCallDetails")]
    pub outbound_call_details: Option<RawBatchPage>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_field_variants() {
        let n: NumericField = serde_json::from_str("42").unwrap();
        assert_eq!(n.as_u64(), Some(42));

        let n: NumericField = serde_json::from_str("\"46s\"").unwrap();
        assert_eq!(n.as_u64(), Some(46));

        let n: NumericField = serde_json::from_str("\"pending\"").unwrap();
        assert_eq!(n.as_u64(), None);

        let n: NumericField = serde_json::from_str("-3.0").unwrap();
        assert_eq!(n.as_u64(), None);
    }

    #[test]
    fn test_call_detail_tolerates_missing_fields() {
        let raw: RawCallDetail = serde_json::from_str("{}").unwrap();
        assert!(raw.any_id().is_none());
        assert!(raw.phone.is_none());
    }

    #[test]
    fn test_any_id_precedence() {
        let raw: RawCallDetail = serde_json::from_value(serde_json::json!({
            "call_id": "secondary",
            "_id": "doc"
        }))
        .unwrap();
        assert_eq!(raw.any_id(), Some("secondary"));

        let raw: RawCallDetail = serde_json::from_value(serde_json::json!({
            "_id": "doc-only"
        }))
        .unwrap();
        assert_eq!(raw.any_id(), Some("doc-only"));
    }

    #[test]
    fn test_call_list_envelope() {
        let env: RawCallListEnvelope = serde_json::from_value(serde_json::json!({
            "callDetails": [{"id": "a"}, {"id": "b"}],
            "totalPages": 7
        }))
        .unwrap();
        assert_eq!(env.call_details.unwrap().len(), 2);
        assert_eq!(env.total_pages, Some(7));
    }

    #[test]
    fn test_batch_envelope_with_string_counts() {
        let env: RawBatchEnvelope = serde_json::from_value(serde_json::json!({
            "outboundCallDetails": {
                "total_documents": 41,
                "batches": [{
                    "batch_id": "b-1",
                    "total_calls": "10",
                    "success_calls": 6,
                    "pending_calls": "1",
                    "failed_calls": 3,
                    "documents": []
                }]
            }
        }))
        .unwrap();
        let page = env.outbound_call_details.unwrap();
        assert_eq!(page.total_documents, Some(41));
        assert_eq!(page.batches[0].total_calls.as_ref().unwrap().as_u64(), Some(10));
        assert_eq!(page.batches[0].success_calls.as_ref().unwrap().as_u64(), Some(6));
    }
}
