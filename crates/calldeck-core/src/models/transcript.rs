//! Transcript segmentation
//!
//! Upstream transcripts arrive as one flat string with turns separated by
//! newlines or runs of whitespace, each turn optionally prefixed with a
//! speaker tag ("AI: ..."). Segmentation is pure and never fails; a
//! malformed transcript just yields fewer or untagged turns.

use serde::{Deserialize, Serialize};

/// Which side of the call produced a turn
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Speaker {
    /// The voice assistant
    Assistant,
    /// The human counterparty
    Counterparty,
}

/// One utterance in a segmented transcript
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TranscriptTurn {
    /// Resolved speaker classification
    pub speaker: Speaker,

    /// The literal tag text before the colon; empty for untagged segments
    pub speaker_tag: String,

    /// Utterance text
    pub text: String,
}

/// Split a raw transcript into speaker-tagged turns.
///
/// Segments are delimited by newline, carriage return, or any run of two
/// or more whitespace characters. Empty segments are dropped. Each segment
/// splits at its first colon: a tag equal to "AI" marks an assistant turn,
/// any other tag a counterparty turn. A segment without a colon becomes a
/// counterparty turn with an empty tag and the whole segment as text.
pub fn split_transcript(raw: &str) -> Vec<TranscriptTurn> {
    let mut turns = Vec::new();
    let mut current = String::new();
    let mut ws_run = 0usize;

    let flush = |buf: &mut String, turns: &mut Vec<TranscriptTurn>| {
        let segment = buf.trim();
        if !segment.is_empty() {
            turns.push(segment_to_turn(segment));
        }
        buf.clear();
    };

    for c in raw.chars() {
        if c == '\n' || c == '\r' {
            flush(&mut current, &mut turns);
            ws_run = 0;
        } else if c.is_whitespace() {
            ws_run += 1;
            current.push(c);
        } else {
            if ws_run >= 2 {
                flush(&mut current, &mut turns);
            }
            ws_run = 0;
            current.push(c);
        }
    }
    flush(&mut current, &mut turns);

    turns
}

fn segment_to_turn(segment: &str) -> TranscriptTurn {
    match segment.split_once(':') {
        Some((tag, text)) => {
            let tag = tag.trim();
            let speaker = if tag == "AI" {
                Speaker::Assistant
            } else {
                Speaker::Counterparty
            };
            TranscriptTurn {
                speaker,
                speaker_tag: tag.to_string(),
                text: text.trim().to_string(),
            }
        }
        // No colon: whole segment is content, untagged, counterparty by policy
        None => TranscriptTurn {
            speaker: Speaker::Counterparty,
            speaker_tag: String::new(),
            text: segment.to_string(),
        },
    }
}
